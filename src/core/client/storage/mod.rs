pub mod error;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
pub use error::StorageError;

/// Trait defining object storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Fetch the raw bytes of an object by bucket and key.
    ///
    /// The key must already be URL-decoded; storage-event notifications
    /// carry it URL-encoded and the classifier decodes it before lookup.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError>;
}

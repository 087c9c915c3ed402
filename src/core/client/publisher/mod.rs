pub mod error;
pub mod sns;

use crate::types::message::PublishId;
use async_trait::async_trait;
use bytes::Bytes;
pub use error::PublisherError;

/// Trait defining pub/sub publish operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublisherClient: Send + Sync {
    /// Resolve the topic identity for the configured topic name.
    ///
    /// Called once at startup; a failure here is fatal.
    async fn resolve_topic(&self) -> Result<String, PublisherError>;

    /// Publish a payload to the topic, returning the sink's publish id.
    ///
    /// Synchronous from the relay loop's perspective: the loop observes
    /// success or failure before deciding whether to delete the source
    /// message. No fire-and-forget.
    async fn publish(&self, payload: Bytes) -> Result<PublishId, PublisherError>;
}

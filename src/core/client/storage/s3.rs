use crate::core::client::storage::{StorageClient, StorageError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;

/// S3-backed implementation of the blob store.
///
/// Unlike the queue and publisher, no identity is resolved at startup: the
/// bucket and key come from each storage-event notification.
#[derive(Clone, Debug)]
pub struct S3Storage {
    client: Arc<Client>,
}

impl S3Storage {
    /// Creates a new S3Storage with the provided AWS configuration.
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    ///
    /// # Returns
    /// * `Self` - The new S3 storage client.
    pub fn new(aws_config: &SdkConfig) -> Self {
        // Path-style addressing keeps bucket resolution working against
        // local emulators that don't serve virtual-hosted buckets.
        let s3_config_builder = aws_sdk_s3::config::Builder::from(aws_config).force_path_style(true);
        let client = Client::from_conf(s3_config_builder.build());
        Self { client: Arc::new(client) }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl StorageClient for S3Storage {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let output = self.client().get_object().bucket(bucket).key(key).send().await?;

        let data = output.body.collect().await.map_err(|e| StorageError::ObjectStreamError(e.to_string()))?;

        Ok(data.into_bytes())
    }
}

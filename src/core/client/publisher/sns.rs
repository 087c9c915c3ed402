use crate::core::client::publisher::{PublisherClient, PublisherError};
use crate::types::message::PublishId;
use crate::types::params::PublisherArgs;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;
use bytes::Bytes;
use std::sync::{Arc, OnceLock};

/// SNS-backed implementation of the pub/sub sink.
#[derive(Clone, Debug)]
pub struct SnsPublisher {
    client: Arc<Client>,
    topic_name: String,
    cached_topic_arn: Arc<OnceLock<String>>,
}

impl SnsPublisher {
    /// Creates a new SnsPublisher with the provided AWS configuration.
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    /// * `args` - The publisher arguments.
    ///
    /// # Returns
    /// * `Self` - The new SNS publisher client.
    pub fn new(aws_config: &SdkConfig, args: &PublisherArgs) -> Self {
        Self {
            client: Arc::new(Client::new(aws_config)),
            topic_name: args.topic_name.clone(),
            cached_topic_arn: Arc::new(OnceLock::new()),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// fetch_topic_arn_by_name - List topics and match the configured name
    /// against the last ARN segment.
    async fn fetch_topic_arn_by_name(&self) -> Result<String, PublisherError> {
        let resp = self.client().list_topics().send().await?;

        for topic in resp.topics() {
            if let Some(arn) = topic.topic_arn() {
                let parts: Vec<&str> = arn.split(':').collect();
                if parts.len() == 6 && parts[5] == self.topic_name {
                    return Ok(arn.to_string());
                }
            }
        }

        Err(PublisherError::TopicNotFound(self.topic_name.clone()))
    }

    /// get_topic_arn - Return the topic ARN, resolving and caching it on
    /// first use.
    async fn get_topic_arn(&self) -> Result<String, PublisherError> {
        if let Some(arn) = self.cached_topic_arn.get() {
            return Ok(arn.clone());
        }

        let arn = self.fetch_topic_arn_by_name().await?;
        let _ = self.cached_topic_arn.set(arn.clone());
        Ok(arn)
    }
}

#[async_trait]
impl PublisherClient for SnsPublisher {
    async fn resolve_topic(&self) -> Result<String, PublisherError> {
        self.get_topic_arn().await
    }

    async fn publish(&self, payload: Bytes) -> Result<PublishId, PublisherError> {
        let message = String::from_utf8(payload.to_vec())?;

        let response = self.client().publish().topic_arn(self.get_topic_arn().await?).message(message).send().await?;

        let message_id = response.message_id().ok_or(PublisherError::MissingPublishId)?;
        Ok(PublishId(message_id.to_string()))
    }
}

use crate::core::client::queue::{QueueClient, QueueError};
use crate::types::message::QueueMessage;
use crate::types::params::QueueArgs;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client;
use std::sync::{Arc, OnceLock};

/// SQS-backed implementation of the pull queue.
#[derive(Clone, Debug)]
pub struct SqsQueue {
    client: Arc<Client>,
    queue_name: String,
    wait_time_seconds: i32,
    max_messages: i32,
    cached_queue_url: Arc<OnceLock<String>>,
}

impl SqsQueue {
    /// Creates a new SqsQueue with the provided AWS configuration.
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    /// * `args` - The queue arguments.
    ///
    /// # Returns
    /// * `Self` - The new SQS queue client.
    pub fn new(aws_config: &SdkConfig, args: &QueueArgs) -> Self {
        let sqs_config_builder = aws_sdk_sqs::config::Builder::from(aws_config);
        let client = Client::from_conf(sqs_config_builder.build());
        Self {
            client: Arc::new(client),
            queue_name: args.queue_name.clone(),
            wait_time_seconds: args.wait_time_seconds,
            max_messages: args.max_messages,
            cached_queue_url: Arc::new(OnceLock::new()),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// get_queue_url - Get the queue URL for the configured queue name,
    /// fetching it from the service on first use and caching it after.
    async fn get_queue_url(&self) -> Result<String, QueueError> {
        if let Some(url) = self.cached_queue_url.get() {
            return Ok(url.clone());
        }

        let queue_url = self
            .client()
            .get_queue_url()
            .queue_name(&self.queue_name)
            .send()
            .await?
            .queue_url()
            .ok_or_else(|| QueueError::FailedToGetQueueUrl(self.queue_name.clone()))?
            .to_string();

        let _ = self.cached_queue_url.set(queue_url.clone());
        Ok(queue_url)
    }
}

#[async_trait]
impl QueueClient for SqsQueue {
    async fn resolve_queue_url(&self) -> Result<String, QueueError> {
        self.get_queue_url().await
    }

    /// Long-poll the queue. SQS messages missing a body or receipt handle
    /// cannot be relayed or safely deleted; they are logged and skipped.
    async fn receive_messages(&self) -> Result<Vec<QueueMessage>, QueueError> {
        let queue_url = self.get_queue_url().await?;

        let response = self
            .client()
            .receive_message()
            .queue_url(&queue_url)
            .max_number_of_messages(self.max_messages)
            .wait_time_seconds(self.wait_time_seconds)
            .send()
            .await?;

        let mut messages = Vec::new();
        for message in response.messages.unwrap_or_default() {
            match (message.body(), message.receipt_handle()) {
                (Some(body), Some(receipt_handle)) => {
                    messages.push(QueueMessage {
                        message_id: message.message_id().unwrap_or_default().to_string(),
                        body: body.to_string(),
                        receipt_handle: receipt_handle.to_string(),
                    });
                }
                _ => {
                    tracing::error!(
                        queue = %self.queue_name,
                        message_id = ?message.message_id(),
                        "Received message missing body or receipt handle, skipping"
                    );
                }
            }
        }
        Ok(messages)
    }

    async fn delete_message(&self, receipt_handle: &str) -> Result<(), QueueError> {
        let queue_url = self.get_queue_url().await?;
        self.client().delete_message().queue_url(&queue_url).receipt_handle(receipt_handle).send().await?;
        Ok(())
    }
}

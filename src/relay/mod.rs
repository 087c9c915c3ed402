pub mod classifier;

use crate::core::client::queue::QueueError;
use crate::core::config::Config;
use crate::error::RelayError;
use crate::types::message::{Classification, PublishId, QueueMessage};
use crate::BridgeResult;
use bytes::Bytes;
use classifier::classify;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// The relay loop: poll the queue, resolve each notification into its
/// payload, publish it, and delete the source message.
///
/// Each message moves through received, classified, resolved, published and
/// deleted in order; a failure at any step abandons the message without
/// deleting it, so the queue's visibility timeout redelivers it later.
/// Durability lives entirely in the external queue and store, the worker
/// keeps no state across iterations. Running several workers against the
/// same queue is safe since the queue service arbitrates delivery.
#[derive(Clone)]
pub struct RelayWorker {
    config: Arc<Config>,
    cancellation_token: CancellationToken,
}

impl RelayWorker {
    pub fn new(config: Arc<Config>, cancellation_token: CancellationToken) -> Self {
        Self { config, cancellation_token }
    }

    /// run - Poll for messages until the cancellation token fires.
    ///
    /// A failed receive is recovered locally with a fixed backoff; it never
    /// terminates the loop, and neither does any per-message failure.
    pub async fn run(&self) -> BridgeResult<()> {
        let backoff = Duration::from_secs(self.config.relay_params().poll_backoff_seconds);
        info!("Relay worker started, polling for messages");

        loop {
            if self.cancellation_token.is_cancelled() {
                break;
            }

            tokio::select! {
                _ = self.cancellation_token.cancelled() => break,

                poll_result = self.poll_once() => {
                    if let Err(e) = poll_result {
                        error!(error = %e, "Failed to receive from queue, backing off");
                        tokio::select! {
                            _ = self.cancellation_token.cancelled() => break,
                            _ = sleep(backoff) => {}
                        }
                    }
                }
            }
        }

        info!("Relay worker stopped");
        Ok(())
    }

    /// poll_once - One receive call plus the relay of every returned
    /// message. Per-message failures are logged and isolated; only the
    /// receive failure itself propagates, so the caller can back off.
    /// Returns the number of messages relayed.
    pub async fn poll_once(&self) -> Result<usize, QueueError> {
        let messages = self.config.queue().receive_messages().await?;

        let mut relayed = 0;
        for message in &messages {
            match self.relay_message(message).await {
                Ok(publish_id) => {
                    relayed += 1;
                    debug!(
                        message_id = %message.message_id,
                        publish_id = %publish_id,
                        "Relayed message"
                    );
                }
                Err(e) => {
                    error!(
                        message_id = %message.message_id,
                        error = %e,
                        "Failed to relay message, leaving it for redelivery"
                    );
                }
            }
        }
        Ok(relayed)
    }

    /// relay_message - Drive one message through parse, classify, resolve,
    /// publish and delete. The delete is issued only after the publish has
    /// returned an id, so a failure anywhere can cause a duplicate relay
    /// but never a lost message.
    pub async fn relay_message(&self, message: &QueueMessage) -> Result<PublishId, RelayError> {
        debug!(message_id = %message.message_id, "Received message");
        let body: serde_json::Value = serde_json::from_str(&message.body)?;

        let payload: Bytes = match classify(&body) {
            Classification::StorageEvent(event) => {
                if event.additional_records > 0 {
                    warn!(
                        message_id = %message.message_id,
                        skipped = event.additional_records,
                        "Storage-event envelope carries multiple records, only the first is relayed"
                    );
                }
                info!(
                    message_id = %message.message_id,
                    bucket = %event.bucket,
                    key = %event.key,
                    "Fetching object for storage-event notification"
                );
                self.config.storage().get_object(&event.bucket, &event.key).await?
            }
            Classification::Opaque(value) => serde_json::to_vec(&value)?.into(),
        };

        let publish_id = self.config.publisher().publish(payload).await?;
        info!(message_id = %message.message_id, publish_id = %publish_id, "Published payload");

        self.config.queue().delete_message(&message.receipt_handle).await.map_err(RelayError::Acknowledge)?;
        debug!(message_id = %message.message_id, "Deleted source message");

        Ok(publish_id)
    }
}

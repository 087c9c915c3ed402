pub mod error;
pub mod sqs;

use crate::types::message::QueueMessage;
use async_trait::async_trait;
pub use error::QueueError;

/// Trait defining pull-queue operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Resolve the queue URL for the configured queue name.
    ///
    /// Called once at startup; a failure here is fatal since no relaying is
    /// possible without a resolved queue.
    async fn resolve_queue_url(&self) -> Result<String, QueueError>;

    /// Long-poll the queue for up to the configured wait time.
    ///
    /// Returns as soon as a message arrives. An empty result is not an
    /// error, it signals "keep polling".
    async fn receive_messages(&self) -> Result<Vec<QueueMessage>, QueueError>;

    /// Delete a delivery by its receipt handle.
    ///
    /// Must be called exactly once per successfully relayed message and
    /// never before the publish for that message has succeeded.
    async fn delete_message(&self, receipt_handle: &str) -> Result<(), QueueError>;
}

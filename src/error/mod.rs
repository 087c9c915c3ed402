use thiserror::Error;

use crate::core::client::publisher::PublisherError;
use crate::core::client::queue::QueueError;
use crate::core::client::storage::StorageError;

/// Result type for startup and process-level operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that abort the process. Everything here is either a startup
/// configuration failure or an unrecoverable runtime fault; per-message
/// failures go through [`RelayError`] instead and never reach `main`.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Queue error: {0}")]
    QueueError(#[from] QueueError),

    #[error("Publisher error: {0}")]
    PublisherError(#[from] PublisherError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Worker error
    #[error("Worker error: {0}")]
    WorkerError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Per-message relay failures. A message failing with any of these is left
/// un-deleted on the queue and surfaces again through the queue's own
/// visibility-timeout redelivery; the relay loop logs it and moves on.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Message body is not valid JSON
    #[error("Malformed message body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Object fetch for a storage-event notification failed
    #[error("Blob fetch failed: {0}")]
    Fetch(#[from] StorageError),

    /// Publish to the topic failed; the source message stays on the queue
    #[error("Publish failed: {0}")]
    Publish(#[from] PublisherError),

    /// Delete after a successful publish failed; the message will be
    /// redelivered and relayed again (at-least-once duplicate)
    #[error("Delete after publish failed: {0}")]
    Acknowledge(QueueError),
}

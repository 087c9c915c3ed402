// Client abstractions module - contains all client interface traits

pub mod publisher;
pub mod queue;
pub mod storage;

// Re-export commonly used types
pub use publisher::{sns::SnsPublisher, PublisherClient};
pub use queue::{sqs::SqsQueue, QueueClient};
pub use storage::{s3::S3Storage, StorageClient};

use aws_sdk_sns::error::SdkError;
use aws_sdk_sns::operation::list_topics::ListTopicsError;
use aws_sdk_sns::operation::publish::PublishError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Failed to list topics: {0}")]
    ListTopicsError(#[from] SdkError<ListTopicsError>),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Failed to publish: {0}")]
    PublishError(#[from] SdkError<PublishError>),

    /// The sink carries text messages, so payload bytes must be valid UTF-8
    #[error("Payload is not valid UTF-8: {0}")]
    InvalidPayloadEncoding(#[from] std::string::FromUtf8Error),

    #[error("Publish succeeded but no publish id was returned")]
    MissingPublishId,
}

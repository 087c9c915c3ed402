use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Covers both a missing object and a permission failure; the service
    /// error inside says which
    #[error("Failed to get object: {0}")]
    GetObjectError(#[from] SdkError<GetObjectError>),

    #[error("Failed to stream object body: {0}")]
    ObjectStreamError(String),
}

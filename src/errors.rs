use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventsError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("uninitialised client")]
    UninitializedClient,

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Message payload is not valid UTF-8: {0}")]
    InvalidPayload(#[source] std::str::Utf8Error),

    #[error("Failed to decode message envelope: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error(transparent)]
    HandlerError(#[from] anyhow::Error),
}

// Generic implementation for AWS SDK errors. The SNS transport maps its
// errors by hand so it can name the failed operation.
impl<E> From<aws_sdk_sqs::error::SdkError<E>> for EventsError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: aws_sdk_sqs::error::SdkError<E>) -> Self {
        EventsError::AwsError(aws_sdk_sqs::error::DisplayErrorContext(error).to_string())
    }
}

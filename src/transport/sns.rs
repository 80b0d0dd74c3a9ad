use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sns::error::DisplayErrorContext;

use super::TopicTransport;
use crate::errors::EventsError;

/// [`TopicTransport`] backed by the AWS SNS client.
#[derive(Debug, Clone)]
pub struct SnsTransport {
    client: SnsClient,
}

impl SnsTransport {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: SnsClient::new(shared_config),
        }
    }

    /// Wraps a pre-built `SnsClient`, e.g. one with a custom retry or endpoint
    /// configuration that the shared `SdkConfig` does not carry.
    #[must_use]
    pub fn from_client(client: SnsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TopicTransport for SnsTransport {
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<Option<String>, EventsError> {
        let output = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                EventsError::AwsError(format!(
                    "Failed to publish to SNS: {}",
                    DisplayErrorContext(e)
                ))
            })?;
        Ok(output.message_id().map(str::to_string))
    }
}

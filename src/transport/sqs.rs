use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::types::MessageSystemAttributeName;

use super::{QueueTransport, RawMessage, ReceiveRequest};
use crate::errors::EventsError;

/// [`QueueTransport`] backed by the AWS SQS client.
#[derive(Debug, Clone)]
pub struct SqsTransport {
    client: SqsClient,
}

impl SqsTransport {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: SqsClient::new(shared_config),
        }
    }

    /// Wraps a pre-built `SqsClient`, e.g. one with a custom retry or endpoint
    /// configuration that the shared `SdkConfig` does not carry.
    #[must_use]
    pub fn from_client(client: SqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueTransport for SqsTransport {
    async fn receive(&self, request: &ReceiveRequest) -> Result<Vec<RawMessage>, EventsError> {
        let attribute_names = request
            .attribute_names
            .iter()
            .map(|name| MessageSystemAttributeName::from(name.as_str()))
            .collect();

        let output = self
            .client
            .receive_message()
            .queue_url(&request.queue_url)
            .max_number_of_messages(request.max_number_of_messages)
            .visibility_timeout(request.visibility_timeout)
            .wait_time_seconds(request.wait_time_seconds)
            .set_message_system_attribute_names(Some(attribute_names))
            .send()
            .await?;

        let messages = output
            .messages()
            .iter()
            .map(|m| RawMessage {
                message_id: m.message_id().map(str::to_string),
                body: m.body().unwrap_or_default().as_bytes().to_vec(),
                receipt_handle: m.receipt_handle().map(str::to_string),
                attributes: m
                    .attributes()
                    .map(|attrs| {
                        attrs
                            .iter()
                            .map(|(k, v)| (k.as_str().to_string(), v.clone()))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        Ok(messages)
    }

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), EventsError> {
        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;
        Ok(())
    }
}

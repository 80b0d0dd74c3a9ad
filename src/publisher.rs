//! Topic publisher

use std::sync::Arc;
use tracing::debug;

use crate::errors::EventsError;
use crate::transport::{SnsTransport, TopicTransport};

#[derive(Clone, Default)]
pub struct Publisher {
    transport: Option<Arc<dyn TopicTransport>>,
    topic_arn: String,
}

impl Publisher {
    /// Creates a publisher bound to the SNS client built from `shared_config`.
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig, topic_arn: impl Into<String>) -> Self {
        Self::with_transport(topic_arn, Arc::new(SnsTransport::new(shared_config)))
    }

    /// Uses a caller-supplied transport instead of the SNS client.
    #[must_use]
    pub fn with_transport(
        topic_arn: impl Into<String>,
        transport: Arc<dyn TopicTransport>,
    ) -> Self {
        Self {
            transport: Some(transport),
            topic_arn: topic_arn.into(),
        }
    }

    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    /// Sends `message` to the configured topic and returns the message id.
    ///
    /// # Errors
    ///
    /// Returns `UninitializedClient` if the publisher has no transport,
    /// `InvalidPayload` if `message` is not UTF-8 (nothing is sent), otherwise
    /// the transport's error as-is.
    pub async fn publish(&self, message: &[u8]) -> Result<Option<String>, EventsError> {
        let transport = self
            .transport
            .as_ref()
            .ok_or(EventsError::UninitializedClient)?;

        let body = std::str::from_utf8(message).map_err(EventsError::InvalidPayload)?;
        let message_id = transport.publish(&self.topic_arn, body).await?;

        debug!(topic_arn = %self.topic_arn, message_id = ?message_id, "Published message");
        Ok(message_id)
    }
}

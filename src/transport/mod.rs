//! Capability traits over the queue and topic services.
//!
//! Production code binds these to the AWS SDK clients in [`sqs`] and [`sns`];
//! tests bind them to `mockall` mocks.

pub mod sns;
pub mod sqs;

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::EventsError;

pub use sns::SnsTransport;
pub use sqs::SqsTransport;

/// Parameters of a single long-poll receive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveRequest {
    pub queue_url: String,
    pub max_number_of_messages: i32,
    pub visibility_timeout: i32,
    pub wait_time_seconds: i32,
    pub attribute_names: Vec<String>,
}

/// A message as delivered by the queue, before envelope decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    pub message_id: Option<String>,
    pub body: Vec<u8>,
    pub receipt_handle: Option<String>,
    pub attributes: HashMap<String, String>,
}

impl RawMessage {
    #[must_use]
    pub fn new(body: impl Into<Vec<u8>>, receipt_handle: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            receipt_handle: Some(receipt_handle.into()),
            ..Self::default()
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueTransport: Send + Sync {
    /// Fetch up to `max_number_of_messages`, waiting at most `wait_time_seconds`.
    async fn receive(&self, request: &ReceiveRequest) -> Result<Vec<RawMessage>, EventsError>;

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), EventsError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicTransport: Send + Sync {
    /// Returns the provider-assigned message id, if one was reported.
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<Option<String>, EventsError>;
}

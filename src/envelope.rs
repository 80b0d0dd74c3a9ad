//! Transport envelope used by AWS notifications delivered to a queue.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::EventsError;

// Synthetic notifications emitted by AWS when a subscription or policy is checked.
static TEST_EVENT_MATCHER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*:TestEvent$").expect("valid test event pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Event", default)]
    pub event: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}

impl Envelope {
    /// # Errors
    ///
    /// Returns `DecodeError` if the body is not a JSON object with string fields.
    pub fn from_slice(body: &[u8]) -> Result<Self, EventsError> {
        Ok(serde_json::from_slice(body)?)
    }

    #[must_use]
    pub fn is_test_event(&self) -> bool {
        TEST_EVENT_MATCHER.is_match(&self.event)
    }

    #[must_use]
    pub fn into_payload(self) -> Vec<u8> {
        self.message.into_bytes()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ResourceCreated,
    ResourceDeleted,
    #[serde(other)]
    Unknown,
}

/// Payload published and consumed by the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoEvent {
    pub id: u64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub published_at: DateTime<Utc>,
}

impl DemoEvent {
    #[must_use]
    pub fn created(id: u64) -> Self {
        Self {
            id,
            event_type: EventType::ResourceCreated,
            published_at: Utc::now(),
        }
    }
}

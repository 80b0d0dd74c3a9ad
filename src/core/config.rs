use std::env;

use url::Url;

use crate::errors::EventsError;

pub const DEFAULT_MAX_NUMBER_OF_MESSAGES: i32 = 10;
pub const DEFAULT_VISIBILITY_TIMEOUT: i32 = 5;
pub const DEFAULT_WAIT_TIME_SECONDS: i32 = 10;
pub const ALL_ATTRIBUTES: &str = "All";

const MAX_VISIBILITY_TIMEOUT: i32 = 43_200;
const MAX_WAIT_TIME_SECONDS: i32 = 20;
const DEFAULT_PUBLISH_INTERVAL_SECS: u64 = 5;

/// Receive settings for a [`Listener`](crate::listener::Listener).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    pub queue_url: String,
    pub max_number_of_messages: i32,
    pub visibility_timeout: i32,
    pub wait_time_seconds: i32,
    pub attribute_names: Vec<String>,
    pub want_test_events: bool,
}

impl ListenerConfig {
    /// Starts a builder with every option at its default.
    #[must_use]
    pub fn builder(queue_url: impl Into<String>) -> ListenerConfigBuilder {
        ListenerConfigBuilder {
            queue_url: queue_url.into(),
            max_number_of_messages: None,
            visibility_timeout: None,
            wait_time_seconds: None,
            attribute_names: None,
            want_test_events: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListenerConfigBuilder {
    queue_url: String,
    max_number_of_messages: Option<i32>,
    visibility_timeout: Option<i32>,
    wait_time_seconds: Option<i32>,
    attribute_names: Option<Vec<String>>,
    want_test_events: Option<bool>,
}

impl ListenerConfigBuilder {
    /// How many messages can be returned from the queue in one go. Defaults to 10.
    #[must_use]
    pub fn max_number_of_messages(mut self, n: i32) -> Self {
        self.max_number_of_messages = Some(n);
        self
    }

    /// How long a received message stays hidden from other consumers. Defaults to 5 seconds.
    #[must_use]
    pub fn visibility_timeout(mut self, seconds: i32) -> Self {
        self.visibility_timeout = Some(seconds);
        self
    }

    /// How long a receive request waits for a message. Defaults to 10 seconds.
    #[must_use]
    pub fn wait_time_seconds(mut self, seconds: i32) -> Self {
        self.wait_time_seconds = Some(seconds);
        self
    }

    /// Which system attributes the queue should return. Defaults to all of them.
    #[must_use]
    pub fn attribute_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn want_test_events(mut self, want: bool) -> Self {
        self.want_test_events = Some(want);
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if any option is outside the range SQS accepts.
    pub fn build(self) -> Result<ListenerConfig, EventsError> {
        if self.queue_url.trim().is_empty() {
            return Err(EventsError::ConfigError(
                "queue url must not be empty".to_string(),
            ));
        }

        let max_number_of_messages = self
            .max_number_of_messages
            .unwrap_or(DEFAULT_MAX_NUMBER_OF_MESSAGES);
        if !(1..=10).contains(&max_number_of_messages) {
            return Err(EventsError::ConfigError(format!(
                "max_number_of_messages must be between 1 and 10, got {max_number_of_messages}"
            )));
        }

        let visibility_timeout = self.visibility_timeout.unwrap_or(DEFAULT_VISIBILITY_TIMEOUT);
        if !(0..=MAX_VISIBILITY_TIMEOUT).contains(&visibility_timeout) {
            return Err(EventsError::ConfigError(format!(
                "visibility_timeout must be between 0 and {MAX_VISIBILITY_TIMEOUT}, got {visibility_timeout}"
            )));
        }

        let wait_time_seconds = self.wait_time_seconds.unwrap_or(DEFAULT_WAIT_TIME_SECONDS);
        if !(0..=MAX_WAIT_TIME_SECONDS).contains(&wait_time_seconds) {
            return Err(EventsError::ConfigError(format!(
                "wait_time_seconds must be between 0 and {MAX_WAIT_TIME_SECONDS}, got {wait_time_seconds}"
            )));
        }

        let attribute_names = self
            .attribute_names
            .unwrap_or_else(|| vec![ALL_ATTRIBUTES.to_string()]);
        if attribute_names.is_empty() {
            return Err(EventsError::ConfigError(
                "attribute_names must not be empty".to_string(),
            ));
        }

        Ok(ListenerConfig {
            queue_url: self.queue_url,
            max_number_of_messages,
            visibility_timeout,
            wait_time_seconds,
            attribute_names,
            want_test_events: self.want_test_events.unwrap_or(false),
        })
    }
}

/// Settings for the demo binary, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub queue_url: String,
    pub topic_arn: String,
    pub endpoint_url: Option<String>,
    pub publish_interval_secs: u64,
    pub want_test_events: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, EventsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EventsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| EventsError::ConfigError(format!("{key}: not set")))
        };

        let endpoint_url = lookup("AWS_ENDPOINT_URL");
        if let Some(ref endpoint) = endpoint_url {
            Url::parse(endpoint)
                .map_err(|e| EventsError::ConfigError(format!("AWS_ENDPOINT_URL: {e}")))?;
        }

        let publish_interval_secs = match lookup("PUBLISH_INTERVAL_SECS") {
            Some(v) => v
                .parse()
                .map_err(|e| EventsError::ConfigError(format!("PUBLISH_INTERVAL_SECS: {e}")))?,
            None => DEFAULT_PUBLISH_INTERVAL_SECS,
        };

        let want_test_events = match lookup("WANT_TEST_EVENTS") {
            Some(v) => v
                .parse()
                .map_err(|e| EventsError::ConfigError(format!("WANT_TEST_EVENTS: {e}")))?,
            None => false,
        };

        Ok(Self {
            queue_url: required("QUEUE_URL")?,
            topic_arn: required("TOPIC_ARN")?,
            endpoint_url,
            publish_interval_secs,
            want_test_events,
        })
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the queue url is empty.
    pub fn listener_config(&self) -> Result<ListenerConfig, EventsError> {
        ListenerConfig::builder(&self.queue_url)
            .want_test_events(self.want_test_events)
            .build()
    }
}

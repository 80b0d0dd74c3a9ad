use std::collections::HashMap;

use aws_events::core::config::{
    ALL_ATTRIBUTES, AppConfig, DEFAULT_MAX_NUMBER_OF_MESSAGES, DEFAULT_VISIBILITY_TIMEOUT,
    DEFAULT_WAIT_TIME_SECONDS, ListenerConfig,
};
use aws_events::errors::EventsError;

const QUEUE_URL: &str = "http://sqs.us-east-1.localhost.localstack.cloud:4566/000000000000/test-queue";

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_listener_config_defaults() {
    let config = ListenerConfig::builder(QUEUE_URL).build().unwrap();

    assert_eq!(config.queue_url, QUEUE_URL);
    assert_eq!(config.max_number_of_messages, DEFAULT_MAX_NUMBER_OF_MESSAGES);
    assert_eq!(config.max_number_of_messages, 10);
    assert_eq!(config.visibility_timeout, DEFAULT_VISIBILITY_TIMEOUT);
    assert_eq!(config.visibility_timeout, 5);
    assert_eq!(config.wait_time_seconds, DEFAULT_WAIT_TIME_SECONDS);
    assert_eq!(config.wait_time_seconds, 10);
    assert_eq!(config.attribute_names, vec![ALL_ATTRIBUTES.to_string()]);
    assert!(!config.want_test_events);
}

#[test]
fn test_listener_config_overrides() {
    let config = ListenerConfig::builder(QUEUE_URL)
        .max_number_of_messages(1)
        .visibility_timeout(60)
        .wait_time_seconds(20)
        .attribute_names(["SentTimestamp", "ApproximateReceiveCount"])
        .want_test_events(true)
        .build()
        .unwrap();

    assert_eq!(config.max_number_of_messages, 1);
    assert_eq!(config.visibility_timeout, 60);
    assert_eq!(config.wait_time_seconds, 20);
    assert_eq!(
        config.attribute_names,
        vec!["SentTimestamp".to_string(), "ApproximateReceiveCount".to_string()]
    );
    assert!(config.want_test_events);
}

#[test]
fn test_listener_config_rejects_out_of_range_values() {
    let cases = [
        ListenerConfig::builder(QUEUE_URL).max_number_of_messages(0),
        ListenerConfig::builder(QUEUE_URL).max_number_of_messages(11),
        ListenerConfig::builder(QUEUE_URL).visibility_timeout(-1),
        ListenerConfig::builder(QUEUE_URL).visibility_timeout(43_201),
        ListenerConfig::builder(QUEUE_URL).wait_time_seconds(21),
        ListenerConfig::builder(QUEUE_URL).attribute_names(Vec::<String>::new()),
        ListenerConfig::builder("  "),
    ];

    for builder in cases {
        match builder.build() {
            Err(EventsError::ConfigError(_)) => {}
            other => panic!("Expected ConfigError, got: {other:?}"),
        }
    }
}

#[test]
fn test_app_config_from_lookup() {
    let config = AppConfig::from_lookup(lookup(&[
        ("QUEUE_URL", QUEUE_URL),
        ("TOPIC_ARN", "arn:aws:sns:us-east-1:000000000000:test-notif"),
        ("AWS_ENDPOINT_URL", "http://localhost:4566"),
        ("PUBLISH_INTERVAL_SECS", "2"),
    ]))
    .unwrap();

    assert_eq!(config.queue_url, QUEUE_URL);
    assert_eq!(config.topic_arn, "arn:aws:sns:us-east-1:000000000000:test-notif");
    assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    assert_eq!(config.publish_interval_secs, 2);
    assert!(!config.want_test_events);

    let listener_config = config.listener_config().unwrap();
    assert_eq!(listener_config.queue_url, QUEUE_URL);
}

#[test]
fn test_app_config_defaults_interval() {
    let config = AppConfig::from_lookup(lookup(&[
        ("QUEUE_URL", QUEUE_URL),
        ("TOPIC_ARN", "arn:aws:sns:us-east-1:000000000000:test-notif"),
    ]))
    .unwrap();

    assert_eq!(config.publish_interval_secs, 5);
    assert!(config.endpoint_url.is_none());
}

#[test]
fn test_app_config_missing_queue_url() {
    let err = AppConfig::from_lookup(lookup(&[(
        "TOPIC_ARN",
        "arn:aws:sns:us-east-1:000000000000:test-notif",
    )]))
    .unwrap_err();

    assert!(err.to_string().contains("QUEUE_URL"));
}

#[test]
fn test_app_config_rejects_invalid_values() {
    let bad_endpoint = AppConfig::from_lookup(lookup(&[
        ("QUEUE_URL", QUEUE_URL),
        ("TOPIC_ARN", "arn"),
        ("AWS_ENDPOINT_URL", "not a url"),
    ]));
    assert!(matches!(bad_endpoint, Err(EventsError::ConfigError(_))));

    let bad_flag = AppConfig::from_lookup(lookup(&[
        ("QUEUE_URL", QUEUE_URL),
        ("TOPIC_ARN", "arn"),
        ("WANT_TEST_EVENTS", "maybe"),
    ]));
    assert!(matches!(bad_flag, Err(EventsError::ConfigError(_))));
}

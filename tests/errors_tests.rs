use std::error::Error;
use aws_events::errors::EventsError;

#[test]
fn test_events_error_implements_error_trait() {
    // Verify EventsError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = EventsError::ConfigError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_events_error_display() {
    let error = EventsError::AwsError("queue missing".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: queue missing"
    );

    let error = EventsError::ConfigError("bad value".to_string());
    assert_eq!(format!("{error}"), "Invalid configuration: bad value");

    let error = EventsError::UninitializedClient;
    assert_eq!(format!("{error}"), "uninitialised client");
}

#[test]
fn test_events_error_from_conversions() {
    // Handler errors keep their own message
    let err = anyhow::anyhow!("handler failed");
    let events_err: EventsError = err.into();

    match events_err {
        EventsError::HandlerError(ref e) => assert_eq!(e.to_string(), "handler failed"),
        _ => panic!("Unexpected error type"),
    }
    assert_eq!(events_err.to_string(), "handler failed");

    // Malformed JSON becomes a decode error with the serde source attached
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let events_err: EventsError = json_err.into();
    assert!(matches!(events_err, EventsError::DecodeError(_)));
    assert!(events_err.source().is_some());
}

#[test]
fn test_invalid_payload_error_keeps_utf8_source() {
    let utf8_err = std::str::from_utf8(&[0x66, 0xff]).unwrap_err();
    let events_err = EventsError::InvalidPayload(utf8_err);

    assert!(
        events_err
            .to_string()
            .starts_with("Message payload is not valid UTF-8")
    );
    assert!(events_err.source().is_some());
}

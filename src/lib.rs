/// aws-events - thin adapters for consuming SQS queues and publishing to SNS topics.
///
/// The crate provides two independent components:
/// 1. A [`Listener`] that long-polls a queue, hands each message payload to a
///    handler, and deletes the message afterwards
/// 2. A [`Publisher`] that sends one message to one topic per call
///
/// # Architecture
///
/// The system uses:
/// - `aws-sdk-sqs` and `aws-sdk-sns` behind the [`transport`] traits
/// - `tokio-util` cancellation tokens to stop the listener
/// - An unbounded tokio channel as the listener's error sink
///
/// # Example
///
/// ```no_run
/// use aws_events::core::config::ListenerConfig;
/// use aws_events::{Listener, Publisher};
/// use tokio_util::sync::CancellationToken;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     aws_events::setup_logging();
///
///     let shared_config = aws_config::from_env().load().await;
///     let config = ListenerConfig::builder("http://localhost:4566/000000000000/test-queue")
///         .wait_time_seconds(20)
///         .build()?;
///     let listener = Listener::new(&shared_config, config);
///
///     let (errors, mut error_rx) = tokio::sync::mpsc::unbounded_channel();
///     let cancel = CancellationToken::new();
///     tokio::spawn(async move {
///         listener
///             .listen(
///                 cancel,
///                 |_cancel: CancellationToken, payload: Vec<u8>| async move {
///                     println!("received {} bytes", payload.len());
///                     Ok::<(), anyhow::Error>(())
///                 },
///                 errors,
///             )
///             .await;
///     });
///
///     let publisher = Publisher::new(&shared_config, "arn:aws:sns:us-east-1:000000000000:test-notif");
///     publisher.publish(b"hello").await?;
///
///     while let Some(e) = error_rx.recv().await {
///         eprintln!("{e}");
///     }
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod envelope;
pub mod errors;
pub mod listener;
pub mod publisher;
pub mod transport;

pub use errors::EventsError;
pub use listener::{Listener, MessageHandler};
pub use publisher::Publisher;

/// Configure structured logging with JSON format.
///
/// The filter is taken from `RUST_LOG`, falling back to `info`. Calling this
/// more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// aws_events::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

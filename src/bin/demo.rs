// Demo driver: consumes the queue in the background while publishing a demo
// event to the topic on a fixed interval. Point it at LocalStack with
// AWS_ENDPOINT_URL=http://localhost:4566.

use std::time::Duration;

use aws_events::core::config::AppConfig;
use aws_events::core::models::{DemoEvent, EventType};
use aws_events::listener::report;
use aws_events::{EventsError, Listener, Publisher};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), EventsError> {
    aws_events::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;
    info!("Configuration: {:?}", config);

    let mut loader = aws_config::from_env();
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let shared_config = loader.load().await;

    let listener = Listener::new(&shared_config, config.listener_config()?);
    let publisher = Publisher::new(&shared_config, &config.topic_arn);

    let (err_tx, mut err_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let listener_task = tokio::spawn({
        let cancel = cancel.clone();
        let err_tx = err_tx.clone();
        async move { listener.listen(cancel, process, err_tx).await }
    });

    let publisher_task = tokio::spawn({
        let cancel = cancel.clone();
        let interval = Duration::from_secs(config.publish_interval_secs);
        async move { publish_loop(publisher, interval, cancel, err_tx).await }
    });

    loop {
        tokio::select! {
            Some(e) = err_rx.recv() => error!(error = %e, "Background task reported an error"),
            _ = tokio::signal::ctrl_c() => {
                info!("Received interrupt, shutting down");
                break;
            }
        }
    }

    cancel.cancel();
    publisher_task.abort();
    // The listener finishes its current receive before observing cancellation.
    if let Err(e) = listener_task.await {
        error!(error = %e, "Listener task failed");
    }
    Ok(())
}

async fn publish_loop(
    publisher: Publisher,
    interval: Duration,
    cancel: CancellationToken,
    errors: mpsc::UnboundedSender<EventsError>,
) {
    let mut id = 0u64;
    loop {
        id += 1;
        let result = match serde_json::to_vec(&DemoEvent::created(id)) {
            Ok(body) => publisher.publish(&body).await,
            Err(e) => Err(EventsError::HandlerError(
                anyhow::Error::new(e).context("Failed to encode demo event"),
            )),
        };
        match result {
            Ok(message_id) => info!(id, message_id = ?message_id, "Published demo event"),
            Err(e) => report(&errors, e),
        }

        tokio::select! {
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(interval) => {}
        }
    }
}

async fn process(cancel: CancellationToken, payload: Vec<u8>) -> anyhow::Result<()> {
    let event: DemoEvent = serde_json::from_slice(&payload)?;
    if cancel.is_cancelled() {
        debug!(id = event.id, "Handling event during shutdown");
    }

    match event.event_type {
        EventType::ResourceCreated => info!(id = event.id, "resource created"),
        EventType::ResourceDeleted => info!(id = event.id, "resource deleted"),
        EventType::Unknown => info!(id = event.id, "unknown event"),
    }

    Ok(())
}

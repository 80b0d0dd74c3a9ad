//! Long-polling queue consumer.
//!
//! Each iteration fetches one batch, hands every decoded payload to the
//! [`MessageHandler`], and deletes the message whatever the handler returned.
//! Failures never stop the loop; they are sent to the caller's error channel.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::config::ListenerConfig;
use crate::envelope::Envelope;
use crate::errors::EventsError;
use crate::transport::{QueueTransport, RawMessage, ReceiveRequest, SqsTransport};

/// Application callback invoked with the inner payload of each message.
///
/// `cancel` is the token the listener was started with, so a slow handler can
/// observe shutdown; the listener itself never interrupts a running handler.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, cancel: CancellationToken, payload: Vec<u8>) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> MessageHandler for F
where
    F: Fn(CancellationToken, Vec<u8>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn handle(&self, cancel: CancellationToken, payload: Vec<u8>) -> anyhow::Result<()> {
        (self)(cancel, payload).await
    }
}

#[derive(Clone, Default)]
pub struct Listener {
    transport: Option<Arc<dyn QueueTransport>>,
    request: Option<ReceiveRequest>,
    want_test_events: bool,
}

impl Listener {
    /// Creates a listener bound to the SQS client built from `shared_config`.
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig, config: ListenerConfig) -> Self {
        Self::with_transport(Arc::new(SqsTransport::new(shared_config)), config)
    }

    #[must_use]
    pub fn with_transport(transport: Arc<dyn QueueTransport>, config: ListenerConfig) -> Self {
        let ListenerConfig {
            queue_url,
            max_number_of_messages,
            visibility_timeout,
            wait_time_seconds,
            attribute_names,
            want_test_events,
        } = config;

        Self {
            transport: Some(transport),
            request: Some(ReceiveRequest {
                queue_url,
                max_number_of_messages,
                visibility_timeout,
                wait_time_seconds,
                attribute_names,
            }),
            want_test_events,
        }
    }

    /// Polls the queue until `cancel` fires.
    ///
    /// Cancellation is checked once per iteration, so an in-flight receive or
    /// handler call runs to completion first.
    pub async fn listen<H>(
        &self,
        cancel: CancellationToken,
        handler: H,
        errors: UnboundedSender<EventsError>,
    ) where
        H: MessageHandler,
    {
        let (Some(transport), Some(request)) = (&self.transport, &self.request) else {
            report(&errors, EventsError::UninitializedClient);
            return;
        };

        info!(queue_url = %request.queue_url, "Starting listener loop");

        while !cancel.is_cancelled() {
            let messages = match transport.receive(request).await {
                Ok(messages) => messages,
                Err(e) => {
                    report(
                        &errors,
                        EventsError::AwsError(format!("Failed to receive message: {e}")),
                    );
                    continue;
                }
            };

            if messages.is_empty() {
                continue;
            }

            debug!(message_count = messages.len(), "Received message batch");

            for message in messages {
                self.process(transport.as_ref(), request, &cancel, &handler, &errors, message)
                    .await;
            }
        }

        info!(queue_url = %request.queue_url, "Listener stopped");
    }

    async fn process<H>(
        &self,
        transport: &dyn QueueTransport,
        request: &ReceiveRequest,
        cancel: &CancellationToken,
        handler: &H,
        errors: &UnboundedSender<EventsError>,
        message: RawMessage,
    ) where
        H: MessageHandler,
    {
        match Envelope::from_slice(&message.body) {
            Ok(envelope) if envelope.is_test_event() && !self.want_test_events => {
                debug!(event = %envelope.event, "Skipping test event");
            }
            Ok(envelope) => {
                if let Err(e) = handler.handle(cancel.clone(), envelope.into_payload()).await {
                    report(errors, EventsError::HandlerError(e));
                }
            }
            Err(e) => report(errors, e),
        }

        let Some(receipt_handle) = message.receipt_handle.as_deref() else {
            report(
                errors,
                EventsError::AwsError(format!(
                    "Message {} has no receipt handle, cannot delete",
                    message.message_id.as_deref().unwrap_or("<unknown>")
                )),
            );
            return;
        };

        if let Err(e) = transport.delete(&request.queue_url, receipt_handle).await {
            report(errors, e);
        }
    }
}

/// Sends `error` to the sink, logging it instead if the receiver is gone.
pub fn report(errors: &UnboundedSender<EventsError>, error: EventsError) {
    if let Err(unsent) = errors.send(error) {
        warn!(error = %unsent.0, "Error channel closed, dropping error");
    }
}

use aws_sdk_sqs::types::Message;
use tracing::{debug, info, warn};

use crate::errors::EventWorkerError;
use crate::event::TodoEvent;
use crate::queue::{QueueService, ReceiveRequest};
use crate::receiver::AppContext;

/// Counts for one processed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub received: usize,
    pub deleted: usize,
    pub failed: usize,
}

/// Issues one receive call with the context's tuning parameters.
///
/// The call blocks for up to `wait_timeout` seconds when the queue is empty
/// and returns early as soon as a message is available.
pub async fn fetch_messages<Q>(ctx: &AppContext<Q>) -> Result<Vec<Message>, EventWorkerError>
where
    Q: QueueService,
{
    let request = ReceiveRequest::from(&ctx.queue_config);
    ctx.queue.receive(&request).await
}

/// Logs and deletes every message of a batch, one at a time, in receipt
/// order.
///
/// A failed delete is logged and the next message is still attempted. The
/// undeleted message becomes visible again once its visibility timeout
/// expires, so the queue redelivers it.
pub async fn process_messages<Q>(ctx: &AppContext<Q>, messages: &[Message]) -> BatchOutcome
where
    Q: QueueService,
{
    let mut outcome = BatchOutcome {
        received: messages.len(),
        ..BatchOutcome::default()
    };

    if messages.is_empty() {
        info!("No messages to process");
        return outcome;
    }

    for message in messages {
        let message_id = message.message_id().unwrap_or("unknown");

        info!(
            message_id,
            body = message.body().unwrap_or_default(),
            "Found new message from queue"
        );
        info!("{:#?}", message);

        match message.body().and_then(TodoEvent::from_body) {
            Some(event) => info!(
                event_name = event.name(),
                event_id = event.event_id(),
                list_id = event.list_id(),
                version = event.version(),
                "Decoded to-do event"
            ),
            None => debug!(message_id, "Message body is not a to-do event"),
        }

        let Some(receipt_handle) = message.receipt_handle() else {
            warn!(message_id, "Message has no receipt handle; cannot delete");
            outcome.failed += 1;
            continue;
        };

        info!("Deleting message from queue");
        match ctx.queue.delete(&ctx.queue_config.url, receipt_handle).await {
            Ok(()) => {
                debug!(message_id, "Deleted message");
                outcome.deleted += 1;
            }
            Err(e) => {
                warn!(
                    message_id,
                    error = %e,
                    "Error deleting message; it will be redelivered after the visibility timeout"
                );
                outcome.failed += 1;
            }
        }
    }

    outcome
}

/// One fetch-and-process iteration.
pub async fn poll_once<Q>(ctx: &AppContext<Q>) -> Result<BatchOutcome, EventWorkerError>
where
    Q: QueueService,
{
    let messages = fetch_messages(ctx).await?;
    Ok(process_messages(ctx, &messages).await)
}

use tracing::{debug, info};

use crate::errors::EventWorkerError;
use crate::queue::QueueService;

pub mod config;
mod functions;
mod shutdown;

pub use config::QueueConfig;
pub use functions::{BatchOutcome, fetch_messages, poll_once, process_messages};
pub use shutdown::{ShutdownSender, ShutdownToken, shutdown_channel, signal_or_pending};

/// Pairs the queue configuration with the queue client used to reach it.
///
/// Built once at startup and passed by reference to every operation.
pub struct AppContext<Q>
where
    Q: QueueService,
{
    /// Tuning parameters for every receive call.
    pub queue_config: QueueConfig,

    /// The queue service handle, reused for the lifetime of the process.
    pub queue: Q,
}

impl<Q> AppContext<Q>
where
    Q: QueueService,
{
    pub fn new(queue_config: QueueConfig, queue: Q) -> Self {
        AppContext {
            queue_config,
            queue,
        }
    }
}

/// Polls the queue until shutdown is requested.
///
/// Iterations run back to back with no delay; the long-poll wait is the only
/// pacing. The token is checked before each receive and raced against the
/// pending receive, but a batch that has been received is always processed
/// to the end. A failed receive ends the loop with that error.
pub async fn run<Q>(
    ctx: &AppContext<Q>,
    mut shutdown: ShutdownToken,
) -> Result<(), EventWorkerError>
where
    Q: QueueService,
{
    info!(queue_url = %ctx.queue_config.url, "Polling queue");

    loop {
        if shutdown.is_shutdown() {
            break;
        }

        let messages = tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            received = fetch_messages(ctx) => received?,
        };

        let outcome = process_messages(ctx, &messages).await;
        debug!(
            received = outcome.received,
            deleted = outcome.deleted,
            failed = outcome.failed,
            "Finished batch"
        );
    }

    info!("Shutdown requested, stopped polling");
    Ok(())
}

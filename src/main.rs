use std::io;

use todo_event_worker::{
    client::create_sqs_client_from_env,
    errors::EventWorkerError,
    logging,
    receiver::{
        self, AppContext, QueueConfig, ShutdownSender, shutdown_channel, signal_or_pending,
    },
};
use tracing::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), EventWorkerError> {
    dotenvy::dotenv().ok();
    logging::init()?;

    info!("To-Do event worker v{}", VERSION);

    // Validate before building the client so a bad setup never reaches the network.
    let queue_config =
        QueueConfig::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    let sqs_client = create_sqs_client_from_env().await;
    let ctx = AppContext::new(queue_config, sqs_client);

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    tokio::spawn(forward_signals(shutdown_tx));

    receiver::run(&ctx, shutdown_rx)
        .await
        .inspect_err(|e| error!(error = %e, "Queue poller failed"))
}

async fn forward_signals(shutdown_tx: ShutdownSender) {
    tokio::select! {
        _ = signal_or_pending("ctrl_c", tokio::signal::ctrl_c()) => {},
        _ = signal_or_pending("SIGTERM", terminate()) => {},
    }
    info!("Shutdown signal received, finishing current batch");
    shutdown_tx.shutdown();
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    match sigterm.recv().await {
        Some(()) => Ok(()),
        None => Err(io::Error::other("SIGTERM stream closed")),
    }
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    std::future::pending().await
}

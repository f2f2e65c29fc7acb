use std::future::Future;
use std::io;

use tokio::sync::watch;
use tracing::error;

/// Receiving side of the shutdown signal, handed to the poll loop.
#[derive(Debug, Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been requested, or the sender is dropped.
    ///
    /// A dropped sender releases the waiter while `is_shutdown` stays false,
    /// so a poll loop waiting here stops even though no signal was sent.
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}

/// Sending side of the shutdown signal.
#[derive(Debug)]
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}

/// Resolves when `listener` reports a delivered signal.
///
/// A listener that fails (the handler could not be installed) is logged and
/// never resolves, so it cannot be mistaken for a shutdown request.
pub async fn signal_or_pending<F>(name: &str, listener: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = listener.await {
        error!(signal = name, error = %e, "Failed to listen for signal");
        std::future::pending::<()>().await;
    }
}

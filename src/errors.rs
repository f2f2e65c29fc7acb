use std::num::ParseIntError;

use thiserror::Error;

/// Error types for the to-do event worker.
///
/// Configuration variants are raised before the queue client is built.
/// Queue variants carry the rendered SDK error so they can be produced by
/// any [`QueueService`](crate::queue::QueueService) implementation.
#[derive(Debug, Error)]
pub enum EventWorkerError {
    /// A required environment variable is absent.
    #[error("required environment variable `{name}` is not set")]
    MissingVar { name: &'static str },

    /// An environment variable that must hold an integer does not.
    #[error("environment variable `{name}` must be an integer, got {value:?}")]
    InvalidVar {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// An integer setting falls outside the range the queue service accepts.
    #[error("environment variable `{name}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("environment variable `QUEUE_URL` must not be empty")]
    EmptyQueueUrl,

    /// The receive call against the queue failed.
    #[error("failed to receive messages from {queue_url}: {message}")]
    Receive { queue_url: String, message: String },

    /// The delete call for a single message failed.
    #[error("failed to delete message with receipt handle {receipt_handle}: {message}")]
    Delete {
        receipt_handle: String,
        message: String,
    },

    /// The global log subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl EventWorkerError {
    /// Returns true for errors raised while reading configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EventWorkerError::MissingVar { .. }
                | EventWorkerError::InvalidVar { .. }
                | EventWorkerError::OutOfRange { .. }
                | EventWorkerError::EmptyQueueUrl
        )
    }
}

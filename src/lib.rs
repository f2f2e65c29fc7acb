//! # To-Do Event Worker
//!
//! Long-polls the to-do application's AWS SQS event queue, logs every
//! message it receives and deletes it afterwards.
//!
//! ## Features
//!
//! - Environment-driven configuration validated against SQS limits
//! - Long polling with configurable wait, visibility timeout and batch size
//! - Sequential, receipt-ordered processing with log-and-continue on delete errors
//! - Cooperative shutdown that never interrupts a batch in progress
//! - Queue access behind the [`queue::QueueService`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use todo_event_worker::{
//!     client::create_sqs_client_from_env,
//!     receiver::{self, AppContext, QueueConfig, shutdown_channel},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QueueConfig::from_env()?;
//!     let client = create_sqs_client_from_env().await;
//!     let ctx = AppContext::new(config, client);
//!
//!     let (_shutdown_tx, shutdown_rx) = shutdown_channel();
//!     receiver::run(&ctx, shutdown_rx).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod errors;
pub mod event;
pub mod logging;
pub mod queue;
pub mod receiver;

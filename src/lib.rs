//! # fetch-fanout
//!
//! Spins up a fixed-response HTTP stub and fires a batch of concurrent
//! fetches at it, classifying every connect timeout, request timeout and
//! transport failure instead of letting it escape.
//!
//! ## Features
//!
//! - **Bounded fetches**: separate connect and request timeouts, where the
//!   request timeout also covers waiting for a free connection
//! - **Fire and collect**: every element of a batch is in flight before any
//!   result is awaited
//! - **Failure isolation**: one failed or panicking element never affects the rest
//! - **Typed outcomes**: each identifier ends as `Success(records)` or `Failure(kind)`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fetch_fanout::{BatchDispatcher, ClientConfig, FetchClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::new(ClientConfig::for_base_url("http://localhost:9090"))?;
//!     let report = BatchDispatcher::from_client(client)
//!         .dispatch((1..=100).map(|n| n.to_string()))
//!         .await;
//!
//!     println!("{} of {} succeeded", report.summary.succeeded, report.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Scenario Mode
//!
//! ```rust,no_run
//! use fetch_fanout::{Config, Preset, run_scenario};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = run_scenario(Config::preset(Preset::Relaxed)).await?;
//!     assert_eq!(report.len(), 100);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::{BatchConfig, ClientConfig, Config, LoggingConfig, Preset, StubConfig};
pub use crate::core::batch::{
    BatchDispatcher, BatchItemOutcome, BatchReport, BatchSummary, BatchTracker, ItemState,
    ProgressListener, classify,
};
pub use crate::core::fetch::{Fetch, FetchClient, FetchError};
pub use crate::core::models::{FailureKind, Outcome, Record};
pub use server::{RunningStub, StubServer, run_scenario};
pub use utils::error::{FanoutError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

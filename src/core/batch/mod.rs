//! Concurrent request batches
//!
//! This module fans a batch of identifiers out to a [`Fetch`] implementation
//! and turns every result into an [`Outcome`].
//!
//! [`Fetch`]: crate::core::fetch::Fetch
//! [`Outcome`]: crate::core::models::Outcome

mod classifier;
mod dispatcher;
mod progress;
mod tracker;
mod types;


pub use classifier::classify;
pub use dispatcher::BatchDispatcher;
pub use progress::{ProgressListener, SilentProgress, TracingProgress};
pub use tracker::BatchTracker;
pub use types::{BatchItemOutcome, BatchReport, BatchSummary, ItemState};

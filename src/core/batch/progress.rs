//! Progress notifications from the collection loop

use crate::core::models::Outcome;
use tracing::debug;

/// Observer of the dispatcher's collection loop
///
/// Purely diagnostic: listeners cannot influence outcomes.
pub trait ProgressListener: Send + Sync {
    /// About to wait for element `index`
    fn on_waiting(&self, _index: usize, _id: &str) {}

    /// Element `index` reached its terminal outcome
    fn on_done(&self, _index: usize, _id: &str, _outcome: &Outcome) {}
}

/// Logs every wait at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressListener for TracingProgress {
    fn on_waiting(&self, index: usize, id: &str) {
        debug!(index, id, "Waiting for request");
    }

    fn on_done(&self, index: usize, id: &str, outcome: &Outcome) {
        debug!(index, id, %outcome, "Done waiting");
    }
}

/// Ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressListener for SilentProgress {}

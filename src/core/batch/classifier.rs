//! Turns fetch results into terminal outcomes
//!
//! Nothing here returns an error: every result, good or bad, becomes an
//! [`Outcome`], and failures are reported as diagnostics only.

use crate::core::fetch::FetchError;
use crate::core::models::{Outcome, Record};
use tracing::{debug, warn};

/// Classify the result of fetching `id`
pub fn classify(id: &str, result: Result<Vec<Record>, FetchError>) -> Outcome {
    match result {
        Ok(records) => {
            debug!(id, records = records.len(), "Fetch succeeded");
            Outcome::Success(records)
        }
        Err(error) => {
            let kind = error.kind();
            warn!(id, error = %error, "{}", kind.notice());
            Outcome::Failure(kind)
        }
    }
}

//! Concurrent batch dispatch
//!
//! Every identifier gets its own tokio task. All tasks are spawned before the
//! first one is awaited, and the collection loop then waits on each handle in
//! submission order, so the batch ends only once every element has an
//! outcome. A failing or panicking task is recorded and never touches its
//! siblings.

use super::classifier::classify;
use super::progress::{ProgressListener, TracingProgress};
use super::tracker::BatchTracker;
use super::types::{BatchItemOutcome, BatchReport, ItemState};
use crate::core::fetch::{Fetch, FetchClient};
use crate::core::models::{FailureKind, Outcome};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Fires one fetch per identifier and collects every outcome
pub struct BatchDispatcher {
    fetcher: Arc<dyn Fetch>,
    progress: Arc<dyn ProgressListener>,
}

impl BatchDispatcher {
    /// Create a dispatcher around any fetcher
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            progress: Arc::new(TracingProgress),
        }
    }

    /// Create a dispatcher that owns a fetch client
    pub fn from_client(client: FetchClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Replace the progress listener
    pub fn with_progress(mut self, progress: Arc<dyn ProgressListener>) -> Self {
        self.progress = progress;
        self
    }

    /// Dispatch a batch and wait for all of it
    ///
    /// # Example
    /// ```rust,ignore
    /// use fetch_fanout::core::batch::BatchDispatcher;
    ///
    /// let dispatcher = BatchDispatcher::from_client(client);
    /// let report = dispatcher.dispatch((1..=100).map(|n| n.to_string())).await;
    /// assert_eq!(report.len(), 100);
    /// ```
    pub async fn dispatch<I, S>(&self, ids: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch_tracked(ids, &BatchTracker::new()).await
    }

    /// Dispatch a batch while publishing element states to `tracker`
    pub async fn dispatch_tracked<I, S>(&self, ids: I, tracker: &BatchTracker) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let batch_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();

        tracker.reset(ids.len());
        info!(%batch_id, size = ids.len(), "Dispatching batch");

        let handles: Vec<_> = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| {
                let fetcher = Arc::clone(&self.fetcher);
                let task_tracker = tracker.clone();
                let request = vec![id.clone()];
                let span = info_span!("fetch", %batch_id, index, id = %id);

                let handle = tokio::spawn(
                    async move {
                        task_tracker.advance(index, ItemState::InFlight);
                        let started = Instant::now();
                        let outcome = classify(&request[0], fetcher.fetch(&request).await);
                        task_tracker.advance(index, ItemState::from(&outcome));
                        (outcome, started.elapsed())
                    }
                    .instrument(span),
                );

                (index, id, handle)
            })
            .collect();

        let mut items = Vec::with_capacity(handles.len());
        for (index, id, handle) in handles {
            self.progress.on_waiting(index, &id);

            let (outcome, duration) = match handle.await {
                Ok(done) => done,
                Err(e) => {
                    error!(%batch_id, index, id = %id, error = %e, "Fetch task did not complete");
                    let outcome = Outcome::Failure(FailureKind::TransportError);
                    tracker.advance(index, ItemState::from(&outcome));
                    (outcome, Duration::ZERO)
                }
            };

            self.progress.on_done(index, &id, &outcome);
            items.push(BatchItemOutcome {
                index,
                id,
                outcome,
                duration,
            });
        }

        let report = BatchReport::new(batch_id, started_at, items, start.elapsed());
        info!(
            %batch_id,
            total = report.summary.total,
            succeeded = report.summary.succeeded,
            failed = report.summary.failed(),
            elapsed_ms = report.summary.total_duration.as_millis() as u64,
            "Batch complete"
        );
        report
    }
}

//! Batch element state and batch results

use crate::core::models::{FailureKind, Outcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Lifecycle of one batch element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum ItemState {
    Pending,
    InFlight,
    Succeeded,
    Failed(FailureKind),
}

impl ItemState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemState::Succeeded | ItemState::Failed(_))
    }

    /// Pending → InFlight → Succeeded | Failed; terminal states are final
    pub fn can_advance_to(&self, next: ItemState) -> bool {
        match (self, next) {
            (ItemState::Pending, ItemState::InFlight) => true,
            (ItemState::InFlight, next) => next.is_terminal(),
            _ => false,
        }
    }
}

impl From<&Outcome> for ItemState {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Success(_) => ItemState::Succeeded,
            Outcome::Failure(kind) => ItemState::Failed(*kind),
        }
    }
}

/// Outcome of one submitted identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItemOutcome {
    /// Position in the submitted batch
    pub index: usize,
    /// Identifier this outcome belongs to
    pub id: String,
    pub outcome: Outcome,
    /// Time from task start to terminal outcome
    pub duration: Duration,
}

/// Counts and timings of a finished batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub connect_timeouts: usize,
    pub request_timeouts: usize,
    pub transport_errors: usize,
    /// Wall clock for the whole batch
    pub total_duration: Duration,
    /// Slowest single element
    pub max_item_duration: Duration,
}

impl BatchSummary {
    pub fn from_items(items: &[BatchItemOutcome], total_duration: Duration) -> Self {
        let mut summary = Self {
            total: items.len(),
            total_duration,
            ..Default::default()
        };

        for item in items {
            match item.outcome.failure_kind() {
                None => summary.succeeded += 1,
                Some(FailureKind::ConnectTimeout) => summary.connect_timeouts += 1,
                Some(FailureKind::RequestTimeout) => summary.request_timeouts += 1,
                Some(FailureKind::TransportError) => summary.transport_errors += 1,
            }
            summary.max_item_duration = summary.max_item_duration.max(item.duration);
        }

        summary
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

/// Everything a dispatch produced, one entry per submitted identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// In submission order
    pub items: Vec<BatchItemOutcome>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(
        batch_id: Uuid,
        started_at: DateTime<Utc>,
        items: Vec<BatchItemOutcome>,
        total_duration: Duration,
    ) -> Self {
        let summary = BatchSummary::from_items(&items, total_duration);
        Self {
            batch_id,
            started_at,
            items,
            summary,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Outcome of the first element submitted with `id`
    pub fn outcome_for(&self, id: &str) -> Option<&Outcome> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| &item.outcome)
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.items.iter().map(|item| &item.outcome)
    }

    pub fn all_succeeded(&self) -> bool {
        self.summary.succeeded == self.summary.total
    }
}

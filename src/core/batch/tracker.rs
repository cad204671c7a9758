//! Live per-element state of a running batch

use super::types::ItemState;
use dashmap::DashMap;
use std::sync::Arc;

/// Shared view of every element's [`ItemState`]
///
/// Clones share the same map, so a caller can keep one and watch a batch
/// while the dispatcher's tasks update it.
#[derive(Debug, Clone, Default)]
pub struct BatchTracker {
    states: Arc<DashMap<usize, ItemState>>,
}

impl BatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any previous batch and mark `size` elements pending
    pub(crate) fn reset(&self, size: usize) {
        self.states.clear();
        for index in 0..size {
            self.states.insert(index, ItemState::Pending);
        }
    }

    /// Apply a transition; invalid ones (including leaving a terminal state) are ignored
    pub fn advance(&self, index: usize, next: ItemState) -> bool {
        match self.states.get_mut(&index) {
            Some(mut state) if state.can_advance_to(next) => {
                *state = next;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, index: usize) -> Option<ItemState> {
        self.states.get(&index).map(|state| *state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states ordered by index
    pub fn snapshot(&self) -> Vec<(usize, ItemState)> {
        let mut states: Vec<(usize, ItemState)> = self
            .states
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect();
        states.sort_by_key(|(index, _)| *index);
        states
    }

    pub fn terminal_count(&self) -> usize {
        self.states
            .iter()
            .filter(|entry| entry.value().is_terminal())
            .count()
    }

    /// Every tracked element has reached a terminal state
    pub fn is_complete(&self) -> bool {
        self.terminal_count() == self.len()
    }
}

//! Optimistic on/off switches with rollback.
//!
//! The displayed value flips as soon as a change starts. A failed call puts
//! the previous value back. While a change is pending on an entity, further
//! changes on that entity are refused.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Pending { previous: bool, requested: bool },
    Committed(bool),
    RolledBack(bool),
}

#[derive(Debug, Clone)]
struct Entry {
    displayed: bool,
    state: ToggleState,
}

#[derive(Debug, Clone)]
pub struct OptimisticToggles<K> {
    entries: HashMap<K, Entry>,
}

impl<K> Default for OptimisticToggles<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + Display> OptimisticToggles<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `id` with the server-confirmed `value`.
    pub fn insert(&mut self, id: K, value: bool) {
        self.entries.insert(
            id,
            Entry {
                displayed: value,
                state: ToggleState::Committed(value),
            },
        );
    }

    pub fn displayed(&self, id: &K) -> Option<bool> {
        self.entries.get(id).map(|e| e.displayed)
    }

    pub fn state(&self, id: &K) -> Option<ToggleState> {
        self.entries.get(id).map(|e| e.state)
    }

    pub fn is_pending(&self, id: &K) -> bool {
        matches!(self.state(id), Some(ToggleState::Pending { .. }))
    }

    /// Flip the displayed value and return the value to send.
    pub fn begin(&mut self, id: &K) -> AppResult<bool> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| AppError::Other(format!("unknown toggle '{id}'")))?;

        if let ToggleState::Pending { .. } = entry.state {
            return Err(AppError::ToggleInFlight(id.to_string()));
        }

        let previous = entry.displayed;
        let requested = !previous;
        entry.displayed = requested;
        entry.state = ToggleState::Pending {
            previous,
            requested,
        };
        Ok(requested)
    }

    /// Accept or roll back the pending change with the outcome of the call.
    pub fn settle<T>(&mut self, id: &K, outcome: AppResult<T>) -> AppResult<T> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| AppError::Other(format!("unknown toggle '{id}'")))?;

        let ToggleState::Pending {
            previous,
            requested,
        } = entry.state
        else {
            return Err(AppError::Other(format!("no pending change for '{id}'")));
        };

        match outcome {
            Ok(v) => {
                entry.state = ToggleState::Committed(requested);
                tracing::debug!(id = %id, value = requested, "toggle committed");
                Ok(v)
            }
            Err(e) => {
                entry.displayed = previous;
                entry.state = ToggleState::RolledBack(previous);
                tracing::warn!(id = %id, value = previous, error = %e, "toggle rolled back");
                Err(e)
            }
        }
    }

    /// begin → call(new value) → settle.
    pub fn toggle_with<T, F>(&mut self, id: &K, call: F) -> AppResult<T>
    where
        F: FnOnce(bool) -> AppResult<T>,
    {
        let requested = self.begin(id)?;
        let outcome = call(requested);
        self.settle(id, outcome)
    }
}

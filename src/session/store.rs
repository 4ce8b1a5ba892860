//! Selection store - the only place the selection is mutated

use crate::command::{CommandExecutor, ExecutionResult, Intent};
use crate::core::types::{Record, RecordId, SelectionSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe holder of the current selection
///
/// Every read-modify-write runs under one lock so concurrent commands cannot
/// interleave between the membership check and the update.
#[derive(Debug, Default)]
pub struct SelectionStore {
    selection: Mutex<SelectionSet>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: SelectionSet) -> Self {
        Self {
            selection: Mutex::new(selection),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SelectionSet> {
        // Each update is a single set operation, so a poisoned set is still consistent
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Execute an intent against the stored selection and keep the result
    pub fn apply(&self, intent: &Intent, records: &[Record]) -> ExecutionResult {
        let mut selection = self.lock();
        let result = CommandExecutor::execute(intent, &selection, records);
        if *selection != result.selection {
            tracing::debug!(
                before = selection.len(),
                after = result.selection.len(),
                "selection changed"
            );
            *selection = result.selection.clone();
        }
        result
    }

    /// Flip one id in or out of the selection, returning whether it is now selected
    pub fn toggle(&self, id: &RecordId) -> bool {
        let mut selection = self.lock();
        if selection.remove(id) {
            false
        } else {
            selection.insert(id.clone());
            true
        }
    }

    pub fn snapshot(&self) -> SelectionSet {
        self.lock().clone()
    }

    pub fn reset(&self) {
        self.lock().clear();
    }
}

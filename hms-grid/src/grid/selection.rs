//! Selection state management for the grid.
//!
//! Selection uses string ids so it stays stable while rows are filtered,
//! re-sorted or paged out of view.

use std::collections::HashSet;

use crate::model::RowId;

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<RowId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<RowId> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<RowId> {
        self.selected.drain().collect()
    }

    /// Toggle selection of an ID.
    /// Returns (added, removed) IDs.
    pub fn toggle(&mut self, id: &str) -> (Vec<RowId>, Vec<RowId>) {
        if self.selected.remove(id) {
            (vec![], vec![id.to_string()])
        } else {
            self.selected.insert(id.to_string());
            (vec![id.to_string()], vec![])
        }
    }

    /// Select all items from the provided list of IDs.
    /// Returns the IDs that were newly selected.
    pub fn select_all(&mut self, ids: &[RowId]) -> Vec<RowId> {
        let mut added = Vec::new();
        for id in ids {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }

    /// Deselect all items from the provided list of IDs.
    /// Returns the IDs that were deselected.
    pub fn deselect_all(&mut self, ids: &[RowId]) -> Vec<RowId> {
        let mut removed = Vec::new();
        for id in ids {
            if self.selected.remove(id) {
                removed.push(id.clone());
            }
        }
        removed
    }

    /// Check whether every ID in `ids` is selected.
    ///
    /// An empty list is never considered fully selected.
    pub fn contains_all(&self, ids: &[RowId]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Drop every selected ID not present in `known`.
    /// Returns the IDs that were dropped.
    pub fn retain_known(&mut self, known: &HashSet<RowId>) -> Vec<RowId> {
        let stale: Vec<_> = self
            .selected
            .iter()
            .filter(|id| !known.contains(*id))
            .cloned()
            .collect();
        for id in &stale {
            self.selected.remove(id);
        }
        stale
    }
}

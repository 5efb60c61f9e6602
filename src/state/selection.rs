//! Checked-row tracking for bulk actions.

use crate::model::{Record, RecordId};
use std::collections::HashSet;

/// Set of record ids checked for bulk deletion.
///
/// Independent of the filtered view and current page. Ids may outlive the
/// records they name; reads that matter go through [`SelectionSet::live_ids`]
/// or [`SelectionSet::live_count`] to ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Whether `id` is checked, whether or not it still exists.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Uncheck everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Every id ever selected and not yet cleared, whether or not it still exists.
    pub fn raw_len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids that still name a record in `store`, in store order.
    pub fn live_ids<'a>(&self, store: &'a [Record]) -> Vec<&'a RecordId> {
        let mut seen = HashSet::new();
        store
            .iter()
            .map(|record| &record.id)
            .filter(|id| self.ids.contains(*id) && seen.insert(*id))
            .collect()
    }

    /// Number of selected ids that still exist in `store`.
    pub fn live_count(&self, store: &[Record]) -> usize {
        self.live_ids(store).len()
    }
}

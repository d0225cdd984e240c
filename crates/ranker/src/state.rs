use steamsweep_steam::GameRecord;

use crate::key::SortKey;
use crate::sort::sort_in_place;

/// Current column ordering of a list view.
///
/// Activating the same column again flips its direction; switching columns
/// starts from that column's default direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub descending: bool,
}

impl SortState {
    pub fn new(key: SortKey, descending: bool) -> Self {
        Self { key, descending }
    }

    /// Handles a column activation and returns the resulting state.
    pub fn activate(&mut self, key: SortKey) -> Self {
        if self.key == key {
            self.descending = !self.descending;
        } else {
            self.key = key;
            self.descending = key.default_descending();
        }
        *self
    }

    /// Applies this ordering to a list in place.
    pub fn apply(&self, records: &mut [GameRecord]) {
        sort_in_place(records, self.key, self.descending);
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::Recency, false)
    }
}

//! Bounded range history over a store.

use rangehop_core::TimeRange;

use crate::error::StoreError;
use crate::traits::{RangeStore, HISTORY_KEY};

/// Default number of remembered ranges.
pub const DEFAULT_CAPACITY: usize = 10;

/// A bounded, ordered history of captured ranges.
///
/// Entries are kept oldest-first under [`HISTORY_KEY`]; pushing beyond
/// capacity evicts from the front.
#[derive(Debug, Clone, Copy)]
pub struct RangeHistory {
    capacity: usize,
}

impl Default for RangeHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RangeHistory {
    /// Creates a history bounded to `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Appends `range`, evicting the oldest entries beyond capacity.
    pub fn push(&self, store: &mut dyn RangeStore, range: &TimeRange) -> Result<(), StoreError> {
        let mut entries = self.entries(store)?;
        entries.push(range.clone());
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
        store.set(HISTORY_KEY, serde_json::to_value(&entries)?)
    }

    /// Reads the stored history, oldest first. A missing key is an empty
    /// history.
    pub fn entries(&self, store: &dyn RangeStore) -> Result<Vec<TimeRange>, StoreError> {
        match store.get(HISTORY_KEY)? {
            None => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}

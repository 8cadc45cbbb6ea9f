//! The store interface and well-known keys.

use rangehop_core::TimeRange;
use serde_json::Value;

use crate::error::StoreError;

/// Key holding the most recently captured range.
pub const LAST_RANGE_KEY: &str = "last-range";

/// Key holding the bounded range history.
pub const HISTORY_KEY: &str = "range-history";

/// Minimal key-value interface the surrounding layer persists through.
///
/// Values are JSON so backends stay interchangeable; the engine's types
/// (de)serialize through `serde` on the way in and out.
pub trait RangeStore {
    /// Reads a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Persists `range` into the last-range slot.
pub fn save_last(store: &mut dyn RangeStore, range: &TimeRange) -> Result<(), StoreError> {
    store.set(LAST_RANGE_KEY, serde_json::to_value(range)?)
}

/// Loads the last captured range, `None` when nothing was saved yet.
pub fn load_last(store: &dyn RangeStore) -> Result<Option<TimeRange>, StoreError> {
    match store.get(LAST_RANGE_KEY)? {
        None => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

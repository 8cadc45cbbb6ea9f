//! Key-value persistence for captured time ranges.
//!
//! This crate provides:
//! - [`RangeStore`] - the `get`/`set` interface the engine's surrounding
//!   layer persists through (the codec core itself never touches it)
//! - [`MemoryStore`] - ephemeral backend for tests and probes
//! - [`FileStore`] - a single JSON document on disk, read-modify-written
//!   per call
//! - [`RangeHistory`] - a bounded ordered history over any store: fixed
//!   capacity, oldest evicted first
//!
#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// JSON-file-backed store.
pub mod file;
/// Bounded range history over a store.
pub mod history;
/// In-memory store.
pub mod memory;
/// The store interface and well-known keys.
pub mod traits;

pub use error::StoreError;
pub use file::FileStore;
pub use history::RangeHistory;
pub use memory::MemoryStore;
pub use traits::{load_last, save_last, RangeStore, HISTORY_KEY, LAST_RANGE_KEY};

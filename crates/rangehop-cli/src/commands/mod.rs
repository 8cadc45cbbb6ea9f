//! Command implementations.

pub mod classify;
pub mod copy;
pub mod history;
pub mod inject;
pub mod parse;
pub mod paste;

use std::path::PathBuf;

/// Resolves the store file: an explicit path, or `~/.rangehop/store.json`.
pub(crate) fn store_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rangehop")
            .join("store.json")
    })
}

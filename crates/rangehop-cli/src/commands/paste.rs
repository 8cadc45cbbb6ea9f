//! Paste command implementation.

use std::path::PathBuf;

use rangehop_schemes::inject_range;
use rangehop_store::{load_last, FileStore};

use crate::commands::store_path;

pub fn run(url: String, store: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(store_path(store));
    let range = load_last(&store)?
        .ok_or("no remembered range; run `rangehop copy` first")?;

    let rewritten = inject_range(&url, &range)
        .map_err(|f| format!("{}: {}", f.reason_code(), f))?;
    println!("{}", rewritten);
    Ok(())
}

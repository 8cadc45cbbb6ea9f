//! Copy command implementation.

use std::path::PathBuf;

use chrono::Utc;
use rangehop_schemes::parse_range;
use rangehop_store::{save_last, FileStore, RangeHistory};

use crate::commands::store_path;
use crate::output;

pub fn run(
    url: String,
    store: Option<PathBuf>,
    label: Option<String>,
    at: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let now_ms = at.unwrap_or_else(|| Utc::now().timestamp_millis());
    let mut range = parse_range(&url, now_ms)
        .map_err(|f| format!("{}: {}", f.reason_code(), f))?;
    if let Some(label) = label {
        range.source_tag = label;
    }

    let path = store_path(store);
    let mut store = FileStore::open(&path);
    save_last(&mut store, &range)?;
    RangeHistory::default().push(&mut store, &range)?;

    println!("remembered:");
    output::print_table_header();
    println!("{}", output::format_range_row(&range));
    Ok(())
}

//! History command implementation.

use std::path::PathBuf;

use rangehop_store::{FileStore, RangeHistory};

use crate::commands::store_path;
use crate::output;

pub fn run(store: Option<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(store_path(store));
    let entries = RangeHistory::default().entries(&store)?;

    if json {
        for range in entries.iter().rev() {
            println!("{}", serde_json::to_string(range)?);
        }
        return Ok(());
    }

    if entries.is_empty() {
        println!("no remembered ranges");
        return Ok(());
    }
    output::print_table_header();
    for range in entries.iter().rev() {
        println!("{}", output::format_range_row(range));
    }
    Ok(())
}

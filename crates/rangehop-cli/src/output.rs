//! Output formatting utilities.

use rangehop_core::{format_utc, TimeRange};

/// Formats a range as pretty JSON.
pub fn format_json(range: &TimeRange) -> String {
    serde_json::to_string_pretty(range).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a range as a simple table row.
pub fn format_range_row(range: &TimeRange) -> String {
    format!(
        "{:<26} {:<26} {:<9} {}",
        instant(range.start_ms),
        instant(range.end_ms),
        format!("{:?}", range.encoding).to_lowercase(),
        range.source_tag
    )
}

/// Prints table header.
pub fn print_table_header() {
    println!("{:<26} {:<26} {:<9} {}", "START", "END", "ENCODING", "SOURCE");
    println!("{}", "-".repeat(80));
}

fn instant(ms: i64) -> String {
    format_utc(ms).unwrap_or_else(|_| ms.to_string())
}

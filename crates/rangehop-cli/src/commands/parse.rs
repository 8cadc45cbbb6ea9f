//! Parse command implementation.

use chrono::Utc;
use rangehop_schemes::parse_range;

use crate::output;

pub fn run(url: String, json: bool, at: Option<i64>) -> Result<(), Box<dyn std::error::Error>> {
    let now_ms = at.unwrap_or_else(|| Utc::now().timestamp_millis());
    let range = parse_range(&url, now_ms)
        .map_err(|f| format!("{}: {}", f.reason_code(), f))?;

    if json {
        println!("{}", output::format_json(&range));
    } else {
        output::print_table_header();
        println!("{}", output::format_range_row(&range));
    }
    Ok(())
}

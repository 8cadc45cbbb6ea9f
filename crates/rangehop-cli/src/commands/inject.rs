//! Inject command implementation.

use rangehop_core::{parse_instant_ms, TimeRange};
use rangehop_schemes::inject_range;

pub fn run(url: String, start: String, end: String) -> Result<(), Box<dyn std::error::Error>> {
    let start_ms = parse_instant_ms(&start).map_err(|f| format!("--start: {}", f))?;
    let end_ms = parse_instant_ms(&end).map_err(|f| format!("--end: {}", f))?;
    let range = TimeRange::absolute(start_ms, end_ms, "manual");

    let rewritten = inject_range(&url, &range)
        .map_err(|f| format!("{}: {}", f.reason_code(), f))?;
    println!("{}", rewritten);
    Ok(())
}

//! Timestamp parsing and rendering helpers.
//!
//! Addresses mix three spellings of an instant: RFC3339 text with a zone,
//! zoneless local-civil text (what display-oriented parameters expect), and
//! bare epoch numbers in either seconds or milliseconds. Everything here
//! normalizes to epoch milliseconds.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};

use crate::failure::RangeFailure;

/// Epoch values at or above this are already milliseconds; below it they
/// are seconds. 10^12 ms is Sep 2001; 10^12 s is ~33,000 AD.
pub const EPOCH_MS_THRESHOLD: i64 = 1_000_000_000_000;

/// Scales a bare epoch number to milliseconds using the magnitude rule.
pub fn scale_epoch(value: i64) -> i64 {
    if value.abs() < EPOCH_MS_THRESHOLD {
        value * 1000
    } else {
        value
    }
}

/// Parses an instant from address text into epoch milliseconds.
///
/// Accepts RFC3339 with a zone, zoneless ISO text interpreted as local
/// civil time, or a bare epoch number (seconds or milliseconds by
/// magnitude).
pub fn parse_instant_ms(text: &str) -> Result<i64, RangeFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RangeFailure::Malformed("empty timestamp".to_string()));
    }
    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == '+')
    {
        return trimmed
            .parse::<i64>()
            .map(scale_epoch)
            .map_err(|_| RangeFailure::Malformed(format!("bad epoch number '{}'", text)));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            if let Some(local) = naive.and_local_timezone(Local).earliest() {
                return Ok(local.timestamp_millis());
            }
        }
    }
    Err(RangeFailure::Malformed(format!(
        "unrecognized timestamp '{}'",
        text
    )))
}

/// Renders epoch milliseconds as zoneless local wall-clock text.
///
/// Display-oriented parameters expect civil time without a UTC marker;
/// millisecond precision matches what the pages write.
pub fn format_local_civil(ms: i64) -> Result<String, RangeFailure> {
    let dt = DateTime::<Utc>::from_timestamp_millis(ms)
        .ok_or_else(|| RangeFailure::Malformed(format!("epoch out of range: {}", ms)))?;
    Ok(dt
        .with_timezone(&Local)
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string())
}

/// Renders epoch milliseconds as RFC3339 UTC text with a `Z` suffix.
pub fn format_utc(ms: i64) -> Result<String, RangeFailure> {
    let dt = DateTime::<Utc>::from_timestamp_millis(ms)
        .ok_or_else(|| RangeFailure::Malformed(format!("epoch out of range: {}", ms)))?;
    Ok(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

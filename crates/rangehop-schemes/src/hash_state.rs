//! Generic hash-state scheme.
//!
//! Several console sections pack their whole view state into one compact
//! value after a `?~(` marker, e.g.
//! `#dashboards:name=my-dash?~(timeRange~3600000~autoRefresh~false)`.
//! The marker can sit anywhere in the fragment - a path segment may
//! intervene between the section name and the state - and the container is
//! often cut short by the page, so decoding tolerates truncation.
//!
//! The `timeRange` field takes three shapes: a bare number (relative
//! milliseconds from now), a two-element `[startMs, endMs]` array, or an
//! object with `start`/`end` as ISO text or epoch milliseconds.

use rangehop_core::{parse_instant_ms, RangeFailure, SchemeTag, TimeRange};
use rangehop_jsurl::{parse_prefix, stringify, Value};

use crate::address::Address;
use crate::markers::{HASH_STATE_MARKER, HASH_STATE_TIME_FIELD};

/// Locates and decodes the state container; returns it with the byte span
/// it occupies in the fragment.
fn locate_state(fragment: &str) -> Result<(Value, usize, usize), RangeFailure> {
    let marker = fragment
        .find(HASH_STATE_MARKER)
        .ok_or(RangeFailure::NoMatch)?;
    let value_start = marker + 1; // keep the '?', decode from '~('
    let (state, consumed) = parse_prefix(&fragment[value_start..])
        .map_err(|e| RangeFailure::Malformed(format!("hash state: {}", e)))?;
    Ok((state, value_start, consumed))
}

pub(crate) fn parse(address: &Address, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let (state, _, _) = locate_state(address.fragment())?;
    let time_range = state.get(HASH_STATE_TIME_FIELD).ok_or_else(|| {
        RangeFailure::UnsupportedValue("hash state has no timeRange field".to_string())
    })?;
    let tag = SchemeTag::GenericHashState.name();

    match time_range {
        Value::Number(n) => {
            // bare number: a duration in milliseconds from now; observed
            // pages disagree on the sign, so read the magnitude
            let span_ms = (*n as i64).abs();
            Ok(TimeRange::relative(now_ms - span_ms, now_ms, tag).with_captured_at(now_ms))
        }
        Value::Array(items) => {
            if items.len() != 2 {
                return Err(RangeFailure::UnsupportedValue(format!(
                    "timeRange array has {} elements",
                    items.len()
                )));
            }
            let start_ms = endpoint(&items[0])?;
            let end_ms = endpoint(&items[1])?;
            Ok(TimeRange::absolute(start_ms, end_ms, tag).with_captured_at(now_ms))
        }
        Value::Object(_) => {
            let start = time_range.get("start").ok_or_else(|| {
                RangeFailure::UnsupportedValue("timeRange object has no start".to_string())
            })?;
            let start_ms = endpoint(start)?;
            let end_ms = match time_range.get("end") {
                None => now_ms,
                Some(value) => endpoint(value)?,
            };
            Ok(TimeRange::absolute(start_ms, end_ms, tag).with_captured_at(now_ms))
        }
        _ => Err(RangeFailure::UnsupportedValue(
            "timeRange is neither number, pair, nor object".to_string(),
        )),
    }
}

pub(crate) fn inject(address: &Address, range: &TimeRange) -> Result<String, RangeFailure> {
    let fragment = address.fragment();
    let (mut state, value_start, consumed) = locate_state(fragment)?;
    if !matches!(state, Value::Object(_)) {
        return Err(RangeFailure::UnsupportedValue(
            "hash state is not an object".to_string(),
        ));
    }
    // always the unambiguous pair shape; a bare number cannot express an
    // absolute window
    state.set(
        HASH_STATE_TIME_FIELD,
        Value::Array(vec![
            Value::Number(range.start_ms as f64),
            Value::Number(range.end_ms as f64),
        ]),
    );
    let rebuilt = format!(
        "{}{}{}",
        &fragment[..value_start],
        stringify(&state),
        &fragment[value_start + consumed..]
    );
    Ok(address.with_fragment(&rebuilt))
}

/// Reads one absolute endpoint: epoch milliseconds or ISO text.
fn endpoint(value: &Value) -> Result<i64, RangeFailure> {
    match value {
        Value::Number(n) => Ok(*n as i64),
        Value::String(text) => parse_instant_ms(text),
        _ => Err(RangeFailure::UnsupportedValue(
            "endpoint is neither number nor text".to_string(),
        )),
    }
}

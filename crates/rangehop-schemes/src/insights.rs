//! Logs Insights schemes.
//!
//! Two spellings of the same payload exist in the wild. Format A keeps the
//! `?`/`=` delimiters literal and codes the value with `$`-for-`%` on top
//! of percent-encoding; Format B codes the delimiters themselves as `$3F`/
//! `$3D` and leaves the value as raw compact-value text. Once decoded,
//! both carry `start`/`end` as signed seconds (relative, offsets from now,
//! zero meaning "now") or epoch numbers (absolute), with an optional
//! `timeType` discriminant.

use rangehop_core::{scale_epoch, RangeFailure, SchemeTag, TimeRange};
use rangehop_jsurl::{parse, parse_prefix, stringify, Value};
use tracing::debug;

use crate::address::Address;
use crate::escape::{decode_dollar_percent, encode_dollar_percent};
use crate::markers::{INSIGHTS_ESCAPED_MARKER, INSIGHTS_PLAIN_MARKER};

pub(crate) fn parse_plain(address: &Address, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let (raw, _, _) = locate_plain(address.fragment())?;
    let decoded = decode_dollar_percent(raw)?;
    let detail =
        parse(&decoded).map_err(|e| RangeFailure::Malformed(format!("query detail: {}", e)))?;
    range_from_detail(&detail, now_ms, SchemeTag::LogsInsightsFormatA)
}

pub(crate) fn parse_escaped(address: &Address, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let (detail, _, _) = locate_escaped(address.fragment())?;
    range_from_detail(&detail, now_ms, SchemeTag::LogsInsightsFormatB)
}

pub(crate) fn inject_plain(address: &Address, range: &TimeRange) -> Result<String, RangeFailure> {
    let fragment = address.fragment();
    let (raw, value_start, value_len) = locate_plain(fragment)?;
    let decoded = decode_dollar_percent(raw)?;
    let mut detail =
        parse(&decoded).map_err(|e| RangeFailure::Malformed(format!("query detail: {}", e)))?;
    apply_absolute(&mut detail, range)?;
    let recoded = encode_dollar_percent(&stringify(&detail));
    let rebuilt = format!(
        "{}{}{}",
        &fragment[..value_start],
        recoded,
        &fragment[value_start + value_len..]
    );
    Ok(address.with_fragment(&rebuilt))
}

pub(crate) fn inject_escaped(address: &Address, range: &TimeRange) -> Result<String, RangeFailure> {
    let fragment = address.fragment();
    let (mut detail, value_start, consumed) = locate_escaped(fragment)?;
    apply_absolute(&mut detail, range)?;
    let rebuilt = format!(
        "{}{}{}",
        &fragment[..value_start],
        stringify(&detail),
        &fragment[value_start + consumed..]
    );
    Ok(address.with_fragment(&rebuilt))
}

/// Finds the Format A value span: from after the marker to the next `&`
/// or the end of the fragment. The coded value alphabet cannot contain a
/// raw `&`.
fn locate_plain(fragment: &str) -> Result<(&str, usize, usize), RangeFailure> {
    let marker = fragment
        .find(INSIGHTS_PLAIN_MARKER)
        .ok_or(RangeFailure::NoMatch)?;
    let value_start = marker + INSIGHTS_PLAIN_MARKER.len();
    let rest = &fragment[value_start..];
    let value_len = rest.find('&').unwrap_or(rest.len());
    Ok((&rest[..value_len], value_start, value_len))
}

/// Finds and decodes the Format B value: raw compact-value text directly
/// after the escaped marker, span determined by how far the decoder got.
fn locate_escaped(fragment: &str) -> Result<(Value, usize, usize), RangeFailure> {
    let marker = fragment
        .find(INSIGHTS_ESCAPED_MARKER)
        .ok_or(RangeFailure::NoMatch)?;
    let value_start = marker + INSIGHTS_ESCAPED_MARKER.len();
    let (detail, consumed) = parse_prefix(&fragment[value_start..])
        .map_err(|e| RangeFailure::Malformed(format!("query detail: {}", e)))?;
    Ok((detail, value_start, consumed))
}

/// Normalizes a decoded query detail into a canonical range.
///
/// An explicit `timeType` discriminant is authoritative; the sign of
/// `start` is only a fallback heuristic when the field is absent. In
/// relative mode presence checks must be "is not absent" - `end~0` is a
/// valid spelling of "now" and a truthiness check would drop it.
fn range_from_detail(
    detail: &Value,
    now_ms: i64,
    tag: SchemeTag,
) -> Result<TimeRange, RangeFailure> {
    let start = detail
        .get("start")
        .ok_or_else(|| RangeFailure::UnsupportedValue("query detail has no start".to_string()))?;
    let end = detail.get("end");
    let unit = detail.get("unit").and_then(Value::as_str);

    let relative = match detail.get("timeType").and_then(Value::as_str) {
        Some("RELATIVE") => true,
        Some("ABSOLUTE") => false,
        Some(other) => {
            return Err(RangeFailure::UnsupportedValue(format!(
                "unknown timeType '{}'",
                other
            )))
        }
        None => {
            let heuristic = start.as_f64().map(|n| n < 0.0).unwrap_or(false);
            debug!(relative = heuristic, "no timeType; falling back to start sign");
            heuristic
        }
    };

    if relative {
        let start_off = seconds_field(start, "start")?;
        let end_off = match end {
            None => 0,
            Some(value) => seconds_field(value, "end")?,
        };
        let mut range = TimeRange::relative(
            now_ms + start_off * 1000,
            now_ms + end_off * 1000,
            tag.name(),
        )
        .with_captured_at(now_ms);
        if let Some(unit) = unit {
            range = range.with_unit(unit);
        }
        Ok(range)
    } else {
        let start_ms = epoch_field(start, "start")?;
        let end_ms = match end {
            None => now_ms,
            Some(value) => epoch_field(value, "end")?,
        };
        Ok(TimeRange::absolute(start_ms, end_ms, tag.name()).with_captured_at(now_ms))
    }
}

/// Overwrites the time-bearing fields with the absolute form: epoch
/// seconds (the unit the scheme reads) and an explicit discriminant.
fn apply_absolute(detail: &mut Value, range: &TimeRange) -> Result<(), RangeFailure> {
    if !matches!(detail, Value::Object(_)) {
        return Err(RangeFailure::UnsupportedValue(
            "query detail is not an object".to_string(),
        ));
    }
    detail.set("start", Value::Number((range.start_ms / 1000) as f64));
    detail.set("end", Value::Number((range.end_ms / 1000) as f64));
    detail.set("timeType", Value::String("ABSOLUTE".to_string()));
    Ok(())
}

fn seconds_field(value: &Value, field: &str) -> Result<i64, RangeFailure> {
    value
        .as_f64()
        .map(|n| n as i64)
        .ok_or_else(|| RangeFailure::UnsupportedValue(format!("{} is not a number", field)))
}

fn epoch_field(value: &Value, field: &str) -> Result<i64, RangeFailure> {
    value
        .as_f64()
        .map(|n| scale_epoch(n as i64))
        .ok_or_else(|| RangeFailure::UnsupportedValue(format!("{} is not a number", field)))
}

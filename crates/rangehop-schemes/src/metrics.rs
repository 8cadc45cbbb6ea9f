//! Metrics graph scheme.
//!
//! The fragment carries the whole graph state as one compact value after
//! `graph=`, e.g. `#metricsV2:graph=~(view~'timeSeries~start~'-PT3H~end~'P0D)`.
//! Relative windows spell `start`/`end` as signed duration strings; absolute
//! windows use ISO text or raw epoch milliseconds. Older addresses carry
//! only a `period` duration.

use rangehop_core::{
    format_local_civil, parse_duration, parse_instant_ms, RangeFailure, SchemeTag, TimeRange,
};
use rangehop_jsurl::{parse_prefix, stringify, Value};

use crate::address::Address;
use crate::markers::METRICS_GRAPH_PARAM;

/// Locates the graph value in the fragment and returns the decoded state
/// plus the byte span it occupies there.
fn locate_graph(fragment: &str) -> Result<(Value, usize, usize), RangeFailure> {
    let param = fragment
        .find(METRICS_GRAPH_PARAM)
        .ok_or(RangeFailure::NoMatch)?;
    let value_start = param + METRICS_GRAPH_PARAM.len();
    let (graph, consumed) = parse_prefix(&fragment[value_start..])
        .map_err(|e| RangeFailure::Malformed(format!("graph state: {}", e)))?;
    Ok((graph, value_start, consumed))
}

pub(crate) fn parse(address: &Address, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let (graph, _, _) = locate_graph(address.fragment())?;
    let tag = SchemeTag::MetricsGraph.name();

    let start = graph.get("start");
    let end = graph.get("end");

    if let Some(start_text) = start.and_then(Value::as_str) {
        if start_text.starts_with("-P") {
            // relative window: both endpoints are duration offsets from now
            let start_spec = parse_duration(start_text)?;
            let end_ms = match end {
                None => now_ms,
                Some(value) => now_ms + relative_end_offset(value)?,
            };
            return Ok(TimeRange::relative(now_ms + start_spec.ms, end_ms, tag)
                .with_captured_at(now_ms)
                .with_duration_text(start_spec.text));
        }
    }

    if let Some(start_value) = start {
        let start_ms = instant_from(start_value)?;
        let end_ms = match end {
            None => now_ms,
            Some(value) => instant_from(value)?,
        };
        return Ok(TimeRange::absolute(start_ms, end_ms, tag).with_captured_at(now_ms));
    }

    match graph.get("period") {
        Some(Value::String(text)) => {
            let spec = parse_duration(text)?;
            Ok(TimeRange::relative(now_ms - spec.ms.abs(), now_ms, tag)
                .with_captured_at(now_ms)
                .with_duration_text(spec.text))
        }
        Some(Value::Number(seconds)) => {
            let span_ms = (*seconds as i64).abs() * 1000;
            Ok(TimeRange::relative(now_ms - span_ms, now_ms, tag)
                .with_captured_at(now_ms)
                .with_unit("seconds"))
        }
        Some(_) => Err(RangeFailure::UnsupportedValue(
            "graph period is neither duration text nor seconds".to_string(),
        )),
        None => Err(RangeFailure::UnsupportedValue(
            "graph state has neither start/end nor period".to_string(),
        )),
    }
}

pub(crate) fn inject(address: &Address, range: &TimeRange) -> Result<String, RangeFailure> {
    let fragment = address.fragment();
    let (mut graph, value_start, consumed) = locate_graph(fragment)?;
    if !matches!(graph, Value::Object(_)) {
        return Err(RangeFailure::UnsupportedValue(
            "graph state is not an object".to_string(),
        ));
    }

    // the graph is display-oriented: wall-clock text, no UTC marker
    graph.set(
        "start",
        Value::String(format_local_civil(range.start_ms)?),
    );
    graph.set("end", Value::String(format_local_civil(range.end_ms)?));
    // a leftover relative period would shadow the absolute endpoints
    graph.remove("period");

    let encoded = stringify(&graph);
    let rebuilt = format!(
        "{}{}{}",
        &fragment[..value_start],
        encoded,
        &fragment[value_start + consumed..]
    );
    Ok(address.with_fragment(&rebuilt))
}

/// Reads a relative `end` field as a signed offset from now in ms; the
/// common spelling is the zero duration `P0D`.
fn relative_end_offset(value: &Value) -> Result<i64, RangeFailure> {
    match value {
        Value::String(text) => parse_duration(text).map(|spec| spec.ms),
        _ => Err(RangeFailure::UnsupportedValue(
            "relative end is not a duration string".to_string(),
        )),
    }
}

/// Reads an absolute endpoint: ISO text or a raw epoch-millisecond number.
fn instant_from(value: &Value) -> Result<i64, RangeFailure> {
    match value {
        Value::Number(n) => Ok(*n as i64),
        Value::String(text) => parse_instant_ms(text),
        _ => Err(RangeFailure::UnsupportedValue(
            "endpoint is neither text nor number".to_string(),
        )),
    }
}

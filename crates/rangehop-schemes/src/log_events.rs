//! Log events viewer scheme.
//!
//! The fragment encodes its parameter list with `$HH`-escaped delimiters
//! and plain signed integers, e.g.
//! `#logsV2:log-groups/log-group/my-app/log-events$3Fstart$3D-3600000`.
//! A negative value is milliseconds before now; a non-negative value is an
//! absolute epoch millisecond. `end` is optional and defaults to now.

use rangehop_core::{RangeFailure, SchemeTag, TimeRange};
use regex::Regex;

use crate::address::Address;
use crate::markers::{ESCAPED_AMPERSAND, ESCAPED_EQUALS, ESCAPED_QUESTION};

/// Matches one escaped integer parameter; group 1 is the value.
fn param_regex(name: &str) -> Regex {
    Regex::new(&format!(
        r"(?:\{}|\{}){}\{}(-?\d+)",
        ESCAPED_QUESTION, ESCAPED_AMPERSAND, name, ESCAPED_EQUALS
    ))
    .expect("invalid regex")
}

fn integer_param(fragment: &str, name: &str) -> Result<Option<(std::ops::Range<usize>, i64)>, RangeFailure> {
    match param_regex(name).captures(fragment) {
        None => Ok(None),
        Some(caps) => {
            let group = caps
                .get(1)
                .ok_or_else(|| RangeFailure::Malformed(format!("{} value missing", name)))?;
            let value = group.as_str().parse::<i64>().map_err(|_| {
                RangeFailure::Malformed(format!("{} value out of range", name))
            })?;
            Ok(Some((group.range(), value)))
        }
    }
}

/// Resolves one signed parameter value: negative means offset before now.
fn resolve(value: i64, now_ms: i64) -> i64 {
    if value < 0 {
        now_ms + value
    } else {
        value
    }
}

pub(crate) fn parse(address: &Address, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let fragment = address.fragment();
    let (_, start_raw) = integer_param(fragment, "start")?.ok_or(RangeFailure::NoMatch)?;
    let end_raw = integer_param(fragment, "end")?.map(|(_, value)| value);

    let start_ms = resolve(start_raw, now_ms);
    let end_ms = end_raw.map(|value| resolve(value, now_ms)).unwrap_or(now_ms);

    let tag = SchemeTag::LogEvents.name();
    let range = if start_raw < 0 {
        TimeRange::relative(start_ms, end_ms, tag)
    } else {
        TimeRange::absolute(start_ms, end_ms, tag)
    };
    Ok(range.with_captured_at(now_ms))
}

pub(crate) fn inject(address: &Address, range: &TimeRange) -> Result<String, RangeFailure> {
    let fragment = address.fragment();
    let start = integer_param(fragment, "start")?.ok_or(RangeFailure::NoMatch)?;
    let end = integer_param(fragment, "end")?;

    let mut rebuilt = fragment.to_string();
    match end {
        Some((end_span, _)) => {
            // rewrite the later span first so the earlier offsets stay valid
            let mut spans = [(end_span, range.end_ms), (start.0.clone(), range.start_ms)];
            spans.sort_by(|a, b| b.0.start.cmp(&a.0.start));
            for (span, value) in spans {
                rebuilt.replace_range(span, &value.to_string());
            }
        }
        None => {
            // no end parameter: carry it inside the rewritten start region
            let start_text = range.start_ms.to_string();
            let insert_at = start.0.start + start_text.len();
            rebuilt.replace_range(start.0.clone(), &start_text);
            rebuilt.insert_str(
                insert_at,
                &format!("{}end{}{}", ESCAPED_AMPERSAND, ESCAPED_EQUALS, range.end_ms),
            );
        }
    }
    Ok(address.with_fragment(&rebuilt))
}

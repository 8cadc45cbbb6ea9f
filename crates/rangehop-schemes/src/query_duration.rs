//! Plain query-duration scheme.
//!
//! The trace product keeps its window in a single `timeRange` parameter,
//! searched in the query string first and the fragment second. The value
//! is either a duration string (`PT1H`, relative) or two ISO-or-epoch
//! endpoints joined by `~` (absolute).

use rangehop_core::{
    format_utc, parse_duration, parse_instant_ms, RangeFailure, SchemeTag, TimeRange,
};
use regex::Regex;

use crate::address::Address;
use crate::markers::{PLAIN_DURATION_PARAM, PLAIN_DURATION_SEPARATOR};

fn param_regex() -> Regex {
    Regex::new(&format!(r"(?:^|[?&]){}=([^&]*)", PLAIN_DURATION_PARAM)).expect("invalid regex")
}

/// Where the parameter was found; injection must splice the same section.
enum Section {
    Query,
    Fragment,
}

fn locate(address: &Address) -> Option<(Section, std::ops::Range<usize>, String)> {
    let re = param_regex();
    if let Some(caps) = re.captures(address.query()) {
        let group = caps.get(1)?;
        return Some((Section::Query, group.range(), group.as_str().to_string()));
    }
    if let Some(caps) = re.captures(address.fragment()) {
        let group = caps.get(1)?;
        return Some((Section::Fragment, group.range(), group.as_str().to_string()));
    }
    None
}

pub(crate) fn parse(address: &Address, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let (_, _, value) = locate(address).ok_or(RangeFailure::NoMatch)?;
    let tag = SchemeTag::PlainQueryDuration.name();

    if let Some((start_text, end_text)) = value.split_once(PLAIN_DURATION_SEPARATOR) {
        let start_ms = parse_instant_ms(start_text)?;
        let end_ms = parse_instant_ms(end_text)?;
        return Ok(TimeRange::absolute(start_ms, end_ms, tag).with_captured_at(now_ms));
    }

    let spec = parse_duration(&value)?;
    Ok(TimeRange::relative(now_ms - spec.ms.abs(), now_ms, tag)
        .with_captured_at(now_ms)
        .with_duration_text(spec.text))
}

pub(crate) fn inject(address: &Address, range: &TimeRange) -> Result<String, RangeFailure> {
    let (section, span, _) = locate(address).ok_or(RangeFailure::NoMatch)?;
    let value = format!(
        "{}{}{}",
        format_utc(range.start_ms)?,
        PLAIN_DURATION_SEPARATOR,
        format_utc(range.end_ms)?
    );
    match section {
        Section::Query => {
            let mut query = address.query().to_string();
            query.replace_range(span, &value);
            Ok(address.with_query(&query))
        }
        Section::Fragment => {
            let mut fragment = address.fragment().to_string();
            fragment.replace_range(span, &value);
            Ok(address.with_fragment(&fragment))
        }
    }
}

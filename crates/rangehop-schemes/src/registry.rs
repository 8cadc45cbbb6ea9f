//! Parser/injector registry keyed by scheme tag.
//!
//! One row per scheme: adding a newly observed address shape is a pure
//! addition here plus a classifier rule, never an edit to existing
//! branches. `Unsupported` and `NotApplicable` carry no row, so both
//! parse and inject answer `NoMatch` for them - never a fabricated range.

use rangehop_core::{RangeFailure, SchemeTag, TimeRange};
use tracing::debug;

use crate::address::Address;
use crate::classify::classify;
use crate::{hash_state, insights, log_events, metrics, query_duration};

/// A parser/injector pair for one scheme.
pub struct SchemeCodec {
    /// The scheme this codec serves.
    pub tag: SchemeTag,
    parse: fn(&Address, i64) -> Result<TimeRange, RangeFailure>,
    inject: fn(&Address, &TimeRange) -> Result<String, RangeFailure>,
}

/// Registered codecs, one per supported scheme.
pub const CODECS: &[SchemeCodec] = &[
    SchemeCodec {
        tag: SchemeTag::MetricsGraph,
        parse: metrics::parse,
        inject: metrics::inject,
    },
    SchemeCodec {
        tag: SchemeTag::LogsInsightsFormatA,
        parse: insights::parse_plain,
        inject: insights::inject_plain,
    },
    SchemeCodec {
        tag: SchemeTag::LogsInsightsFormatB,
        parse: insights::parse_escaped,
        inject: insights::inject_escaped,
    },
    SchemeCodec {
        tag: SchemeTag::LogEvents,
        parse: log_events::parse,
        inject: log_events::inject,
    },
    SchemeCodec {
        tag: SchemeTag::GenericHashState,
        parse: hash_state::parse,
        inject: hash_state::inject,
    },
    SchemeCodec {
        tag: SchemeTag::PlainQueryDuration,
        parse: query_duration::parse,
        inject: query_duration::inject,
    },
];

fn codec_for(tag: SchemeTag) -> Option<&'static SchemeCodec> {
    CODECS.iter().find(|codec| codec.tag == tag)
}

/// Classifies `raw` and decodes its time window against the supplied
/// "now" instant (explicit so the call stays a pure function).
pub fn parse_range(raw: &str, now_ms: i64) -> Result<TimeRange, RangeFailure> {
    let address = Address::split(raw);
    let tag = classify(&address);
    debug!(%tag, "parse dispatch");
    match codec_for(tag) {
        Some(codec) => (codec.parse)(&address, now_ms),
        None => Err(RangeFailure::NoMatch),
    }
}

/// Classifies `raw` and rewrites its time-bearing substring to carry
/// `range` in the scheme's absolute form, preserving every other byte.
pub fn inject_range(raw: &str, range: &TimeRange) -> Result<String, RangeFailure> {
    let address = Address::split(raw);
    let tag = classify(&address);
    debug!(%tag, "inject dispatch");
    match codec_for(tag) {
        Some(codec) => (codec.inject)(&address, range),
        None => Err(RangeFailure::NoMatch),
    }
}

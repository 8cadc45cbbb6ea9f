//! Ordered classification rules.
//!
//! Scheme substrings nest and overlap: the Insights markers contain the
//! product path that log-events addresses also carry, and the generic
//! hash-state marker appears inside more specific schemes. Precedence is
//! therefore an explicit, ordered data structure - the first matching rule
//! wins - instead of interleaved control flow.

use rangehop_core::SchemeTag;
use tracing::debug;

use crate::address::Address;
use crate::markers;

/// One classification rule: a named predicate and the tag it claims.
pub struct ClassifierRule {
    /// Tag returned when the predicate matches.
    pub tag: SchemeTag,
    /// Short rule name for decision logging.
    pub name: &'static str,
    matches: fn(&Address) -> bool,
}

fn has_metrics_marker(addr: &Address) -> bool {
    addr.fragment().contains(markers::METRICS_GRAPH_MARKER)
}

fn has_insights_plain_marker(addr: &Address) -> bool {
    addr.fragment().contains(markers::INSIGHTS_PLAIN_MARKER)
}

fn has_insights_escaped_marker(addr: &Address) -> bool {
    addr.fragment().contains(markers::INSIGHTS_ESCAPED_MARKER)
}

/// A start parameter in escaped-delimiter spelling, on a page that is not
/// Logs Insights.
fn has_log_events_start(addr: &Address) -> bool {
    let fragment = addr.fragment();
    if fragment.contains(markers::INSIGHTS_PRODUCT_MARKER) {
        return false;
    }
    let after_question = format!(
        "{}start{}",
        markers::ESCAPED_QUESTION,
        markers::ESCAPED_EQUALS
    );
    let after_ampersand = format!(
        "{}start{}",
        markers::ESCAPED_AMPERSAND,
        markers::ESCAPED_EQUALS
    );
    fragment.contains(&after_question) || fragment.contains(&after_ampersand)
}

fn is_trace_product(addr: &Address) -> bool {
    addr.path().starts_with(markers::TRACE_PRODUCT_PATH)
}

/// Anywhere in the fragment: a path segment may sit between the section
/// name and the state container.
fn has_hash_state_marker(addr: &Address) -> bool {
    addr.fragment().contains(markers::HASH_STATE_MARKER)
}

fn is_known_timeless_product(addr: &Address) -> bool {
    markers::NO_TIME_PRODUCT_PATHS
        .iter()
        .any(|prefix| addr.path().starts_with(prefix))
}

/// Classification rules in canonical precedence order.
pub const RULES: &[ClassifierRule] = &[
    ClassifierRule {
        tag: SchemeTag::MetricsGraph,
        name: "metrics-graph-marker",
        matches: has_metrics_marker,
    },
    ClassifierRule {
        tag: SchemeTag::LogsInsightsFormatA,
        name: "insights-plain-delimiters",
        matches: has_insights_plain_marker,
    },
    ClassifierRule {
        tag: SchemeTag::LogsInsightsFormatB,
        name: "insights-escaped-delimiters",
        matches: has_insights_escaped_marker,
    },
    ClassifierRule {
        tag: SchemeTag::LogEvents,
        name: "log-events-start-param",
        matches: has_log_events_start,
    },
    ClassifierRule {
        tag: SchemeTag::PlainQueryDuration,
        name: "trace-product-path",
        matches: is_trace_product,
    },
    ClassifierRule {
        tag: SchemeTag::GenericHashState,
        name: "generic-hash-state-marker",
        matches: has_hash_state_marker,
    },
    ClassifierRule {
        tag: SchemeTag::Unsupported,
        name: "product-without-url-time",
        matches: is_known_timeless_product,
    },
];

fn is_console_host(host: &str) -> bool {
    host == markers::CONSOLE_HOST || host.ends_with(markers::CONSOLE_HOST_SUFFIX)
}

/// Classifies an address into exactly one scheme tag.
///
/// Pure function of the address text; never fails. Unknown products on the
/// console host classify as `Unsupported`, non-console hosts as
/// `NotApplicable` - both mean "manual handling required".
pub fn classify(address: &Address) -> SchemeTag {
    if !is_console_host(address.host()) {
        return SchemeTag::NotApplicable;
    }
    for rule in RULES {
        if (rule.matches)(address) {
            debug!(rule = rule.name, tag = %rule.tag, "address classified");
            return rule.tag;
        }
    }
    debug!("console address with no recognized scheme");
    SchemeTag::Unsupported
}

/// Convenience wrapper splitting and classifying a raw address string.
pub fn classify_address(raw: &str) -> SchemeTag {
    classify(&Address::split(raw))
}

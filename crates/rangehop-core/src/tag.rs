use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of address-encoding schemes the engine recognizes.
///
/// Computed fresh on every classification call; a tag is a pure function of
/// the current address text and must never be cached across navigations.
/// `Unsupported` and `NotApplicable` mean "manual handling required", not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeTag {
    /// Metrics graph state packed into a `graph=` fragment value.
    MetricsGraph,
    /// Logs Insights with plain `?`/`=` delimiters and a `$`-for-`%`
    /// percent-coded value.
    LogsInsightsFormatA,
    /// Logs Insights with `$HH`-escaped delimiters and a raw value.
    LogsInsightsFormatB,
    /// Log events viewer with `$HH`-escaped delimiters and plain integer
    /// parameters.
    LogEvents,
    /// Generic hash state: a compact value object anywhere in the fragment.
    GenericHashState,
    /// A single duration-or-endpoints query parameter.
    PlainQueryDuration,
    /// A console page with no recognized time encoding.
    Unsupported,
    /// Not a console address at all.
    NotApplicable,
}

impl SchemeTag {
    /// Stable kebab-case name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            SchemeTag::MetricsGraph => "metrics-graph",
            SchemeTag::LogsInsightsFormatA => "logs-insights-format-a",
            SchemeTag::LogsInsightsFormatB => "logs-insights-format-b",
            SchemeTag::LogEvents => "log-events",
            SchemeTag::GenericHashState => "generic-hash-state",
            SchemeTag::PlainQueryDuration => "plain-query-duration",
            SchemeTag::Unsupported => "unsupported",
            SchemeTag::NotApplicable => "not-applicable",
        }
    }

    /// True for the two tags that carry no parser or injector.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SchemeTag::Unsupported | SchemeTag::NotApplicable)
    }
}

impl fmt::Display for SchemeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

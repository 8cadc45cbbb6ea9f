//! Marker and parameter constants for every recognized scheme.
//!
//! These strings are the observed spellings in live console addresses.
//! Classifier precedence lives in [`crate::classify`]; only the raw
//! markers live here.

/// Apex console host.
pub const CONSOLE_HOST: &str = "console.aws.amazon.com";

/// Suffix shared by regional console hosts.
pub const CONSOLE_HOST_SUFFIX: &str = ".console.aws.amazon.com";

/// Parameter carrying the metrics graph state in the fragment.
pub const METRICS_GRAPH_PARAM: &str = "graph=";

/// Full metrics marker: the graph parameter followed by a compact-value
/// container open.
pub const METRICS_GRAPH_MARKER: &str = "graph=~(";

/// Logs Insights marker with plain `?`/`=` delimiters (Format A).
pub const INSIGHTS_PLAIN_MARKER: &str = "logs-insights?queryDetail=";

/// Logs Insights marker with `$HH`-escaped delimiters (Format B).
pub const INSIGHTS_ESCAPED_MARKER: &str = "logs-insights$3FqueryDetail$3D";

/// Product substring shared by both Insights spellings; the log-events rule
/// must not fire when this is present.
pub const INSIGHTS_PRODUCT_MARKER: &str = "logs-insights";

/// Short-escape spellings of the fragment parameter delimiters.
pub const ESCAPED_QUESTION: &str = "$3F";
/// Escaped `=`.
pub const ESCAPED_EQUALS: &str = "$3D";
/// Escaped `&`.
pub const ESCAPED_AMPERSAND: &str = "$26";

/// Generic hash-state marker: a compact-value container opening after a
/// parameter separator, anywhere in the fragment.
pub const HASH_STATE_MARKER: &str = "?~(";

/// State field holding the time window in generic hash state.
pub const HASH_STATE_TIME_FIELD: &str = "timeRange";

/// Path of the trace product that keeps its window in a plain parameter.
pub const TRACE_PRODUCT_PATH: &str = "/xray/home";

/// The plain duration parameter name (query or fragment).
pub const PLAIN_DURATION_PARAM: &str = "timeRange";

/// Separator joining two absolute endpoints in the plain parameter.
pub const PLAIN_DURATION_SEPARATOR: char = '~';

/// Console products known to keep no time window in their address.
pub const NO_TIME_PRODUCT_PATHS: &[&str] = &["/iam/home", "/billing/home", "/support/home"];

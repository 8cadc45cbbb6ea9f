use thiserror::Error;

/// Recoverable failures for parse and inject operations.
///
/// All three are expected outcomes, not faults: the engine always returns a
/// tagged result and formatting it into user-facing text is the surrounding
/// layer's job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeFailure {
    /// The expected scheme substring is absent. Either the address does not
    /// match its own classifier's promise, or it was edited out-of-band
    /// since classification.
    #[error("address does not carry the expected time parameters")]
    NoMatch,
    /// The substring was found but its contents fail the scheme's grammar.
    #[error("time parameters malformed: {0}")]
    Malformed(String),
    /// The value decoded cleanly but its shape maps to no known time
    /// representation.
    #[error("time value shape not supported: {0}")]
    UnsupportedValue(String),
}

impl RangeFailure {
    /// Stable machine-readable reason code.
    pub fn reason_code(&self) -> &'static str {
        match self {
            RangeFailure::NoMatch => "no-match",
            RangeFailure::Malformed(_) => "malformed",
            RangeFailure::UnsupportedValue(_) => "unsupported-value",
        }
    }
}

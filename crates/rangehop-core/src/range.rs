use serde::{Deserialize, Serialize};

/// Whether a range was expressed as an offset from "now" or as two fixed
/// instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeEncoding {
    /// Offset-from-now duration.
    Relative,
    /// Two fixed instants.
    Absolute,
}

/// The engine's unified representation of a time window.
///
/// `encoding` and the echo fields (`duration_text`, `unit`) are advisory:
/// they let an injector choose a re-encoding style faithful to what the
/// source page wrote, but they are never authoritative. `start_ms <= end_ms`
/// is deliberately not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Window start, epoch milliseconds.
    pub start_ms: i64,
    /// Window end, epoch milliseconds.
    pub end_ms: i64,
    /// Scheme tag name or a human label chosen by the surrounding layer.
    pub source_tag: String,
    /// When the range was captured, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at_hint: Option<i64>,
    /// How the source address expressed the window.
    pub encoding: TimeEncoding,
    /// Original duration text for relative sources (e.g. `-PT3H`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    /// Original offset unit for schemes that name one (e.g. `seconds`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl TimeRange {
    /// Builds an absolute range.
    pub fn absolute(start_ms: i64, end_ms: i64, source_tag: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            source_tag: source_tag.into(),
            captured_at_hint: None,
            encoding: TimeEncoding::Absolute,
            duration_text: None,
            unit: None,
        }
    }

    /// Builds a relative range already resolved against a "now" instant.
    pub fn relative(start_ms: i64, end_ms: i64, source_tag: impl Into<String>) -> Self {
        Self {
            encoding: TimeEncoding::Relative,
            ..Self::absolute(start_ms, end_ms, source_tag)
        }
    }

    /// Records when the range was captured.
    pub fn with_captured_at(mut self, at_ms: i64) -> Self {
        self.captured_at_hint = Some(at_ms);
        self
    }

    /// Records the source's original duration text.
    pub fn with_duration_text(mut self, text: impl Into<String>) -> Self {
        self.duration_text = Some(text.into());
        self
    }

    /// Records the source's offset unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

use regex::Regex;

use crate::failure::RangeFailure;

/// A parsed duration string.
///
/// `ms` carries the sign of the original text, so `-PT3H` is `-10_800_000`
/// and the zero spelling `P0D` is `0`. The original text is kept verbatim
/// for faithful echo in a [`crate::TimeRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSpec {
    /// Signed total milliseconds.
    pub ms: i64,
    /// The duration text exactly as found.
    pub text: String,
}

/// Parses the duration grammar shared by every scheme that uses duration
/// strings.
///
/// Grammar: optional sign, literal `P`, optional days group, optional `T`,
/// then optional hours/minutes/seconds groups, each digits followed by a
/// unit letter. At least one unit group is required; anything else is
/// `Malformed`.
pub fn parse_duration(text: &str) -> Result<DurationSpec, RangeFailure> {
    let re = Regex::new(r"^([+-])?P(?:(\d+)D)?T?(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$")
        .expect("invalid regex");
    let caps = re
        .captures(text)
        .ok_or_else(|| RangeFailure::Malformed(format!("unrecognized duration '{}'", text)))?;

    let group = |idx: usize| -> Option<i64> {
        caps.get(idx).and_then(|m| m.as_str().parse::<i64>().ok())
    };
    let days = group(2);
    let hours = group(3);
    let minutes = group(4);
    let seconds = group(5);
    if days.is_none() && hours.is_none() && minutes.is_none() && seconds.is_none() {
        return Err(RangeFailure::Malformed(format!(
            "duration '{}' has no unit groups",
            text
        )));
    }

    let total_secs = days.unwrap_or(0) * 86_400
        + hours.unwrap_or(0) * 3_600
        + minutes.unwrap_or(0) * 60
        + seconds.unwrap_or(0);
    let sign = if caps.get(1).map(|m| m.as_str()) == Some("-") {
        -1
    } else {
        1
    };

    Ok(DurationSpec {
        ms: sign * total_secs * 1000,
        text: text.to_string(),
    })
}

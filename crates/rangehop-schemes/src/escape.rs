//! Escaping layers shared by the fragment-parameter schemes.
//!
//! Two distinct layers exist and must not be confused:
//! - the `$HH` short-escape coding some schemes apply to the *delimiters*
//!   `?`, `=`, `&` themselves (handled by matching the escaped spellings
//!   directly, see [`crate::markers`])
//! - the `$`-for-`%` substitution Insights Format A applies on top of
//!   percent-encoding of the *value* (handled here)

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rangehop_core::RangeFailure;

/// Characters percent-coded in a Format A parameter value. Everything
/// non-alphanumeric except `-`, `.` and `_`, so the compact-value
/// structural characters all become `$HH` after the swap.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Reverses the Format A value coding: substitute `$` back to `%`, then
/// percent-decode. The result is compact-value text ready for the codec.
pub fn decode_dollar_percent(text: &str) -> Result<String, RangeFailure> {
    let swapped = text.replace('$', "%");
    percent_decode_str(&swapped)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|_| RangeFailure::Malformed("parameter value is not valid UTF-8".to_string()))
}

/// Applies the Format A value coding: percent-encode, then substitute
/// `%` with `$` so the value survives inside an already-encoded fragment.
pub fn encode_dollar_percent(text: &str) -> String {
    utf8_percent_encode(text, VALUE_ENCODE_SET)
        .to_string()
        .replace('%', "$")
}

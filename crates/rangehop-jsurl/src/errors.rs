use thiserror::Error;

/// Errors that can occur while decoding compact value text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsurlError {
    /// Input was empty where a value was required.
    #[error("empty input")]
    Empty,
    /// An unexpected character was found.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar {
        /// Byte offset of the offending character.
        offset: usize,
        /// The character that was found.
        found: char,
    },
    /// A literal token was neither `null`, a boolean, nor a number.
    #[error("invalid literal '{text}' at offset {offset}")]
    BadLiteral {
        /// Byte offset where the literal starts.
        offset: usize,
        /// The literal text as found.
        text: String,
    },
    /// A `*HH` / `**HHHH` escape sequence was incomplete or not hex.
    #[error("invalid escape sequence at offset {offset}")]
    BadEscape {
        /// Byte offset of the `*` that starts the sequence.
        offset: usize,
    },
    /// Input ended where a value was required (dangling `~`).
    #[error("input truncated mid-value")]
    Truncated,
}

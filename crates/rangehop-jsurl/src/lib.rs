//! Compact URL-safe text codec for nested scalar/array/object values.
//!
//! This crate provides:
//! - [`Value`] - a recursive null/bool/number/string/array/object sum type
//! - [`stringify`] - deterministic encoding to a single `~`-prefixed token
//! - [`parse`] / [`parse_prefix`] / [`try_parse`] - tolerant decoding
//!
//! The encoding is the "JSURL-style" family used by console pages to pack
//! view state into an address fragment. Core invariants:
//! - `parse(stringify(v)) == v` for every value the grammar can express
//! - a container cut short before its closing `)` decodes to the partial
//!   structure instead of an error (addresses are routinely truncated at
//!   delimiters the encoder does not control)
//! - object key order is preserved through a decode/encode round-trip
//!
#![deny(missing_docs)]

/// Tolerant decoder for the compact text form.
pub mod decode;
/// Deterministic encoder producing the compact text form.
pub mod encode;
/// Error types for codec operations.
pub mod errors;
/// The recursive value type and JSON conversions.
pub mod value;

pub use decode::{parse, parse_prefix, try_parse};
pub use encode::stringify;
pub use errors::JsurlError;
pub use value::Value;

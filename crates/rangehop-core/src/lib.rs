//! Canonical time-range model shared across the rangehop engine.
//!
//! This crate provides:
//! - [`TimeRange`] - the unified in-memory representation of a time window,
//!   independent of the address scheme it came from
//! - [`SchemeTag`] - the closed set of recognized address-encoding schemes
//! - [`RangeFailure`] - the recoverable failure taxonomy with stable reason codes
//! - The ISO-style duration grammar and timestamp parse/format helpers every
//!   scheme shares
//!
//! Core invariants:
//! - `start_ms <= end_ms` is NOT enforced; some schemes legitimately hold
//!   reversed or negative offsets mid-computation and ordering is validated
//!   by the caller once a range is finalized for display
//! - classification is a pure function of the current address text and is
//!   never cached across address changes
//! - every operation returns a tagged result; nothing raises past the crate
//!   boundary
//!
#![deny(missing_docs)]

/// Shared duration-string grammar.
pub mod duration;
/// Recoverable failure taxonomy with stable reason codes.
pub mod failure;
/// Canonical time range and encoding hint.
pub mod range;
/// The closed scheme enumeration.
pub mod tag;
/// Timestamp parsing and rendering helpers.
pub mod timestamp;

pub use duration::{parse_duration, DurationSpec};
pub use failure::RangeFailure;
pub use range::{TimeEncoding, TimeRange};
pub use tag::SchemeTag;
pub use timestamp::{format_local_civil, format_utc, parse_instant_ms, scale_epoch};

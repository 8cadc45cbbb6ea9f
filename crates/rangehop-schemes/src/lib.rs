//! Address classification and per-scheme time-range codecs.
//!
//! This crate provides:
//! - [`Address`] - a borrowed split of an address string into host, path,
//!   query and fragment, kept alongside the raw text for byte-exact splicing
//! - [`classify`] - an ordered, first-match-wins rule table mapping an
//!   address to exactly one [`rangehop_core::SchemeTag`]
//! - [`parse_range`] / [`inject_range`] - registry dispatch into one
//!   parser/injector pair per scheme
//!
//! Core invariants:
//! - parsers are pure functions of (address text, now); injectors of
//!   (address text, range) - nothing here reads a clock or touches a page
//! - injectors rewrite only the located time-bearing substring and preserve
//!   every other byte of the address
//! - injection never appends parameters: an address missing its expected
//!   substring fails with `NoMatch` rather than guessing
//!
#![deny(missing_docs)]

/// Address splitting and byte-exact splice helpers.
pub mod address;
/// Ordered classification rules.
pub mod classify;
/// Escaping layers shared by the fragment-parameter schemes.
pub mod escape;
/// Generic hash-state scheme.
mod hash_state;
/// Logs Insights schemes (plain and escaped-delimiter spellings).
mod insights;
/// Log events viewer scheme.
mod log_events;
/// Marker and parameter constants for every recognized scheme.
pub mod markers;
/// Metrics graph scheme.
mod metrics;
/// Plain query-duration scheme.
mod query_duration;
/// Parser/injector registry keyed by scheme tag.
pub mod registry;

pub use address::Address;
pub use classify::{classify, classify_address};
pub use registry::{inject_range, parse_range};

//! Codec core for typed query-string state.
//!
//! - **coerce**: raw tokens (or typed values) into typed values
//! - **decode**: raw snapshot + schema into typed state
//! - **encode**: partial update into a minimal, default-free next snapshot
//! - **wire**: the query-string text format itself
//!
//! Everything here is pure; navigation lives in `qsync-nav`.

pub mod coerce;
pub mod decode;
pub mod encode;
pub mod wire;

/// Reserved wire token marking a list field as explicitly empty.
///
/// Wire format v1 contract: the encoder writes this token only for a list
/// field whose update value is empty while its default is non-empty (plain
/// key removal would decode back to the non-empty default). The decoder
/// unconditionally filters the token out of list values. A real list element
/// equal to this token cannot be round-tripped.
pub const EMPTY_LIST_SENTINEL: &str = "[]";

pub use coerce::{Coerced, coerce, coerce_update};
pub use decode::decode;
pub use encode::encode;
pub use wire::{format_query, parse_query};

//! # wd-core
//!
//! Core definitions shared across workdays-rs: the error taxonomy, the
//! `ensure!` macro, and the `YYYY-MM-DD` literal helpers used by both the
//! date type and the streaming codec.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Date-literal parsing and formatting.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed day count (work days, calendar days).
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

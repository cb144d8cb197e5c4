//! Lexical constants of the date-array format.
//!
//! ```text
//! array := ws* "[" ws* (date (ws* "," ws* date)*)? ws* "]" ws*
//! date  := '"' YYYY "-" MM "-" DD '"'
//! ws    := tab | carriage-return | line-feed | space
//! ```
//!
//! The reader is more lenient than the grammar: any run of whitespace,
//! commas and quotes separates two date literals.

pub(crate) const ARRAY_START: u8 = b'[';
pub(crate) const ARRAY_END: u8 = b']';
pub(crate) const SEPARATOR: u8 = b',';
pub(crate) const QUOTE: u8 = b'"';

/// Whitespace accepted around brackets.
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\r' | b'\n' | b' ')
}

/// Bytes separating two date literals.
pub(crate) fn is_separator(b: u8) -> bool {
    is_whitespace(b) || b == SEPARATOR || b == QUOTE
}

/// Bytes that end a date literal.
pub(crate) fn ends_literal(b: u8) -> bool {
    is_separator(b) || b == ARRAY_START || b == ARRAY_END
}

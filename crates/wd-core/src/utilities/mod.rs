//! Miscellaneous utilities: date-literal parsing and formatting.

/// `YYYY-MM-DD` formatting.
pub mod data_formatters;
/// `YYYY-MM-DD` parsing.
pub mod data_parsers;

pub use data_formatters::{format_iso_date, write_iso_date};
pub use data_parsers::parse_iso_date;

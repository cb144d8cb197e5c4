//! Date-literal formatting helpers.

use std::fmt;

/// Write `year`, `month`, `day` as a zero-padded `YYYY-MM-DD` literal.
pub fn write_iso_date<W: fmt::Write>(out: &mut W, year: u16, month: u8, day: u8) -> fmt::Result {
    write!(out, "{year:04}-{month:02}-{day:02}")
}

/// Format `year`, `month`, `day` as a zero-padded `YYYY-MM-DD` string.
pub fn format_iso_date(year: u16, month: u8, day: u8) -> String {
    let mut s = String::with_capacity(10);
    // Writing into a String cannot fail.
    let _ = write_iso_date(&mut s, year, month, day);
    s
}

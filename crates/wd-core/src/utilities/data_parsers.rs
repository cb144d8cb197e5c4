//! Date-literal parsing helpers.
//!
//! The only accepted layout is the zero-padded ISO calendar date
//! `YYYY-MM-DD`: exactly four year digits, two month digits and two day
//! digits separated by `-`.  Range checking (month 1–12, day within the
//! month) is left to the date type.

/// Parse a date string in strict `YYYY-MM-DD` layout.
///
/// Returns `(year, month, day)` on success.  No surrounding whitespace or
/// quotes are tolerated.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    let year = digits(&b[0..4])?;
    let month = digits(&b[5..7])?;
    let day = digits(&b[8..10])?;
    Some((year as u16, month as u8, day as u8))
}

fn digits(b: &[u8]) -> Option<u32> {
    b.iter().try_fold(0u32, |acc, &c| {
        c.is_ascii_digit().then(|| acc * 10 + u32::from(c - b'0'))
    })
}

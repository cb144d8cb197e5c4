//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch, which
//! makes ordering, hashing and day arithmetic trivial.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday), the same day numbering as
//!   `chrono::Datelike::num_days_from_ce`.
//! * The valid date range is 0001-01-01 to 9999-12-31 in the proleptic
//!   Gregorian calendar: every date a four-digit `YYYY-MM-DD` literal can
//!   name.

use std::str::FromStr;

use crate::weekday::Weekday;
use wd_core::errors::{Error, Result};
use wd_core::utilities::{parse_iso_date, write_iso_date};

/// A calendar date with no time-of-day or timezone component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    /// Smallest representable year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest representable year.
    pub const MAX_YEAR: u16 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday.
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .and_then(|serial| Date::from_serial(serial).ok())
            .ok_or_else(|| {
                Error::Date(format!("date arithmetic: {self} + {n} days out of range"))
            })
    }

    /// The following day, or `None` at [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then_some(Date(self.0 + 1))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write_iso_date(f, y, m, d)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse a strict `YYYY-MM-DD` literal.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::Date(format!("invalid date literal `{s}`")))?;
        Date::from_ymd(y, m, d)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        // Years 1..=9999 lie well inside chrono's range.
        chrono::NaiveDate::from_num_days_from_ce_opt(d.0).unwrap_or(chrono::NaiveDate::MIN)
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of days in the years `1..year`.
fn days_before_year(year: u16) -> i32 {
    let y = i32::from(year) - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 0001-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let mut serial = days_before_year(year) + i32::from(MONTH_OFFSET[usize::from(month) - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day)
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // 146_097 days per 400-year cycle; the estimate is off by at most one.
    let estimate = (i64::from(serial - 1) * 400 / 146_097 + 1).clamp(1, 9999);
    let mut y = estimate as u16;
    while y > Date::MIN_YEAR && serial <= days_before_year(y) {
        y -= 1;
    }
    while y < Date::MAX_YEAR && serial > days_before_year(y + 1) {
        y += 1;
    }
    let mut remaining = serial - days_before_year(y);
    let mut m = 1u8;
    loop {
        let days = i32::from(days_in_month(y, m));
        if remaining <= days || m == 12 {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(9999, 12, 31).unwrap(), Date::MAX);
        assert_eq!(Date::MAX.weekday(), Weekday::Friday);
    }

    #[test]
    fn test_serials_match_chrono() {
        use chrono::Datelike;
        for (y, m, d) in [(1, 12, 31), (1582, 10, 15), (1899, 12, 25), (1900, 1, 1), (2200, 1, 2)] {
            let nd = chrono::NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(d)).unwrap();
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.serial(), nd.num_days_from_ce(), "serial of {date}");
            assert_eq!(date.ymd(), (y, m, d));
        }
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (4, 2, 29),
            (100, 3, 1),
            (1899, 12, 31),
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2000, 1, 1),
            (2023, 6, 15),
            (2199, 12, 31),
            (2200, 1, 1),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 0, 1).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(0, 12, 31).is_err());
        assert!(Date::from_ymd(10000, 1, 1).is_err());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
        // 2011-06-15 is a Wednesday
        let d3 = Date::from_ymd(2011, 6, 15).unwrap();
        assert_eq!(d3.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.ymd(), (2023, 2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert!(Date::MAX.add_days(1).is_err());
        assert_eq!(Date::MAX.succ(), None);
    }

    #[test]
    fn test_display_and_parse() {
        let d = Date::from_ymd(2001, 12, 21).unwrap();
        assert_eq!(d.to_string(), "2001-12-21");
        assert_eq!(format!("{d:?}"), "Date(2001-12-21)");
        assert_eq!("2001-12-21".parse::<Date>().unwrap(), d);
        assert!("2001-12-32".parse::<Date>().is_err());
        assert!("21/12/2001".parse::<Date>().is_err());
    }

    #[test]
    fn test_from_chrono() {
        let nd = chrono::NaiveDate::from_ymd_opt(2015, 12, 24).unwrap();
        assert_eq!(Date::try_from(nd).unwrap(), Date::from_ymd(2015, 12, 24).unwrap());
        let far = chrono::NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert!(Date::try_from(far).is_err());
        let bce = chrono::NaiveDate::from_ymd_opt(-1, 1, 1).unwrap();
        assert!(Date::try_from(bce).is_err());
    }

    #[test]
    fn test_into_chrono() {
        for d in [Date::MIN, Date::from_ymd(2000, 2, 29).unwrap(), Date::MAX] {
            let nd = chrono::NaiveDate::from(d);
            assert_eq!(Date::try_from(nd).unwrap(), d);
        }
    }

    #[test]
    fn test_weekday_matches_chrono() {
        use chrono::Datelike;
        let mut nd = chrono::NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();
        for _ in 0..30 {
            let d = Date::try_from(nd).unwrap();
            assert_eq!(d.weekday(), Weekday::from(nd.weekday()));
            nd = nd.succ_opt().unwrap();
        }
    }
}

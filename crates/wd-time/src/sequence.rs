//! Pull / push interfaces over sequences of dates.
//!
//! A [`DateSource`] yields dates one at a time until it reports the end of
//! the sequence with `Ok(None)`; a [`DateSink`] accepts dates one at a time
//! and is told once when the sequence is complete.  The streaming codec,
//! in-memory collections and generators all plug into `HolidayCalendar`
//! through these two traits.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

use crate::date::Date;

/// A forward-only source of dates.
pub trait DateSource {
    /// Return the next date, or `Ok(None)` once the sequence is exhausted.
    ///
    /// # Errors
    /// Returns an error if the underlying data is malformed.
    fn next_date(&mut self) -> Result<Option<Date>>;
}

/// A forward-only sink of dates.
pub trait DateSink {
    /// Accept the next date of the sequence.
    fn push(&mut self, date: Date) -> Result<()>;

    /// Signal the end of the sequence.  Called exactly once.
    fn finish(&mut self) -> Result<()>;
}

impl<S: DateSource + ?Sized> DateSource for &mut S {
    fn next_date(&mut self) -> Result<Option<Date>> {
        (**self).next_date()
    }
}

impl<S: DateSink + ?Sized> DateSink for &mut S {
    fn push(&mut self, date: Date) -> Result<()> {
        (**self).push(date)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl DateSink for Vec<Date> {
    fn push(&mut self, date: Date) -> Result<()> {
        Vec::push(self, date);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

// ── DateRange ─────────────────────────────────────────────────────────────────

/// Every date from `start` to `end`, both inclusive.
///
/// Yields nothing when `start > end`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    /// Create the inclusive range `[start, end]`.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = current.succ().filter(|d| *d <= self.end);
        Some(current)
    }
}

impl DateSource for DateRange {
    fn next_date(&mut self) -> Result<Option<Date>> {
        Ok(self.next())
    }
}

// ── IterSource ────────────────────────────────────────────────────────────────

/// Adapts any iterator of dates into a [`DateSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I: Iterator<Item = Date>> IterSource<I> {
    /// Wrap an iterable.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self(iter.into_iter())
    }
}

impl<I: Iterator<Item = Date>> DateSource for IterSource<I> {
    fn next_date(&mut self) -> Result<Option<Date>> {
        Ok(self.0.next())
    }
}

// ── RandomDates ───────────────────────────────────────────────────────────────

/// Generates a fixed number of uniformly drawn dates.
///
/// Year, month and day are drawn independently (day from 1–31), so some
/// draws do not form a valid date; those are retried up to
/// [`RandomDates::MAX_ATTEMPTS`] times before the source gives up.
#[derive(Debug, Clone)]
pub struct RandomDates<R = StdRng> {
    rng: R,
    remaining: usize,
    years: Range<u16>,
}

impl RandomDates<StdRng> {
    /// `count` dates from an entropy-seeded generator.
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// `count` dates from a generator seeded with `seed`, for reproducibility.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDates<R> {
    /// Years drawn from when no window is given.
    pub const DEFAULT_YEARS: Range<u16> = 2000..2023;

    /// Number of draws per date before reporting a source error.
    pub const MAX_ATTEMPTS: usize = 10;

    /// `count` dates from the given generator over the default year window.
    pub fn with_rng(count: usize, rng: R) -> Self {
        Self {
            rng,
            remaining: count,
            years: Self::DEFAULT_YEARS,
        }
    }

    /// Restrict the drawn years to `years` (half-open).
    ///
    /// # Errors
    /// Returns an error if the window is empty or leaves the supported date
    /// range.
    pub fn with_years(mut self, years: Range<u16>) -> Result<Self> {
        ensure!(!years.is_empty(), "empty year window {years:?}");
        ensure!(
            years.start >= Date::MIN.year() && years.end <= Date::MAX.year() + 1,
            "year window {years:?} outside supported range"
        );
        self.years = years;
        Ok(self)
    }

    fn draw(&mut self) -> Result<Date> {
        for _ in 0..Self::MAX_ATTEMPTS {
            let y = self.rng.gen_range(self.years.clone());
            let m = self.rng.gen_range(1..=12);
            let d = self.rng.gen_range(1..=31);
            match Date::from_ymd(y, m, d) {
                Ok(date) => return Ok(date),
                Err(e) => trace!("discarding random draw: {e}"),
            }
        }
        Err(Error::Source(format!(
            "no valid date after {} generation attempts",
            Self::MAX_ATTEMPTS
        )))
    }
}

impl<R: Rng> DateSource for RandomDates<R> {
    fn next_date(&mut self) -> Result<Option<Date>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        self.draw().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn drain(mut source: impl DateSource) -> Vec<Date> {
        let mut out = Vec::new();
        while let Some(d) = source.next_date().unwrap() {
            out.push(d);
        }
        out
    }

    #[test]
    fn date_range_is_inclusive() {
        let dates = drain(DateRange::new(date(2000, 2, 27), date(2000, 3, 1)));
        assert_eq!(
            dates,
            vec![date(2000, 2, 27), date(2000, 2, 28), date(2000, 2, 29), date(2000, 3, 1)]
        );
    }

    #[test]
    fn date_range_single_and_empty() {
        assert_eq!(drain(DateRange::new(date(2011, 6, 15), date(2011, 6, 15))).len(), 1);
        assert!(drain(DateRange::new(date(2011, 6, 16), date(2011, 6, 15))).is_empty());
    }

    #[test]
    fn date_range_stops_at_max() {
        let dates = drain(DateRange::new(Date::MAX - 1, Date::MAX));
        assert_eq!(dates, vec![Date::MAX - 1, Date::MAX]);
    }

    #[test]
    fn iter_source_yields_in_order() {
        let input = vec![date(2001, 12, 21), date(2000, 12, 23)];
        assert_eq!(drain(IterSource::new(input.clone())), input);
    }

    #[test]
    fn random_dates_respects_count_and_window() {
        let dates = drain(RandomDates::seeded(500, 7));
        assert_eq!(dates.len(), 500);
        assert!(dates.iter().all(|d| (2000..2023).contains(&d.year())));
    }

    #[test]
    fn random_dates_is_reproducible() {
        let a = drain(RandomDates::seeded(50, 42));
        let b = drain(RandomDates::seeded(50, 42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_dates_rejects_bad_window() {
        assert!(RandomDates::seeded(1, 1).with_years(2010..2010).is_err());
        assert!(RandomDates::seeded(1, 1).with_years(0..1900).is_err());
        assert!(RandomDates::seeded(1, 1).with_years(9000..10_001).is_err());
        let dates = drain(RandomDates::seeded(20, 1).with_years(2199..2200).unwrap());
        assert!(dates.iter().all(|d| d.year() == 2199));
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<Date> = Vec::new();
        DateSink::push(&mut sink, date(2024, 1, 2)).unwrap();
        sink.finish().unwrap();
        assert_eq!(sink, vec![date(2024, 1, 2)]);
    }
}

//! `HolidayCalendar`: working-day arithmetic over weekends and holidays.
//!
//! A calendar is formed of two components:
//!
//! - a [`WeekdaySet`] of regular non-working days (Saturday and Sunday unless
//!   configured otherwise), fixed at construction;
//! - a [`HolidaySet`] of ad-hoc holiday dates that can grow for the whole
//!   lifetime of the calendar.
//!
//! A holiday falling on a weekend day is never stored, so every stored
//! holiday removes exactly one working day from any range containing it.

use std::sync::Arc;

use tracing::{debug, info};
use wd_core::errors::{Error, Result};
use wd_core::DayCount;

use crate::clock::{Clock, SystemClock};
use crate::date::Date;
use crate::holiday_set::HolidaySet;
use crate::observer::{HolidayObserver, TracingObserver};
use crate::sequence::{DateSink, DateSource};
use crate::weekday::Weekday;
use crate::weekday_set::WeekdaySet;

/// A calendar of working days with a configurable weekend and ad-hoc
/// holidays.
#[derive(Clone)]
pub struct HolidayCalendar {
    weekend: WeekdaySet,
    holidays: HolidaySet,
    observer: Arc<dyn HolidayObserver>,
    clock: Arc<dyn Clock>,
}

impl HolidayCalendar {
    /// An empty calendar with a Saturday/Sunday weekend.
    pub fn new() -> Self {
        HolidayCalendarBuilder::new().build()
    }

    /// An empty calendar with the given weekend days.
    pub fn with_weekend(weekend: WeekdaySet) -> Self {
        HolidayCalendarBuilder::new().with_weekend(weekend).build()
    }

    /// Begin configuring a calendar.
    pub fn builder() -> HolidayCalendarBuilder {
        HolidayCalendarBuilder::new()
    }

    // ── Holidays ─────────────────────────────────────────────────────────

    /// Register `date` as a holiday.
    ///
    /// Returns `true` if the date was inserted.  Returns `false` if it was
    /// already registered, or if it falls on a weekend day; the latter is
    /// reported to the calendar's observer.
    pub fn add_holiday(&mut self, date: Date) -> bool {
        self.accepts(date) && self.holidays.insert(date)
    }

    /// Whether `date` may be stored; weekend days are reported and refused.
    fn accepts(&self, date: Date) -> bool {
        let weekday = date.weekday();
        if self.weekend.contains(weekday) {
            self.observer.weekend_overlap(date, weekday);
            return false;
        }
        true
    }

    /// Remove a previously registered holiday.  Returns `true` if it was
    /// present.
    pub fn remove_holiday(&mut self, date: Date) -> bool {
        self.holidays.remove(date)
    }

    /// Whether `date` is a registered holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }

    /// Number of registered holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// The registered holidays in ascending order.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Remove every registered holiday, keeping the weekend.
    ///
    /// [`load`](Self::load) merges into the existing set; call this first to
    /// replace it instead.
    pub fn reset(&mut self) {
        self.holidays.clear();
    }

    // ── Weekend ──────────────────────────────────────────────────────────

    /// The regular non-working days of the week.
    pub fn weekend(&self) -> WeekdaySet {
        self.weekend
    }

    /// Whether `date` falls on a weekend day.
    pub fn is_weekend(&self, date: Date) -> bool {
        self.weekend.contains(date.weekday())
    }

    /// Whether `date` is neither a weekend day nor a holiday.
    pub fn is_workday(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(date)
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Add every date yielded by `source` until it is exhausted.
    ///
    /// Returns the number of dates actually inserted, i.e. excluding
    /// duplicates and weekend days.  Existing holidays are kept.
    ///
    /// The dates are collected first and merged into the holiday set in one
    /// pass, so the input order does not affect the cost of the load.
    ///
    /// # Errors
    /// Propagates the first error reported by `source`; dates read before
    /// the failure are still inserted.
    pub fn load<S: DateSource + ?Sized>(&mut self, source: &mut S) -> Result<usize> {
        let before = self.holidays.len();
        let mut batch = Vec::new();
        let mut seen = 0usize;
        let outcome = loop {
            match source.next_date() {
                Ok(Some(date)) => {
                    seen += 1;
                    if self.accepts(date) {
                        batch.push(date);
                    }
                }
                Ok(None) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.holidays.extend(batch);
        let inserted = self.holidays.len() - before;
        outcome?;
        info!(seen, inserted, total = self.holidays.len(), "loaded holidays");
        Ok(inserted)
    }

    /// Push every holiday to `sink` in ascending order, then finish it.
    ///
    /// Returns the number of dates written, which is always the current
    /// holiday count.
    ///
    /// # Errors
    /// Propagates the first error reported by `sink`.
    pub fn save<K: DateSink + ?Sized>(&self, sink: &mut K) -> Result<usize> {
        let mut written = 0;
        for date in &self.holidays {
            sink.push(date)?;
            written += 1;
        }
        sink.finish()?;
        info!(written, "saved holidays");
        Ok(written)
    }

    // ── Work-day counting ────────────────────────────────────────────────

    /// Number of working days in `[start, end]`, both inclusive.
    ///
    /// Complete weeks contribute `7 - |weekend|` days each; the remaining
    /// `n % 7` days are enumerated from `start`'s weekday; holidays in range
    /// are then subtracted with a single range-count query.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn work_days(&self, start: Date, end: Date) -> Result<DayCount> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let total = DayCount::from(start.days_between(end)) + 1;
        let per_week = (Weekday::ALL.len() - self.weekend.len()) as DayCount;
        let first = start.weekday();

        let full_weeks = total / 7 * per_week;
        let partial_week = (0..total % 7)
            .map(|i| first.add_days(i))
            .filter(|d| !self.weekend.contains(*d))
            .count() as DayCount;
        let holidays = self.holidays.count_in_range(start, end) as DayCount;

        let result = full_weeks + partial_week - holidays;
        debug!(%start, %end, total, full_weeks, partial_week, holidays, result, "counted work days");
        Ok(result)
    }

    /// Number of working days from `start` to today, both inclusive, with
    /// today supplied by the calendar's clock.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start` is after today, or the
    /// clock's error if today cannot be determined.
    pub fn work_days_to_today(&self, start: Date) -> Result<DayCount> {
        let today = self.clock.today()?;
        self.work_days(start, today)
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for HolidayCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.weekend == other.weekend && self.holidays == other.holidays
    }
}

impl std::fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("weekend", &self.weekend)
            .field("holidays", &self.holidays.len())
            .finish_non_exhaustive()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`HolidayCalendar`].
///
/// The weekend is applied before any holiday is inserted, so holidays given
/// here are filtered against the configured weekend, not the default one.
pub struct HolidayCalendarBuilder {
    weekend: WeekdaySet,
    observer: Arc<dyn HolidayObserver>,
    clock: Arc<dyn Clock>,
    holidays: Vec<Date>,
}

impl HolidayCalendarBuilder {
    /// Begin building a calendar with a Saturday/Sunday weekend, the system
    /// clock, and a `tracing` observer.
    pub fn new() -> Self {
        Self {
            weekend: WeekdaySet::default(),
            observer: Arc::new(TracingObserver),
            clock: Arc::new(SystemClock),
            holidays: Vec::new(),
        }
    }

    /// Set the regular non-working days.
    pub fn with_weekend(mut self, weekend: WeekdaySet) -> Self {
        self.weekend = weekend;
        self
    }

    /// Set the observer notified of weekend-overlap rejections.
    pub fn with_observer(mut self, observer: Arc<dyn HolidayObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Set the clock used by [`HolidayCalendar::work_days_to_today`].
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Queue holidays to be added when the calendar is built.
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = Date>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Build the calendar.
    pub fn build(self) -> HolidayCalendar {
        let mut calendar = HolidayCalendar {
            weekend: self.weekend,
            holidays: HolidaySet::with_capacity(self.holidays.len()),
            observer: self.observer,
            clock: self.clock,
        };
        let accepted: Vec<Date> = self
            .holidays
            .into_iter()
            .filter(|d| calendar.accepts(*d))
            .collect();
        calendar.holidays.extend(accepted);
        calendar
    }

    /// Build the calendar, then [`load`](HolidayCalendar::load) it from
    /// `source`.
    ///
    /// # Errors
    /// Propagates the first error reported by `source`.
    pub fn load<S: DateSource + ?Sized>(self, source: &mut S) -> Result<HolidayCalendar> {
        let mut calendar = self.build();
        calendar.load(source)?;
        Ok(calendar)
    }
}

impl Default for HolidayCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

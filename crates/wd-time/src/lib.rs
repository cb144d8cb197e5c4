//! # wd-time
//!
//! Date, weekday-set, ordered holiday-set, and holiday-calendar types, plus
//! the pull/push date-sequence interfaces the calendar loads from and saves
//! to.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` and its builder.
pub mod calendar;

/// `Clock`: where "today" comes from.
pub mod clock;

/// `Date` type.
pub mod date;

/// `HolidaySet`: ordered, duplicate-free set of dates.
pub mod holiday_set;

/// Observers of holiday-filtering decisions.
pub mod observer;

/// `DateSource` / `DateSink` and the in-memory sequences.
pub mod sequence;

/// `Weekday`: day of the week.
pub mod weekday;

/// `WeekdaySet`: set of weekdays.
pub mod weekday_set;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, HolidayCalendarBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use holiday_set::HolidaySet;
pub use observer::{HolidayObserver, SilentObserver, TracingObserver};
pub use sequence::{DateRange, DateSink, DateSource, IterSource, RandomDates};
pub use weekday::Weekday;
pub use weekday_set::WeekdaySet;

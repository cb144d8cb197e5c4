//! # workdays
//!
//! Count the working days in an inclusive date range, given a configurable
//! set of weekend days and an arbitrary set of holidays, and persist the
//! holidays as a streaming array of `YYYY-MM-DD` literals.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use workdays::prelude::*;
//!
//! let input = br#"["2011-06-07", "2011-06-18", "2011-06-20"]"#;
//! let mut calendar = HolidayCalendar::new();
//! let inserted = calendar.load(&mut StreamDateReader::new(&input[..])).unwrap();
//! assert_eq!(inserted, 2); // 2011-06-18 is a Saturday
//!
//! let start = Date::from_ymd(2011, 6, 1).unwrap();
//! let end = Date::from_ymd(2011, 6, 30).unwrap();
//! assert_eq!(calendar.work_days(start, end).unwrap(), 20);
//!
//! let mut writer = StreamDateWriter::new(Vec::new());
//! calendar.save(&mut writer).unwrap();
//! assert_eq!(writer.into_inner(), br#"["2011-06-07","2011-06-20"]"#);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and date-literal helpers.
pub use wd_core as core;

/// Dates, weekday sets, holiday sets, and the holiday calendar.
pub use wd_time as time;

/// Streaming date-array reader and writer.
pub use wd_io as io;

/// `tracing-subscriber` initialisation for binaries and tests.
pub mod logging;

/// The most commonly used items.
pub mod prelude {
    pub use wd_core::{Error, Result};
    pub use wd_io::{load_file, save_file, StreamDateReader, StreamDateWriter};
    pub use wd_time::{
        Clock, Date, DateRange, DateSink, DateSource, FixedClock, HolidayCalendar,
        HolidayCalendarBuilder, HolidayObserver, HolidaySet, IterSource, RandomDates,
        SilentObserver, SystemClock, TracingObserver, Weekday, WeekdaySet,
    };
}

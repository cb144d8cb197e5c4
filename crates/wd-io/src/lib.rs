//! # wd-io
//!
//! Streaming codec between byte streams and date sequences.
//!
//! The wire format is a JSON-like array of quoted `YYYY-MM-DD` literals,
//! e.g. `["2001-12-21","2015-12-21"]`.  [`StreamDateReader`] and
//! [`StreamDateWriter`] are small state machines over `BufRead` / `Write`
//! rather than a general JSON parser; they plug into
//! [`HolidayCalendar`](wd_time::HolidayCalendar) as a
//! [`DateSource`](wd_time::DateSource) and [`DateSink`](wd_time::DateSink).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// File load / save helpers.
pub mod file;

/// `StreamDateReader`.
pub mod reader;

mod syntax;

/// `StreamDateWriter`.
pub mod writer;

pub use file::{load_file, save_file};
pub use reader::StreamDateReader;
pub use writer::StreamDateWriter;

//! Source of "today" for open-ended work-day queries.
//!
//! The calendar never reads the system time directly; it asks an injected
//! [`Clock`].  Production code uses [`SystemClock`], tests pin the date with
//! [`FixedClock`].

use wd_core::errors::Result;

use crate::date::Date;

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date.
    ///
    /// # Errors
    /// Returns an error if today lies outside the supported date range.
    fn today(&self) -> Result<Date>;
}

/// The local date of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        Date::try_from(chrono::Local::now().date_naive())
    }
}

/// A clock frozen on a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.0)
    }
}

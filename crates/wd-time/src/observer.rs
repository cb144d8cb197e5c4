//! Observation of holiday-filtering decisions.
//!
//! A [`HolidayCalendar`](crate::HolidayCalendar) silently drops holidays that
//! fall on one of its weekend days; the decision is reported to a
//! [`HolidayObserver`] injected at construction time instead of to a global
//! logger.

use tracing::debug;

use crate::date::Date;
use crate::weekday::Weekday;

/// Receives notifications about holidays rejected by a calendar.
pub trait HolidayObserver: Send + Sync {
    /// Called when `date` was not added because `weekday` is a weekend day.
    fn weekend_overlap(&self, date: Date, weekday: Weekday);
}

/// Reports rejections as `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl HolidayObserver for TracingObserver {
    fn weekend_overlap(&self, date: Date, weekday: Weekday) {
        debug!(%date, %weekday, "holiday ignored because it overlaps a weekend day");
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl HolidayObserver for SilentObserver {
    fn weekend_overlap(&self, _date: Date, _weekday: Weekday) {}
}

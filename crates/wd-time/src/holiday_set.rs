//! `HolidaySet`: an ordered, duplicate-free set of dates.
//!
//! Backed by a sorted `Vec<Date>`.  Lookups and range counts are binary
//! searches, so `count_in_range` is O(log n) regardless of how many dates fall
//! inside the range.  A single [`insert`](HolidaySet::insert) is O(n) in the
//! worst case; bulk loads go through [`Extend`], which sorts the batch and
//! merges it in O(n + m log m).

use crate::date::Date;

/// An ordered set of dates supporting ceiling / floor / range-count queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HolidaySet {
    dates: Vec<Date>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { dates: Vec::new() }
    }

    /// Create an empty set with room for `capacity` dates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dates: Vec::with_capacity(capacity),
        }
    }

    // ── Mutators ─────────────────────────────────────────────────────────

    /// Insert `date`; returns `true` if it was not already present.
    pub fn insert(&mut self, date: Date) -> bool {
        match self.dates.binary_search(&date) {
            Ok(_) => false,
            Err(pos) => {
                self.dates.insert(pos, date);
                true
            }
        }
    }

    /// Remove `date`; returns `true` if it was present.
    pub fn remove(&mut self, date: Date) -> bool {
        match self.dates.binary_search(&date) {
            Ok(pos) => {
                self.dates.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove every date.
    pub fn clear(&mut self) {
        self.dates.clear();
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Whether `date` is in the set.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// The earliest date, or `None` if empty.
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// The latest date, or `None` if empty.
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// The least date `>= date`.
    pub fn ceiling(&self, date: Date) -> Option<Date> {
        self.dates.get(self.lower_bound(date)).copied()
    }

    /// The greatest date `<= date`.
    pub fn floor(&self, date: Date) -> Option<Date> {
        self.upper_bound(date)
            .checked_sub(1)
            .map(|i| self.dates[i])
    }

    /// The dates lying in `[start, end]`, as a sorted slice.
    ///
    /// Empty when `start > end`.
    pub fn range(&self, start: Date, end: Date) -> &[Date] {
        if start > end {
            return &[];
        }
        &self.dates[self.lower_bound(start)..self.upper_bound(end)]
    }

    /// Number of dates lying in `[start, end]`.
    pub fn count_in_range(&self, start: Date, end: Date) -> usize {
        self.range(start, end).len()
    }

    /// Iterate the dates in ascending order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Date>> {
        self.dates.iter().copied()
    }

    /// The dates as a sorted slice.
    pub fn as_slice(&self) -> &[Date] {
        &self.dates
    }

    /// Index of the first date `>= date`.
    fn lower_bound(&self, date: Date) -> usize {
        self.dates.partition_point(|d| *d < date)
    }

    /// Index of the first date `> date`.
    fn upper_bound(&self, date: Date) -> usize {
        self.dates.partition_point(|d| *d <= date)
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        let mut dates: Vec<Date> = iter.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }
}

impl Extend<Date> for HolidaySet {
    fn extend<I: IntoIterator<Item = Date>>(&mut self, iter: I) {
        let mut batch: Vec<Date> = iter.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        batch.sort_unstable();
        batch.dedup();

        let old = std::mem::take(&mut self.dates);
        let mut merged = Vec::with_capacity(old.len() + batch.len());
        let (mut a, mut b) = (old.into_iter().peekable(), batch.into_iter().peekable());
        loop {
            let next = match (a.peek(), b.peek()) {
                (Some(x), Some(y)) if x < y => a.next(),
                (Some(x), Some(y)) if x > y => b.next(),
                (Some(_), Some(_)) => {
                    b.next();
                    a.next()
                }
                (Some(_), None) => a.next(),
                (None, Some(_)) => b.next(),
                (None, None) => break,
            };
            merged.extend(next);
        }
        self.dates = merged;
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = Date;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Date>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! `WeekdaySet`: a compact set of weekdays.
//!
//! Used to describe the regular non-working days of a calendar.  The set is
//! stored as a 7-bit mask, so membership tests are a single bit operation.

use crate::weekday::Weekday;

/// A set of [`Weekday`] values.
///
/// The default set is `{Saturday, Sunday}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set: every day of the week is a working day.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// All seven weekdays.
    pub const ALL: WeekdaySet = WeekdaySet(0b111_1111);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekdaySet =
        WeekdaySet(bit(Weekday::Saturday) | bit(Weekday::Sunday));

    /// Build a set from a slice of weekdays.
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().copied().collect()
    }

    /// Insert `day`; returns `true` if it was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let was_absent = !self.contains(day);
        self.0 |= bit(day);
        was_absent
    }

    /// Remove `day`; returns `true` if it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let was_present = self.contains(day);
        self.0 &= !bit(day);
        was_present
    }

    /// Whether `day` is in the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of weekdays in the set (0–7).
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The weekdays not in this set.
    pub fn complement(&self) -> Self {
        WeekdaySet(!self.0 & Self::ALL.0)
    }

    /// Iterate the members in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

const fn bit(day: Weekday) -> u8 {
    1 << (day as u8 - 1)
}

impl Default for WeekdaySet {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl Extend<Weekday> for WeekdaySet {
    fn extend<I: IntoIterator<Item = Weekday>>(&mut self, iter: I) {
        for day in iter {
            self.insert(day);
        }
    }
}

impl std::fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, day) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{day}")?;
        }
        f.write_str("}")
    }
}

impl std::fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WeekdaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WeekdaySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(days.into_iter().collect())
    }
}

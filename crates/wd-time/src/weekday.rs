//! `Weekday`: day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), following ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All seven weekdays in Monday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1..=7 => Some(Self::ALL[usize::from(n - 1)]),
            _ => None,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Zero-based position in the week (Monday = 0 … Sunday = 6).
    pub fn index(&self) -> usize {
        usize::from(self.ordinal() - 1)
    }

    /// The weekday `n` days after this one, wrapping around the week.
    pub fn add_days(self, n: i64) -> Self {
        Self::ALL[(self.index() as i64 + n).rem_euclid(7) as usize]
    }

    /// The following weekday (Sunday wraps to Monday).
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// English name of the weekday.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = wd_core::Error;

    /// Accepts the full English name or its three-letter abbreviation,
    /// case-insensitively.
    fn from_str(s: &str) -> wd_core::Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|w| {
                let name = w.name().to_ascii_lowercase();
                lower == name || lower == name[..3]
            })
            .ok_or_else(|| wd_core::Error::Date(format!("unknown weekday `{s}`")))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        Self::ALL[w.num_days_from_monday() as usize]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Weekday {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Weekday {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_round_trip() {
        for w in Weekday::ALL {
            assert_eq!(Weekday::from_ordinal(w.ordinal()), Some(w));
        }
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::from_ordinal(8), None);
    }

    #[test]
    fn add_days_wraps() {
        assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
        assert_eq!(Weekday::Friday.add_days(3), Weekday::Monday);
        assert_eq!(Weekday::Monday.add_days(-1), Weekday::Sunday);
        assert_eq!(Weekday::Wednesday.add_days(14), Weekday::Wednesday);
    }

    #[test]
    fn parse_names() {
        assert_eq!("saturday".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!("Sun".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }
}

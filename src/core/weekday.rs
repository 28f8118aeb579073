//! Weekday codes used by `-i` and the exclusion set built from them.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{PdateError, Result};

/// Two-letter codes accepted after `-i`, Monday first.
pub const WEEKDAY_CODES: [(&str, Weekday); 7] = [
    ("mo", Weekday::Mon),
    ("tu", Weekday::Tue),
    ("we", Weekday::Wed),
    ("th", Weekday::Thu),
    ("fr", Weekday::Fri),
    ("sa", Weekday::Sat),
    ("su", Weekday::Sun),
];

/// Parse a two-letter weekday code (`mo` .. `su`).
///
/// # Errors
///
/// Returns [`PdateError::UnknownWeekday`] for anything else.
pub fn parse_weekday_code(code: &str) -> Result<Weekday> {
    WEEKDAY_CODES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, weekday)| *weekday)
        .ok_or_else(|| PdateError::UnknownWeekday(code.to_string()))
}

/// The code `-i` uses for a weekday.
#[must_use]
pub fn weekday_code(weekday: Weekday) -> &'static str {
    WEEKDAY_CODES[weekday.num_days_from_monday() as usize].0
}

/// A set of weekdays, one bit per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    fn bit(weekday: Weekday) -> u8 {
        1 << weekday.num_days_from_monday()
    }

    /// Add a weekday. Returns `false` if it was already present.
    pub fn insert(&mut self, weekday: Weekday) -> bool {
        let present = self.contains(weekday);
        self.0 |= Self::bit(weekday);
        !present
    }

    #[must_use]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    /// Whether `date` falls on a day in the set.
    #[must_use]
    pub fn excludes(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

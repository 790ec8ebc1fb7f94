//! `YYMMDD` date keys indexing one analysis artifact per day.
//!
//! Keys assume the 21st century: the two-digit year is always `2000 + YY`.
//! That is an explicit, documented limitation of the artifact naming scheme,
//! not something this module tries to paper over. Because the century is
//! fixed, ascending lexicographic order of the six digits equals ascending
//! calendar order.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::DateKeyError;

/// A validated six-digit `YYMMDD` key for one day's artifact.
///
/// Construction goes through [`DateKey::from_str`] (raw strings) or
/// [`DateKey::today`] (the local clock), so every held value names a real
/// calendar date and display formatting cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Key for the current date on the local clock.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The underlying calendar date.
    #[must_use]
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Long human-readable form for display, e.g. `Friday, July 25, 2025`.
    #[must_use]
    pub fn display(self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}",
            self.0.year() % 100,
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 {
            return Err(DateKeyError::WrongLength(s.to_string()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateKeyError::NotNumeric(s.to_string()));
        }

        // Slicing is safe: six ASCII digits were just verified.
        let field =
            |range: std::ops::Range<usize>| -> u32 { s[range].parse().unwrap_or_default() };
        let year = 2000 + i32::try_from(field(0..2)).unwrap_or_default();
        let month = field(2..4);
        let day = field(4..6);

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateKeyError::ImpossibleDate(s.to_string()))
    }
}

/// Renders a raw key string as a long date, falling back to the raw key when
/// it cannot be parsed. Display code should never crash over a bad key.
#[must_use]
pub fn display_or_raw(raw: &str) -> String {
    DateKey::from_str(raw).map_or_else(|_| raw.to_string(), DateKey::display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_key_into_calendar_date() {
        let key: DateKey = "250725".parse().expect("valid key");
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 7, 25).unwrap());
    }

    #[test]
    fn year_is_offset_from_2000() {
        let key: DateKey = "000101".parse().expect("valid key");
        assert_eq!(key.date().year(), 2000);
        let key: DateKey = "991231".parse().expect("valid key");
        assert_eq!(key.date().year(), 2099);
    }

    #[test]
    fn round_trips_through_display_form() {
        let key: DateKey = "250705".parse().expect("valid key");
        assert_eq!(key.to_string(), "250705");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "25072".parse::<DateKey>(),
            Err(DateKeyError::WrongLength("25072".to_string()))
        );
        assert_eq!(
            "2507251".parse::<DateKey>(),
            Err(DateKeyError::WrongLength("2507251".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            "25jul5".parse::<DateKey>(),
            Err(DateKeyError::NotNumeric("25jul5".to_string()))
        );
    }

    #[test]
    fn rejects_impossible_month_and_day() {
        assert_eq!(
            "251325".parse::<DateKey>(),
            Err(DateKeyError::ImpossibleDate("251325".to_string()))
        );
        assert_eq!(
            "250732".parse::<DateKey>(),
            Err(DateKeyError::ImpossibleDate("250732".to_string()))
        );
        // Feb 30 is numerically plausible but not a real date.
        assert_eq!(
            "250230".parse::<DateKey>(),
            Err(DateKeyError::ImpossibleDate("250230".to_string()))
        );
    }

    #[test]
    fn long_display_includes_weekday_month_and_full_year() {
        let key: DateKey = "250725".parse().expect("valid key");
        assert_eq!(key.display(), "Friday, July 25, 2025");
    }

    #[test]
    fn lexicographic_key_order_matches_calendar_order() {
        let a: DateKey = "241231".parse().expect("valid key");
        let b: DateKey = "250101".parse().expect("valid key");
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn display_or_raw_falls_back_to_raw_key() {
        assert_eq!(display_or_raw("250725"), "Friday, July 25, 2025");
        assert_eq!(display_or_raw("garbage"), "garbage");
        assert_eq!(display_or_raw("251340"), "251340");
    }

    #[test]
    fn today_produces_a_six_digit_key() {
        let key = DateKey::today();
        let rendered = key.to_string();
        assert_eq!(rendered.len(), 6);
        assert!(rendered.bytes().all(|b| b.is_ascii_digit()));
        // And it must re-parse to the same date.
        assert_eq!(rendered.parse::<DateKey>().expect("round trip"), key);
    }
}

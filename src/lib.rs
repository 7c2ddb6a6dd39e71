//! A masked date-entry field.
//!
//! Raw text typed by a user (or assigned by a host) is parsed against a
//! configurable display format, falling back to the canonical `YYYY-MM-DD`
//! form, checked against optional inclusive `min`/`max` bounds, and exposed
//! as two strings: the display value and the canonical value.
//!
//! ```
//! use date_field::{DateField, FieldConfig};
//!
//! let mut field = DateField::new(FieldConfig::default());
//! field.set_value("2020-06-15");
//! assert_eq!(field.display_text(), "06 / 15 / 2020");
//! assert_eq!(field.value(), Some("2020-06-15"));
//! ```

mod bounds;
mod config;
mod consts;
mod field;
mod mask;
mod normalize;
mod pattern;
mod prelude;
mod template;
#[cfg(test)]
mod test_utils;
mod types;
mod validate;

pub use bounds::{BoundViolation, DateBounds};
pub use config::FieldConfig;
pub use consts::*;
pub use field::{CleanHook, DateField, FieldState, InputSurface, TextSurface, ValueTest};
pub use mask::InputMask;
pub use normalize::{clean, parse, parse_canonical_first, to_canonical, to_display};
pub use pattern::{DatePattern, Field, PatternError};
pub use template::MessageTemplate;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{ValidationError, check_bounds, format_error, parse_date, validate};

use crate::prelude::*;
use std::str::FromStr;

/// A real calendar date with no time or zone attached.
///
/// Every component is validated on construction, so a `CalendarDate` is never
/// partially valid: "no date" is spelled `Option::<CalendarDate>::None`.
/// Ordering is chronological, which is the same as comparing the dates as
/// instants at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Unexpected trailing input: {_0:?}")]
    TrailingInput(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// # Errors
    /// Returns the first component that is out of range. Impossible dates such
    /// as February 30th are rejected rather than rolled over.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Builds a date from an already validated year and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, ParseError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = next_day(self.year(), self.month(), self.day())?;
        Self::new(year, month, day).ok()
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        let (year, month, day) = prev_day(self.year(), self.month(), self.day())?;
        Self::new(year, month, day).ok()
    }
}

// --- day stepping ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn prev_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == JANUARY {
        if year <= MIN_YEAR {
            None
        } else {
            Some((year - 1, DECEMBER))
        }
    } else {
        Some((year, month - 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year, month, day + 1))
    } else {
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

fn prev_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day > MIN_DAY {
        Some((year, month, day - 1))
    } else {
        prev_month(year, month).map(|(py, pm)| (py, pm, days_in_month(py, pm)))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the canonical `YYYY-MM-DD` form only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatePattern::canonical().parse(s)
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_rejects_impossible_dates() {
        struct TestCase {
            parts: (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                parts: (2024, 2, 30),
                description: "February 30th",
            },
            TestCase {
                parts: (2023, 2, 29),
                description: "February 29th outside a leap year",
            },
            TestCase {
                parts: (2024, 13, 1),
                description: "month 13",
            },
            TestCase {
                parts: (2024, 0, 1),
                description: "month 0",
            },
            TestCase {
                parts: (2024, 4, 31),
                description: "April 31st",
            },
            TestCase {
                parts: (0, 1, 1),
                description: "year 0",
            },
        ];

        for case in &cases {
            assert!(
                CalendarDate::try_from(case.parts).is_err(),
                "{} should be rejected",
                case.description
            );
        }
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(date(2024, 2, 29).to_string(), "2024-02-29");
        assert_eq!(date(5, 1, 9).to_string(), "0005-01-09");
    }

    #[test]
    fn test_from_str_canonical_only() {
        assert_eq!("2024-02-29".parse::<CalendarDate>(), Ok(date(2024, 2, 29)));
        assert!("02 / 29 / 2024".parse::<CalendarDate>().is_err());
        assert!("2023-02-29".parse::<CalendarDate>().is_err());
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2019, 12, 31) < date(2020, 1, 1));
        assert!(date(2020, 1, 31) < date(2020, 2, 1));
        assert!(date(2020, 2, 1) < date(2020, 2, 2));
        assert_eq!(date(2020, 2, 2), date(2020, 2, 2));
    }

    #[test]
    fn test_succ_rolls_over() {
        assert_eq!(date(2024, 2, 28).succ(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).succ(), Some(date(2023, 3, 1)));
        assert_eq!(date(2020, 12, 31).succ(), Some(date(2021, 1, 1)));
        assert_eq!(date(9999, 12, 31).succ(), None);
    }

    #[test]
    fn test_pred_rolls_back() {
        assert_eq!(date(2024, 3, 1).pred(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 3, 1).pred(), Some(date(2023, 2, 28)));
        assert_eq!(date(2020, 1, 1).pred(), Some(date(2019, 12, 31)));
        assert_eq!(date(1, 1, 1).pred(), None);
    }

    #[test]
    fn test_serde() {
        let d = date(2020, 6, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2020-06-15\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<CalendarDate>("\"2020-02-30\"").is_err());
    }
}

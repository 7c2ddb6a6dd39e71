//! Parsing with the two-format fallback, and the two renderings derived from it.
//!
//! Text reaches a field from two places: the user types it in the display
//! format, and hosts assign it in canonical form. Each entry point tries the
//! two patterns in a fixed order rather than guessing.

use log::trace;

use crate::{CalendarDate, DatePattern};

fn first_match(raw: &str, attempts: [&DatePattern; 2]) -> Option<CalendarDate> {
    if raw.trim().is_empty() {
        return None;
    }
    attempts
        .into_iter()
        .find_map(|pattern| match pattern.parse(raw) {
            Ok(date) => Some(date),
            Err(err) => {
                trace!("{raw:?} does not match {pattern}: {err}");
                None
            },
        })
}

/// Parses `raw` against `pattern`, then against the canonical format.
///
/// Blank text is `None`, the same as text that matches neither.
pub fn parse(raw: &str, pattern: &DatePattern) -> Option<CalendarDate> {
    first_match(raw, [pattern, &DatePattern::canonical()])
}

/// Parses `raw` against the canonical format, then against `pattern`.
pub fn parse_canonical_first(raw: &str, pattern: &DatePattern) -> Option<CalendarDate> {
    first_match(raw, [&DatePattern::canonical(), pattern])
}

/// The canonical `YYYY-MM-DD` string for `raw`, if it names a real date.
pub fn to_canonical(raw: &str, pattern: &DatePattern) -> Option<String> {
    parse(raw, pattern).map(|date| date.to_string())
}

/// `raw` rendered in `pattern`, if it names a real date.
pub fn to_display(raw: &str, pattern: &DatePattern) -> Option<String> {
    parse_canonical_first(raw, pattern).map(|date| pattern.format(&date))
}

/// The value a field stores for `raw`: canonical when it parses, otherwise
/// the text unchanged so validation can report on it.
pub fn clean(raw: &str, pattern: &DatePattern) -> String {
    to_canonical(raw, pattern).unwrap_or_else(|| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, pattern};

    #[test]
    fn test_parse_falls_back_to_canonical() {
        let p = DatePattern::default();
        assert_eq!(parse("06 / 15 / 2020", &p), Some(date(2020, 6, 15)));
        assert_eq!(parse("2020-06-15", &p), Some(date(2020, 6, 15)));
        assert_eq!(parse("June 15th", &p), None);
    }

    #[test]
    fn test_blank_is_absent() {
        let p = DatePattern::default();
        assert_eq!(parse("", &p), None);
        assert_eq!(parse("  ", &p), None);
        assert_eq!(to_canonical("", &p), None);
        assert_eq!(to_display("", &p), None);
    }

    #[test]
    fn test_to_canonical() {
        let p = DatePattern::default();
        assert_eq!(
            to_canonical("02 / 29 / 2024", &p).as_deref(),
            Some("2024-02-29")
        );
        assert_eq!(to_canonical("02 / 29 / 2023", &p), None);
    }

    #[test]
    fn test_to_display() {
        let p = DatePattern::default();
        assert_eq!(
            to_display("2020-06-15", &p).as_deref(),
            Some("06 / 15 / 2020")
        );
        assert_eq!(
            to_display("06/15/2020", &p).as_deref(),
            Some("06 / 15 / 2020")
        );
        assert_eq!(to_display("not-a-date", &p), None);
    }

    #[test]
    fn test_clean_keeps_unparseable_text() {
        let p = DatePattern::default();
        assert_eq!(clean("06 / 15 / 2020", &p), "2020-06-15");
        assert_eq!(clean("06 / 31 / 2020", &p), "06 / 31 / 2020");
    }

    #[test]
    fn test_round_trip_through_display_is_idempotent() {
        let patterns = [
            DatePattern::default(),
            DatePattern::canonical(),
            pattern("DD.MM.YYYY"),
            pattern("D/M/YYYY"),
            pattern("YYYY MM DD"),
        ];

        let mut day = date(1999, 12, 1);
        let end = date(2001, 3, 31);
        while day <= end {
            let raw = day.to_string();
            for p in &patterns {
                let canonical = to_canonical(&raw, p);
                let display = canonical.as_deref().and_then(|c| to_display(c, p));
                let again = display.as_deref().and_then(|d| to_canonical(d, p));
                assert_eq!(again, canonical, "{raw} through {p}");
                assert_eq!(again.as_deref(), Some(raw.as_str()));
            }
            let Some(next) = day.succ() else { break };
            day = next;
        }
    }
}

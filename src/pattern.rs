//! Display-format patterns such as `MM / DD / YYYY`.
//!
//! Supported tokens:
//!
//! | token  | meaning                                   |
//! |--------|-------------------------------------------|
//! | `YYYY` | four-digit year                           |
//! | `YY`   | two-digit year, see [`Year::from_two_digits`] |
//! | `MM`   | two-digit month                           |
//! | `M`    | one or two digit month                    |
//! | `DD`   | two-digit day                             |
//! | `D`    | one or two digit day                      |
//!
//! Everything else is literal text. Whitespace inside literals is not
//! significant when parsing. A pattern compiled from a format string also
//! lets a literal be missing entirely when the input has been stripped of
//! mask characters (`02292024` matches `MM / DD / YYYY`);
//! [`DatePattern::canonical`] never does.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CANONICAL_FORMAT, CalendarDate, DEFAULT_FORMAT, Month, ParseError, Year, prelude::*};

/// One of the three date components a pattern must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Date pattern {pattern:?} has no {field} token")]
    MissingField { pattern: String, field: Field },

    #[error("Date pattern {pattern:?} has more than one {field} token")]
    DuplicateField { pattern: String, field: Field },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Token {
    FullYear,
    ShortYear,
    Month { padded: bool },
    Day { padded: bool },
}

impl Token {
    /// Longest spelling first so `YYYY` is never read as two `YY`.
    const SPELLINGS: [(&'static str, Self); 6] = [
        ("YYYY", Self::FullYear),
        ("YY", Self::ShortYear),
        ("MM", Self::Month { padded: true }),
        ("M", Self::Month { padded: false }),
        ("DD", Self::Day { padded: true }),
        ("D", Self::Day { padded: false }),
    ];

    const fn field(self) -> Field {
        match self {
            Self::FullYear | Self::ShortYear => Field::Year,
            Self::Month { .. } => Field::Month,
            Self::Day { .. } => Field::Day,
        }
    }

    /// (min, max) digits accepted when parsing.
    const fn width(self) -> (usize, usize) {
        match self {
            Self::FullYear => (4, 4),
            Self::ShortYear | Self::Month { padded: true } | Self::Day { padded: true } => (2, 2),
            Self::Month { padded: false } | Self::Day { padded: false } => (1, 2),
        }
    }

    fn render(self, date: &CalendarDate) -> String {
        match self {
            Self::FullYear => format!("{:04}", date.year()),
            Self::ShortYear => format!("{:02}", date.year_typed().two_digits()),
            Self::Month { padded: true } => format!("{:02}", date.month()),
            Self::Month { padded: false } => date.month().to_string(),
            Self::Day { padded: true } => format!("{:02}", date.day()),
            Self::Day { padded: false } => date.day().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Token(Token),
    Literal(String),
}

/// A compiled display format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{source}")]
pub struct DatePattern {
    source: String,
    segments: Vec<Segment>,
    /// Accept input whose literals were removed by an input mask.
    unmasked_input: bool,
}

impl DatePattern {
    /// The canonical storage format, `YYYY-MM-DD`.
    pub fn canonical() -> Self {
        Self {
            source: CANONICAL_FORMAT.to_owned(),
            segments: vec![
                Segment::Token(Token::FullYear),
                Segment::Literal("-".to_owned()),
                Segment::Token(Token::Month { padded: true }),
                Segment::Literal("-".to_owned()),
                Segment::Token(Token::Day { padded: true }),
            ],
            unmasked_input: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Interprets `input` strictly against this pattern.
    ///
    /// # Errors
    /// `EmptyInput` for blank text, `InvalidFormat` when the shape does not
    /// match, `TrailingInput` when text is left over, and the component
    /// errors when the digits do not form a real calendar date.
    pub fn parse(&self, input: &str) -> Result<CalendarDate, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut scanner = Scanner::new(trimmed, self.unmasked_input);
        let (mut year, mut month, mut day) = (None, None, None);

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => scanner.literal(literal)?,
                Segment::Token(token) => {
                    let (min, max) = token.width();
                    let value = scanner.digits(min, max)?;
                    match token {
                        Token::FullYear => year = Some(Year::new(value)?),
                        Token::ShortYear => year = Some(Year::from_two_digits(value)?),
                        Token::Month { .. } => month = Some(Month::new(narrow(value)?)?),
                        Token::Day { .. } => day = Some(narrow(value)?),
                    }
                },
            }
        }
        scanner.finish()?;

        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => CalendarDate::from_parts(year, month, day),
            _ => Err(ParseError::InvalidFormat(format!(
                "{trimmed} (pattern {} is incomplete)",
                self.source
            ))),
        }
    }

    /// Renders `date` in this pattern.
    pub fn format(&self, date: &CalendarDate) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.clone(),
                Segment::Token(token) => token.render(date),
            })
            .collect()
    }
}

impl Default for DatePattern {
    /// `MM / DD / YYYY`
    fn default() -> Self {
        Self {
            source: DEFAULT_FORMAT.to_owned(),
            segments: vec![
                Segment::Token(Token::Month { padded: true }),
                Segment::Literal(" / ".to_owned()),
                Segment::Token(Token::Day { padded: true }),
                Segment::Literal(" / ".to_owned()),
                Segment::Token(Token::FullYear),
            ],
            unmasked_input: true,
        }
    }
}

impl FromStr for DatePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = s;

        while let Some(c) = rest.chars().next() {
            let token = Token::SPELLINGS
                .iter()
                .find(|(spelling, _)| rest.starts_with(spelling));
            match token {
                Some((spelling, token)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Token(*token));
                    rest = &rest[spelling.len()..];
                },
                None => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                },
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        for field in [Field::Year, Field::Month, Field::Day] {
            let count = segments
                .iter()
                .filter(|segment| matches!(segment, Segment::Token(t) if t.field() == field))
                .count();
            match count {
                0 => {
                    return Err(PatternError::MissingField {
                        pattern: s.to_owned(),
                        field,
                    });
                },
                1 => {},
                _ => {
                    return Err(PatternError::DuplicateField {
                        pattern: s.to_owned(),
                        field,
                    });
                },
            }
        }

        Ok(Self {
            source: s.to_owned(),
            segments,
            unmasked_input: true,
        })
    }
}

impl Serialize for DatePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for DatePattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn narrow(value: u16) -> Result<u8, ParseError> {
    u8::try_from(value).map_err(|_| ParseError::InvalidFormat(value.to_string()))
}

/// Left-to-right cursor over the input text.
struct Scanner<'a> {
    rest: &'a str,
    unmasked_input: bool,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str, unmasked_input: bool) -> Self {
        Self {
            rest: input,
            unmasked_input,
        }
    }

    fn literal(&mut self, literal: &str) -> Result<(), ParseError> {
        let expected: String = literal.chars().filter(|c| !c.is_whitespace()).collect();
        self.rest = self.rest.trim_start();
        if expected.is_empty() {
            return Ok(());
        }

        if let Some(after) = self.rest.strip_prefix(expected.as_str()) {
            self.rest = after.trim_start();
            Ok(())
        } else if self.unmasked_input && self.rest.starts_with(|c: char| c.is_ascii_digit()) {
            // literal stripped by the mask
            Ok(())
        } else {
            Err(ParseError::InvalidFormat(format!(
                "expected {expected:?} at {:?}",
                self.rest
            )))
        }
    }

    fn digits(&mut self, min: usize, max: usize) -> Result<u16, ParseError> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return Err(ParseError::InvalidFormat(format!(
                "expected {min} digit(s) at {:?}",
                self.rest
            )));
        }
        let (digits, after) = self.rest.split_at(len);
        self.rest = after;
        digits
            .parse()
            .map_err(|_| ParseError::InvalidFormat(digits.to_owned()))
    }

    fn finish(&self) -> Result<(), ParseError> {
        let rest = self.rest.trim();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput(rest.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, pattern};

    #[test]
    fn test_builtin_patterns_match_compiled() {
        assert_eq!(pattern(CANONICAL_FORMAT).segments, DatePattern::canonical().segments);
        assert_eq!(pattern(DEFAULT_FORMAT), DatePattern::default());
    }

    #[test]
    fn test_canonical_requires_literals() {
        let canonical = DatePattern::canonical();
        assert!(canonical.parse("20200615").is_err());
        assert!(canonical.parse("2020-0615").is_err());
        assert_eq!(canonical.parse("2020-06-15"), Ok(date(2020, 6, 15)));

        // a configured YYYY-MM-DD display format still sees mask-stripped text
        assert_eq!(pattern(CANONICAL_FORMAT).parse("20200615"), Ok(date(2020, 6, 15)));
    }

    #[test]
    fn test_pattern_requires_each_field_once() {
        assert!(matches!(
            "MM / YYYY".parse::<DatePattern>(),
            Err(PatternError::MissingField {
                field: Field::Day,
                ..
            })
        ));
        assert!(matches!(
            "DD / DD / YYYY".parse::<DatePattern>(),
            Err(PatternError::DuplicateField {
                field: Field::Day,
                ..
            })
        ));
        assert!(matches!(
            "".parse::<DatePattern>(),
            Err(PatternError::MissingField {
                field: Field::Year,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_default_format() {
        let p = DatePattern::default();
        assert_eq!(p.parse("02 / 29 / 2024"), Ok(date(2024, 2, 29)));
        assert_eq!(p.parse("06/15/2020"), Ok(date(2020, 6, 15)));
        assert_eq!(p.parse("  06 / 15 / 2020 "), Ok(date(2020, 6, 15)));
    }

    #[test]
    fn test_parse_unmasked_text() {
        let p = DatePattern::default();
        assert_eq!(p.parse("02292024"), Ok(date(2024, 2, 29)));
        assert_eq!(p.parse("06 / 152020"), Ok(date(2020, 6, 15)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        struct TestCase {
            input: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input: "02 / 29 / 2023",
                description: "not a leap year",
            },
            TestCase {
                input: "02 / 30 / 2024",
                description: "February 30th",
            },
            TestCase {
                input: "13 / 01 / 2024",
                description: "month 13",
            },
            TestCase {
                input: "00 / 01 / 2024",
                description: "month 0",
            },
            TestCase {
                input: "01 / 00 / 2024",
                description: "day 0",
            },
            TestCase {
                input: "01 / 15",
                description: "missing year",
            },
            TestCase {
                input: "01 / 15 / 2024 / 7",
                description: "too many components",
            },
            TestCase {
                input: "ab / 15 / 2024",
                description: "non-numeric month",
            },
            TestCase {
                input: "1 / 15 / 2024",
                description: "unpadded month for MM",
            },
            TestCase {
                input: "01 - 15 - 2024",
                description: "wrong separator",
            },
            TestCase {
                input: "01 / 15 / 24",
                description: "two-digit year for YYYY",
            },
        ];

        let p = DatePattern::default();
        for case in &cases {
            assert!(
                p.parse(case.input).is_err(),
                "{:?} should be rejected ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            DatePattern::default().parse("   "),
            Err(ParseError::EmptyInput)
        );
    }

    #[test]
    fn test_parse_trailing_input() {
        assert!(matches!(
            DatePattern::canonical().parse("2024-02-29T00:00"),
            Err(ParseError::TrailingInput(_))
        ));
    }

    #[test]
    fn test_two_digit_year_century() {
        let p = pattern("MM/DD/YY");
        assert_eq!(p.parse("01/01/68"), Ok(date(2068, 1, 1)));
        assert_eq!(p.parse("01/01/69"), Ok(date(1969, 1, 1)));
        assert_eq!(p.parse("12/31/99"), Ok(date(1999, 12, 31)));
        assert_eq!(p.parse("02/29/00"), Ok(date(2000, 2, 29)));
        assert_eq!(p.format(&date(1999, 12, 31)), "12/31/99");
        assert_eq!(p.format(&date(2005, 3, 4)), "03/04/05");
    }

    #[test]
    fn test_unpadded_tokens() {
        let p = pattern("D.M.YYYY");
        assert_eq!(p.parse("5.3.2021"), Ok(date(2021, 3, 5)));
        assert_eq!(p.parse("15.11.2021"), Ok(date(2021, 11, 15)));
        assert_eq!(p.format(&date(2021, 3, 5)), "5.3.2021");
    }

    #[test]
    fn test_format() {
        assert_eq!(
            DatePattern::default().format(&date(2020, 6, 15)),
            "06 / 15 / 2020"
        );
        assert_eq!(
            DatePattern::canonical().format(&date(987, 1, 2)),
            "0987-01-02"
        );
        assert_eq!(pattern("DD.MM.YYYY").format(&date(2020, 6, 5)), "05.06.2020");
    }

    #[test]
    fn test_display_and_serde() {
        let p = pattern("DD.MM.YYYY");
        assert_eq!(p.to_string(), "DD.MM.YYYY");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"DD.MM.YYYY\"");
        let parsed: DatePattern = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
        assert!(serde_json::from_str::<DatePattern>("\"MM/YYYY\"").is_err());
    }
}

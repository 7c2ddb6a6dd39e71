use crate::{CalendarDate, DatePattern, FieldConfig, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid year in test")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid month in test")
}

pub fn date(y: u16, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(y, m, d).expect("valid date in test")
}

pub fn pattern(source: &str) -> DatePattern {
    source.parse().expect("valid pattern in test")
}

/// Default configuration bounded to calendar year 2020.
pub fn config_2020() -> FieldConfig {
    FieldConfig::default()
        .with_min("2020-01-01")
        .with_max("2020-12-31")
}

use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// Inclusive bounds on a date. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateBounds {
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

/// Which bound a date falls outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundViolation {
    #[error("{date} is before the lower bound {min}")]
    Below { date: CalendarDate, min: CalendarDate },

    #[error("{date} is after the upper bound {max}")]
    Above { date: CalendarDate, max: CalendarDate },
}

impl DateBounds {
    /// Bounds are taken as given; `min > max` simply admits no date.
    pub const fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> Option<CalendarDate> {
        self.min
    }

    pub const fn max(&self) -> Option<CalendarDate> {
        self.max
    }

    /// Checks the lower bound first, then the upper bound.
    ///
    /// # Errors
    /// Returns the first bound `date` falls outside of. Dates equal to a bound pass.
    pub fn check(&self, date: &CalendarDate) -> Result<(), BoundViolation> {
        match (self.min, self.max) {
            (Some(min), _) if *date < min => Err(BoundViolation::Below { date: *date, min }),
            (_, Some(max)) if *date > max => Err(BoundViolation::Above { date: *date, max }),
            _ => Ok(()),
        }
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.check(date).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn year_2020() -> DateBounds {
        DateBounds::new(Some(date(2020, 1, 1)), Some(date(2020, 12, 31)))
    }

    #[test]
    fn test_check_is_inclusive() {
        let bounds = year_2020();
        assert_eq!(bounds.check(&date(2020, 1, 1)), Ok(()));
        assert_eq!(bounds.check(&date(2020, 6, 15)), Ok(()));
        assert_eq!(bounds.check(&date(2020, 12, 31)), Ok(()));
    }

    #[test]
    fn test_check_one_day_outside() {
        let bounds = year_2020();
        assert_eq!(
            bounds.check(&date(2019, 12, 31)),
            Err(BoundViolation::Below {
                date: date(2019, 12, 31),
                min: date(2020, 1, 1)
            })
        );
        assert_eq!(
            bounds.check(&date(2021, 1, 1)),
            Err(BoundViolation::Above {
                date: date(2021, 1, 1),
                max: date(2020, 12, 31)
            })
        );
    }

    #[test]
    fn test_open_ends() {
        let at_least = DateBounds::new(Some(date(2020, 1, 1)), None);
        assert!(at_least.contains(&date(9999, 12, 31)));
        assert!(!at_least.contains(&date(2019, 12, 31)));

        let at_most = DateBounds::new(None, Some(date(2020, 1, 1)));
        assert!(at_most.contains(&date(1, 1, 1)));
        assert!(!at_most.contains(&date(2020, 1, 2)));

        assert!(DateBounds::default().contains(&date(2020, 1, 1)));
    }

    #[test]
    fn test_inverted_bounds_admit_nothing() {
        let bounds = DateBounds::new(Some(date(2021, 1, 1)), Some(date(2020, 1, 1)));
        assert!(!bounds.contains(&date(2020, 6, 1)));
        assert!(matches!(
            bounds.check(&date(2020, 6, 1)),
            Err(BoundViolation::Below { .. })
        ));
    }
}

//! Actual/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// The money market convention: actual calendar days over a 360-day year.
/// Used for deposits and IBOR floating legs in EUR and USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_half_year() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2025, 7, 15).unwrap();
        assert_eq!(Act360.day_count(start, end), 181);
        assert_relative_eq!(Act360.year_fraction(start, end), 181.0 / 360.0);
    }

    #[test]
    fn test_negative_when_reversed() {
        let start = Date::from_ymd(2025, 7, 15).unwrap();
        let end = Date::from_ymd(2025, 1, 15).unwrap();
        assert!(Act360.year_fraction(start, end) < 0.0);
    }
}

//! Business day calendars and conventions.
//!
//! This module provides:
//! - Business day calendars for the markets Fairval prices
//! - Business day adjustment conventions
//! - Holiday detection and date rolling

mod conventions;
mod federal_reserve;
mod target;

pub use conventions::{adjust, BusinessDayConvention};
pub use federal_reserve::FederalReserveCalendar;
pub use target::TargetCalendar;

use crate::error::CoreResult;
use crate::types::{Date, Tenor};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a tenor, then applies the adjustment convention.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the unadjusted result is out of range.
    fn advance(
        &self,
        date: Date,
        tenor: Tenor,
        convention: BusinessDayConvention,
    ) -> CoreResult<Date> {
        let unadjusted = tenor.advance_from(date)?;
        Ok(self.adjust(unadjusted, convention))
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }
}

/// A weekend-only calendar with no market holidays.
///
/// Useful for tests or when holiday data is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Date of Easter Sunday for a given year (Gregorian computus).
pub(crate) fn easter_sunday(year: i32) -> Date {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u32, day as u32).expect("computus yields a valid date")
}

/// Date of the n-th given weekday of a month (n is 1-based).
pub(crate) fn nth_weekday(year: i32, month: u32, weekday: chrono::Weekday, n: u32) -> Date {
    let first = Date::from_ymd(year, month, 1).expect("first of month is valid");
    let offset = (7 + weekday.num_days_from_monday() as i64
        - first.weekday().num_days_from_monday() as i64)
        % 7;
    first.add_days(offset + 7 * i64::from(n - 1))
}

/// Date of the last given weekday of a month.
pub(crate) fn last_weekday(year: i32, month: u32, weekday: chrono::Weekday) -> Date {
    let eom = Date::from_ymd(year, month, 1)
        .expect("first of month is valid")
        .end_of_month();
    let offset = (7 + eom.weekday().num_days_from_monday() as i64
        - weekday.num_days_from_monday() as i64)
        % 7;
    eom.add_days(-offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_easter_known_dates() {
        assert_eq!(easter_sunday(2024), Date::from_ymd(2024, 3, 31).unwrap());
        assert_eq!(easter_sunday(2025), Date::from_ymd(2025, 4, 20).unwrap());
        assert_eq!(easter_sunday(2026), Date::from_ymd(2026, 4, 5).unwrap());
    }

    #[test]
    fn test_nth_weekday() {
        // MLK day 2025: third Monday of January = Jan 20
        assert_eq!(
            nth_weekday(2025, 1, Weekday::Mon, 3),
            Date::from_ymd(2025, 1, 20).unwrap()
        );
    }

    #[test]
    fn test_last_weekday() {
        // Memorial day 2025: last Monday of May = May 26
        assert_eq!(
            last_weekday(2025, 5, Weekday::Mon),
            Date::from_ymd(2025, 5, 26).unwrap()
        );
    }

    #[test]
    fn test_add_business_days() {
        let cal = WeekendCalendar;
        // Friday + 2 business days = Tuesday
        let friday = Date::from_ymd(2025, 1, 17).unwrap();
        assert_eq!(
            cal.add_business_days(friday, 2),
            Date::from_ymd(2025, 1, 21).unwrap()
        );
    }
}

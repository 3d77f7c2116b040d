//! US Federal Reserve calendar.

use chrono::Weekday;

use super::{last_weekday, nth_weekday, Calendar};
use crate::types::Date;

/// US Federal Reserve (banking) holiday calendar.
///
/// Holidays falling on a Sunday are observed the following Monday;
/// Saturday holidays are not observed (the Fed schedule, unlike the
/// federal-employee schedule, does not shift them to Friday).
#[derive(Debug, Clone, Copy, Default)]
pub struct FederalReserveCalendar;

/// True if `date` is the fixed holiday (month, day) or its Monday observation.
fn fixed_holiday(date: Date, month: u32, day: u32) -> bool {
    let (m, d) = (date.month(), date.day());
    if m == month && d == day {
        return true;
    }
    // Sunday holiday observed Monday
    m == month && d == day + 1 && date.weekday() == Weekday::Mon
}

impl Calendar for FederalReserveCalendar {
    fn name(&self) -> &'static str {
        "US Federal Reserve"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }

        let year = date.year();

        // New Year's Day
        if fixed_holiday(date, 1, 1) {
            return false;
        }
        // Martin Luther King Jr. Day: third Monday of January
        if date == nth_weekday(year, 1, Weekday::Mon, 3) {
            return false;
        }
        // Washington's Birthday: third Monday of February
        if date == nth_weekday(year, 2, Weekday::Mon, 3) {
            return false;
        }
        // Memorial Day: last Monday of May
        if date == last_weekday(year, 5, Weekday::Mon) {
            return false;
        }
        // Juneteenth (since 2022)
        if year >= 2022 && fixed_holiday(date, 6, 19) {
            return false;
        }
        // Independence Day
        if fixed_holiday(date, 7, 4) {
            return false;
        }
        // Labor Day: first Monday of September
        if date == nth_weekday(year, 9, Weekday::Mon, 1) {
            return false;
        }
        // Columbus Day: second Monday of October
        if date == nth_weekday(year, 10, Weekday::Mon, 2) {
            return false;
        }
        // Veterans Day
        if fixed_holiday(date, 11, 11) {
            return false;
        }
        // Thanksgiving: fourth Thursday of November
        if date == nth_weekday(year, 11, Weekday::Thu, 4) {
            return false;
        }
        // Christmas Day
        if fixed_holiday(date, 12, 25) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_holidays_2025() {
        let cal = FederalReserveCalendar;
        assert!(cal.is_holiday(Date::from_ymd(2025, 1, 1).unwrap()));
        assert!(cal.is_holiday(Date::from_ymd(2025, 6, 19).unwrap()));
        assert!(cal.is_holiday(Date::from_ymd(2025, 7, 4).unwrap()));
        assert!(cal.is_holiday(Date::from_ymd(2025, 12, 25).unwrap()));
    }

    #[test]
    fn test_floating_holidays_2025() {
        let cal = FederalReserveCalendar;
        assert!(cal.is_holiday(Date::from_ymd(2025, 1, 20).unwrap())); // MLK
        assert!(cal.is_holiday(Date::from_ymd(2025, 2, 17).unwrap())); // Washington
        assert!(cal.is_holiday(Date::from_ymd(2025, 5, 26).unwrap())); // Memorial
        assert!(cal.is_holiday(Date::from_ymd(2025, 9, 1).unwrap())); // Labor
        assert!(cal.is_holiday(Date::from_ymd(2025, 10, 13).unwrap())); // Columbus
        assert!(cal.is_holiday(Date::from_ymd(2025, 11, 27).unwrap())); // Thanksgiving
    }

    #[test]
    fn test_sunday_observation() {
        let cal = FederalReserveCalendar;
        // July 4 2027 is a Sunday: observed Monday July 5
        assert!(cal.is_holiday(Date::from_ymd(2027, 7, 5).unwrap()));
    }

    #[test]
    fn test_saturday_not_observed() {
        let cal = FederalReserveCalendar;
        // July 4 2026 is a Saturday: Friday July 3 stays open on the Fed schedule
        assert!(cal.is_business_day(Date::from_ymd(2026, 7, 3).unwrap()));
    }

    #[test]
    fn test_juneteenth_before_2022() {
        let cal = FederalReserveCalendar;
        // 2021-06-18 Friday ordinary; 2021-06-19 was not yet a Fed holiday (Saturday anyway)
        assert!(cal.is_business_day(Date::from_ymd(2021, 6, 18).unwrap()));
    }
}

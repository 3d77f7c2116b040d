//! TARGET calendar for EUR markets.

use super::{easter_sunday, Calendar};
use crate::types::Date;

/// TARGET (Trans-European Automated Real-time Gross settlement Express
/// Transfer) calendar.
///
/// Holidays since 2000:
/// - New Year's Day (January 1)
/// - Good Friday
/// - Easter Monday
/// - Labour Day (May 1)
/// - Christmas Day (December 25)
/// - Boxing Day (December 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCalendar;

impl Calendar for TargetCalendar {
    fn name(&self) -> &'static str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }

        let (m, d) = (date.month(), date.day());
        if (m == 1 && d == 1) || (m == 5 && d == 1) || (m == 12 && (d == 25 || d == 26)) {
            return false;
        }

        let easter = easter_sunday(date.year());
        if date == easter.add_days(-2) || date == easter.add_days(1) {
            return false;
        }

        true
    }
}

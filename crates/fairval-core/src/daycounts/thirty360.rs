//! 30/360 Bond Basis day count convention.

use super::DayCount;
use crate::types::Date;

/// 30/360 Bond Basis day count convention.
///
/// Assumes 30-day months and a 360-day year. The standard convention
/// for EUR and USD fixed swap legs.
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30.
/// 2. If D2 is 31 and D1 is 30 (after rule 1), change D2 to 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = i64::from(start.year());
        let y2 = i64::from(end.year());
        let m1 = i64::from(start.month());
        let m2 = i64::from(end.month());
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}

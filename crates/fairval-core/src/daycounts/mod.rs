//! Day count conventions.
//!
//! Day count conventions determine accrual by specifying how to count
//! days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - money market deposits and floating legs
//! - [`Act365Fixed`]: Actual/365 Fixed - curve time axis, GBP markets
//! - [`Thirty360`]: 30/360 Bond Basis - EUR/USD fixed swap legs
//!
//! # Usage
//!
//! ```rust
//! use fairval_core::daycounts::{Act360, DayCount};
//! use fairval_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//! let tau = Act360.year_fraction(start, end);
//! assert!((tau - 181.0 / 360.0).abs() < 1e-15);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;
}

/// Runtime selection of a day count convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    #[default]
    Act365Fixed,
    /// 30/360 Bond Basis
    Thirty360,
}

impl DayCountConvention {
    /// Returns the year fraction under the selected convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
        }
    }

    /// Returns a static reference to the underlying convention object.
    #[must_use]
    pub fn as_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::Thirty360 => &Thirty360,
        }
    }

    /// Returns the name of the selected convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => Act360.name(),
            DayCountConvention::Act365Fixed => Act365Fixed.name(),
            DayCountConvention::Thirty360 => Thirty360.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_dispatch() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2026, 1, 15).unwrap();
        assert!(DayCountConvention::Act360.year_fraction(start, end) > 1.0);
        assert!((DayCountConvention::Act365Fixed.year_fraction(start, end) - 1.0).abs() < 1e-12);
        assert!((DayCountConvention::Thirty360.year_fraction(start, end) - 1.0).abs() < 1e-12);
    }
}

//! Core trait for discount curve queries.

use fairval_core::daycounts::{Act365Fixed, DayCount};
use fairval_core::types::{Compounding, Date};

use crate::error::CurveResult;

/// The core trait for discount curves.
///
/// A curve answers one question - the discount factor to a time or
/// date - and everything else (zero rates, forwards) is derived from
/// it. Time is measured in ACT/365F years from the reference date.
pub trait Curve: Send + Sync {
    /// Returns the curve's reference (valuation) date.
    fn reference_date(&self) -> Date;

    /// Returns the last pillar date backed by market data.
    fn max_date(&self) -> Date;

    /// Returns the discount factor from the reference date to time `t`.
    ///
    /// Returns exactly 1.0 for `t <= 0`.
    fn discount_factor(&self, t: f64) -> CurveResult<f64>;

    /// Converts a date to curve time (ACT/365F years from the reference date).
    fn time_from_reference(&self, date: Date) -> f64 {
        Act365Fixed.year_fraction(self.reference_date(), date)
    }

    /// Returns the discount factor to a date.
    fn discount(&self, date: Date) -> CurveResult<f64> {
        self.discount_factor(self.time_from_reference(date))
    }

    /// Returns the zero rate at time `t` under the given compounding.
    fn zero_rate(&self, t: f64, compounding: Compounding) -> CurveResult<f64> {
        let df = self.discount_factor(t)?;
        Ok(compounding.rate_from_discount(df, t))
    }

    /// Returns the forward rate between times `t1` and `t2` under the
    /// given compounding.
    ///
    /// Simple compounding gives `(DF(t1) / DF(t2) - 1) / (t2 - t1)`,
    /// continuous gives `ln(DF(t1) / DF(t2)) / (t2 - t1)`.
    fn forward_rate(&self, t1: f64, t2: f64, compounding: Compounding) -> CurveResult<f64> {
        if t2 <= t1 {
            return Ok(0.0);
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        if df1 <= 0.0 || df2 <= 0.0 {
            return Ok(0.0);
        }
        Ok(compounding.rate_from_discount(df2 / df1, t2 - t1))
    }

    /// Returns the simple forward rate between two dates with the
    /// accrual fraction taken from the leg's day count convention.
    ///
    /// This is the projection used for floating coupons: the forward
    /// and the coupon accrual must share one `tau`.
    fn simple_forward(&self, start: Date, end: Date, day_count: &dyn DayCount) -> CurveResult<f64> {
        let tau = day_count.year_fraction(start, end);
        if tau <= 0.0 {
            return Ok(0.0);
        }
        let df1 = self.discount(start)?;
        let df2 = self.discount(end)?;
        if df2 <= 0.0 {
            return Ok(0.0);
        }
        Ok((df1 / df2 - 1.0) / tau)
    }
}

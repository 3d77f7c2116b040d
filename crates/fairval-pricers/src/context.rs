//! Valuation contexts tying an evaluation date to one or more discount curves.
//!
//! All pricing engines take an explicit context rather than reading a global
//! evaluation date, so two contexts with different dates can be used side by
//! side in the same process.

use fairval_core::calendars::Calendar;
use fairval_core::types::Date;
use fairval_curves::discount::DiscountCurve;
use fairval_curves::traits::Curve;

use crate::error::{PricerError, PricerResult};

/// An evaluation date paired with the discount curve observed on that date.
#[derive(Debug, Clone, Copy)]
pub struct ValuationContext<'a> {
    evaluation_date: Date,
    curve: &'a DiscountCurve,
}

impl<'a> ValuationContext<'a> {
    /// Create a context. The curve must have been built as of the evaluation
    /// date, so discount factors are quoted from that date.
    pub fn new(evaluation_date: Date, curve: &'a DiscountCurve) -> PricerResult<Self> {
        if curve.reference_date() != evaluation_date {
            return Err(PricerError::invalid_input(format!(
                "curve reference date {} does not match evaluation date {}",
                curve.reference_date(),
                evaluation_date
            )));
        }
        Ok(Self {
            evaluation_date,
            curve,
        })
    }

    /// The date all values are expressed as of.
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date
    }

    /// The discount curve observed on the evaluation date.
    pub fn curve(&self) -> &'a DiscountCurve {
        self.curve
    }

    /// Discount factor from the evaluation date to `date`.
    pub fn discount(&self, date: Date) -> PricerResult<f64> {
        Ok(self.curve.discount(date)?)
    }

    /// Settlement date: `spot_days` business days after the evaluation date.
    pub fn settlement(&self, spot_days: i32, calendar: &dyn Calendar) -> Date {
        calendar.add_business_days(self.evaluation_date, spot_days)
    }
}

/// Two-currency context for cross-currency swap valuation.
///
/// `spot_fx` is quoted as units of domestic currency per one unit of foreign
/// currency, so a foreign present value times `spot_fx` is in domestic terms.
#[derive(Debug, Clone, Copy)]
pub struct XccyContext<'a> {
    evaluation_date: Date,
    domestic_curve: &'a DiscountCurve,
    foreign_curve: &'a DiscountCurve,
    spot_fx: f64,
}

impl<'a> XccyContext<'a> {
    /// Creates a two-currency context; both curves must sit on the
    /// evaluation date.
    pub fn new(
        evaluation_date: Date,
        domestic_curve: &'a DiscountCurve,
        foreign_curve: &'a DiscountCurve,
        spot_fx: f64,
    ) -> PricerResult<Self> {
        if domestic_curve.reference_date() != evaluation_date
            || foreign_curve.reference_date() != evaluation_date
        {
            return Err(PricerError::invalid_input(format!(
                "both curve reference dates must match evaluation date {evaluation_date}"
            )));
        }
        if !(spot_fx > 0.0) || !spot_fx.is_finite() {
            return Err(PricerError::invalid_input(format!(
                "spot FX rate must be positive and finite, got {spot_fx}"
            )));
        }
        Ok(Self {
            evaluation_date,
            domestic_curve,
            foreign_curve,
            spot_fx,
        })
    }

    /// The date all values are expressed as of.
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date
    }

    /// Discount curve for the domestic (pay) currency.
    pub fn domestic_curve(&self) -> &'a DiscountCurve {
        self.domestic_curve
    }

    /// Discount curve for the foreign (receive) currency.
    pub fn foreign_curve(&self) -> &'a DiscountCurve {
        self.foreign_curve
    }

    /// Domestic units per one foreign unit.
    pub fn spot_fx(&self) -> f64 {
        self.spot_fx
    }

    /// Domestic-side context, for pricing single-currency legs.
    pub fn domestic(&self) -> PricerResult<ValuationContext<'a>> {
        ValuationContext::new(self.evaluation_date, self.domestic_curve)
    }

    /// Foreign-side context.
    pub fn foreign(&self) -> PricerResult<ValuationContext<'a>> {
        ValuationContext::new(self.evaluation_date, self.foreign_curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_curve(reference: Date) -> DiscountCurve {
        let pillars: Vec<(Date, f64)> = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|t: &f64| {
                let d = reference.add_days((t * 365.0) as i64);
                (d, (-0.03 * t).exp())
            })
            .collect();
        DiscountCurve::from_pillars(reference, &pillars).unwrap()
    }

    #[test]
    fn test_context_requires_matching_reference_date() {
        let reference = Date::from_ymd(2025, 1, 15).unwrap();
        let curve = flat_curve(reference);

        assert!(ValuationContext::new(reference, &curve).is_ok());

        let other = Date::from_ymd(2025, 1, 16).unwrap();
        assert!(ValuationContext::new(other, &curve).is_err());
    }

    #[test]
    fn test_xccy_context_rejects_bad_fx() {
        let reference = Date::from_ymd(2025, 1, 15).unwrap();
        let domestic = flat_curve(reference);
        let foreign = flat_curve(reference);

        assert!(XccyContext::new(reference, &domestic, &foreign, 1.0850).is_ok());
        assert!(XccyContext::new(reference, &domestic, &foreign, 0.0).is_err());
        assert!(XccyContext::new(reference, &domestic, &foreign, -1.0).is_err());
        assert!(XccyContext::new(reference, &domestic, &foreign, f64::NAN).is_err());
    }
}

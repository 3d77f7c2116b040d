//! Par swap rate helper.

use fairval_core::calendars::{BusinessDayConvention, Calendar};
use fairval_core::daycounts::DayCountConvention;
use fairval_core::schedule::Schedule;
use fairval_core::types::{Date, Frequency, Tenor};

use super::RateHelper;
use crate::error::CurveResult;
use crate::traits::Curve;

/// A par interest rate swap quote.
///
/// In the single-curve setting the floating leg telescopes to
/// `DF(start) - DF(end)`, so the quote reprices when
///
/// ```text
/// rate * sum_i tau_i * DF(pay_i) = DF(start) - DF(end)
/// ```
///
/// with fixed-leg accruals `tau_i` under 30/360 Bond Basis by default.
#[derive(Debug, Clone)]
pub struct SwapHelper {
    start: Date,
    end: Date,
    rate: f64,
    fixed_periods: Vec<(Date, Date)>,
    fixed_day_count: DayCountConvention,
    label: String,
}

impl SwapHelper {
    /// Creates a swap helper from a spot date and tenor.
    ///
    /// The fixed schedule is generated backward from the rolled
    /// maturity with modified following adjustment on `calendar`.
    pub fn from_tenor(
        spot: Date,
        tenor: Tenor,
        rate: f64,
        fixed_frequency: Frequency,
        calendar: &dyn Calendar,
    ) -> CurveResult<Self> {
        // Generate from the unadjusted maturity so backward periods stay
        // regular; the builder rolls every date, maturity included.
        let unadjusted_end = tenor.advance_from(spot)?;
        let schedule = Schedule::builder(spot, unadjusted_end)
            .frequency(fixed_frequency)
            .calendar(calendar)
            .convention(BusinessDayConvention::ModifiedFollowing)
            .build()?;

        Ok(Self {
            start: spot,
            end: schedule.last(),
            rate,
            fixed_periods: schedule.periods(),
            fixed_day_count: DayCountConvention::Thirty360,
            label: format!("SWAP {tenor} @ {:.4}%", rate * 100.0),
        })
    }

    /// Overrides the fixed-leg day count convention.
    #[must_use]
    pub fn with_fixed_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.fixed_day_count = day_count;
        self
    }

    /// Returns the swap start (spot) date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the quoted par rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the fixed-leg accrual periods.
    #[must_use]
    pub fn fixed_periods(&self) -> &[(Date, Date)] {
        &self.fixed_periods
    }
}

impl RateHelper for SwapHelper {
    fn pillar_date(&self) -> Date {
        self.end
    }

    fn residual(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let mut fixed_pv = 0.0;
        for (accrual_start, accrual_end) in &self.fixed_periods {
            let tau = self.fixed_day_count.year_fraction(*accrual_start, *accrual_end);
            fixed_pv += self.rate * tau * curve.discount(*accrual_end)?;
        }

        // Telescoped floating leg
        let float_pv = curve.discount(self.start)? - curve.discount(self.end)?;

        Ok(fixed_pv - float_pv)
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountCurve;
    use approx::assert_relative_eq;
    use fairval_core::calendars::TargetCalendar;

    #[test]
    fn test_schedule_generated_backward() {
        let spot = Date::from_ymd(2025, 1, 17).unwrap();
        let helper = SwapHelper::from_tenor(
            spot,
            Tenor::years(2),
            0.031,
            Frequency::Annual,
            &TargetCalendar,
        )
        .unwrap();
        assert_eq!(helper.fixed_periods().len(), 2);
        assert_eq!(helper.fixed_periods()[0].0, spot);
        assert_eq!(helper.pillar_date(), Date::from_ymd(2027, 1, 18).unwrap());
    }

    #[test]
    fn test_one_period_swap_residual() {
        // Single annual period: residual = r*tau*DF(end) - (DF(spot) - DF(end))
        let reference = Date::from_ymd(2025, 1, 15).unwrap();
        let spot = Date::from_ymd(2025, 1, 17).unwrap();
        let helper = SwapHelper::from_tenor(
            spot,
            Tenor::years(1),
            0.032,
            Frequency::Annual,
            &TargetCalendar,
        )
        .unwrap();
        let end = helper.pillar_date();

        let df_spot = 0.9998;
        let tau = DayCountConvention::Thirty360.year_fraction(spot, end);
        let df_end = df_spot / (1.0 + 0.032 * tau);
        let curve =
            DiscountCurve::from_pillars(reference, &[(spot, df_spot), (end, df_end)]).unwrap();

        assert_relative_eq!(helper.residual(&curve).unwrap(), 0.0, epsilon = 1e-10);
    }
}

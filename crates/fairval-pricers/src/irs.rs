//! Vanilla single-currency interest rate swap.
//!
//! One curve projects the floating leg and discounts both legs, so the
//! floating leg telescopes and the fair rate follows from the annuity
//! without iteration. Fixed legs pay annual 30/360, floating legs pay
//! semi-annual ACT/360 by default.

use serde::{Deserialize, Serialize};

use fairval_core::calendars::{Calendar, WeekendCalendar};
use fairval_core::daycounts::DayCountConvention;
use fairval_core::schedule::Schedule;
use fairval_core::types::{Date, Frequency};

use crate::context::ValuationContext;
use crate::error::{PricerError, PricerResult};
use crate::fairvalue::solve_fair;
use crate::legs;

/// Which side of the swap the holder is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SwapSide {
    /// Pay fixed, receive floating.
    #[default]
    Payer,
    /// Receive fixed, pay floating.
    Receiver,
}

impl SwapSide {
    /// Sign applied to `float PV - fixed PV`.
    pub(crate) fn sign(self) -> f64 {
        match self {
            SwapSide::Payer => 1.0,
            SwapSide::Receiver => -1.0,
        }
    }
}

/// A vanilla fixed-for-floating interest rate swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VanillaSwap {
    notional: f64,
    fixed_rate: f64,
    float_spread: f64,
    side: SwapSide,
    fixed_periods: Vec<(Date, Date)>,
    float_periods: Vec<(Date, Date)>,
    fixed_day_count: DayCountConvention,
    float_day_count: DayCountConvention,
}

impl VanillaSwap {
    /// Creates a builder for a swap running from `start` to `end`.
    #[must_use]
    pub fn builder(start: Date, end: Date) -> VanillaSwapBuilder<'static> {
        VanillaSwapBuilder {
            start,
            end,
            notional: 1_000_000.0,
            fixed_rate: 0.0,
            float_spread: 0.0,
            side: SwapSide::default(),
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::SemiAnnual,
            fixed_day_count: DayCountConvention::Thirty360,
            float_day_count: DayCountConvention::Act360,
            calendar: &WeekendCalendar,
        }
    }

    /// Notional on both legs.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Contract fixed rate as a decimal.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Spread over the forward on the floating leg.
    pub fn float_spread(&self) -> f64 {
        self.float_spread
    }

    /// Which side the holder is on.
    pub fn side(&self) -> SwapSide {
        self.side
    }

    /// First accrual start date.
    pub fn start_date(&self) -> Date {
        self.fixed_periods[0].0
    }

    /// Final (adjusted) payment date.
    pub fn maturity(&self) -> Date {
        self.fixed_periods[self.fixed_periods.len() - 1].1
    }
}

/// Builder for [`VanillaSwap`].
#[derive(Clone, Copy)]
pub struct VanillaSwapBuilder<'a> {
    start: Date,
    end: Date,
    notional: f64,
    fixed_rate: f64,
    float_spread: f64,
    side: SwapSide,
    fixed_frequency: Frequency,
    float_frequency: Frequency,
    fixed_day_count: DayCountConvention,
    float_day_count: DayCountConvention,
    calendar: &'a dyn Calendar,
}

impl<'a> VanillaSwapBuilder<'a> {
    /// Sets the notional (default 1mm).
    #[must_use]
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = notional;
        self
    }

    /// Sets the contract fixed rate as a decimal.
    #[must_use]
    pub fn fixed_rate(mut self, rate: f64) -> Self {
        self.fixed_rate = rate;
        self
    }

    /// Sets the floating leg spread (default zero).
    #[must_use]
    pub fn float_spread(mut self, spread: f64) -> Self {
        self.float_spread = spread;
        self
    }

    /// Sets the holder's side (default payer).
    #[must_use]
    pub fn side(mut self, side: SwapSide) -> Self {
        self.side = side;
        self
    }

    /// Sets the fixed leg frequency (default annual).
    #[must_use]
    pub fn fixed_frequency(mut self, frequency: Frequency) -> Self {
        self.fixed_frequency = frequency;
        self
    }

    /// Sets the floating leg frequency (default semi-annual).
    #[must_use]
    pub fn float_frequency(mut self, frequency: Frequency) -> Self {
        self.float_frequency = frequency;
        self
    }

    /// Sets the fixed leg day count (default 30/360).
    #[must_use]
    pub fn fixed_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.fixed_day_count = day_count;
        self
    }

    /// Sets the floating leg day count (default ACT/360).
    #[must_use]
    pub fn float_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.float_day_count = day_count;
        self
    }

    /// Sets the holiday calendar used for both schedules.
    #[must_use]
    pub fn calendar<'b>(self, calendar: &'b dyn Calendar) -> VanillaSwapBuilder<'b> {
        VanillaSwapBuilder {
            start: self.start,
            end: self.end,
            notional: self.notional,
            fixed_rate: self.fixed_rate,
            float_spread: self.float_spread,
            side: self.side,
            fixed_frequency: self.fixed_frequency,
            float_frequency: self.float_frequency,
            fixed_day_count: self.fixed_day_count,
            float_day_count: self.float_day_count,
            calendar,
        }
    }

    /// Builds the swap, generating both leg schedules backward from the
    /// end date on the builder's calendar.
    pub fn build(self) -> PricerResult<VanillaSwap> {
        if !(self.notional > 0.0) {
            return Err(PricerError::invalid_input(format!(
                "notional must be positive, got {}",
                self.notional
            )));
        }
        let fixed_schedule = Schedule::builder(self.start, self.end)
            .frequency(self.fixed_frequency)
            .calendar(self.calendar)
            .build()?;
        let float_schedule = Schedule::builder(self.start, self.end)
            .frequency(self.float_frequency)
            .calendar(self.calendar)
            .build()?;
        Ok(VanillaSwap {
            notional: self.notional,
            fixed_rate: self.fixed_rate,
            float_spread: self.float_spread,
            side: self.side,
            fixed_periods: fixed_schedule.periods(),
            float_periods: float_schedule.periods(),
            fixed_day_count: self.fixed_day_count,
            float_day_count: self.float_day_count,
        })
    }
}

/// Swap valuation output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapResults {
    /// Notional the swap was priced on.
    pub notional: f64,
    /// Contract fixed rate the NPV was computed at.
    pub fixed_rate: f64,
    /// Which side the holder is on.
    pub side: SwapSide,
    /// NPV from the holder's side.
    pub npv: f64,
    /// Fixed rate that zeroes the NPV at the current float spread.
    pub fair_rate: f64,
    /// Float spread that zeroes the NPV at the current fixed rate.
    pub fair_spread: f64,
    /// Fixed leg PV at the contract rate.
    pub fixed_leg_npv: f64,
    /// Floating leg PV at the contract spread.
    pub float_leg_npv: f64,
    /// Fixed leg PV change for a one basis point rate move.
    pub fixed_leg_bps: f64,
    /// Float leg PV change for a one basis point spread move.
    pub float_leg_bps: f64,
}

/// Single-curve swap pricing engine.
#[derive(Debug, Clone, Copy)]
pub struct SwapPricer<'a> {
    ctx: &'a ValuationContext<'a>,
}

impl<'a> SwapPricer<'a> {
    /// Creates a pricer over the given context.
    #[must_use]
    pub fn new(ctx: &'a ValuationContext<'a>) -> Self {
        Self { ctx }
    }

    pub(crate) fn fixed_leg_pv(&self, swap: &VanillaSwap, rate: f64) -> PricerResult<f64> {
        let leg = legs::fixed_coupons(
            &swap.fixed_periods,
            swap.notional,
            rate,
            swap.fixed_day_count,
        );
        legs::present_value(self.ctx.curve(), &leg)
    }

    pub(crate) fn float_leg_pv(&self, swap: &VanillaSwap, spread: f64) -> PricerResult<f64> {
        let leg = legs::floating_coupons(
            self.ctx.curve(),
            &swap.float_periods,
            swap.notional,
            spread,
            swap.float_day_count,
        )?;
        legs::present_value(self.ctx.curve(), &leg)
    }

    /// Full valuation: NPV, fair parameters, and leg sensitivities.
    pub fn price(&self, swap: &VanillaSwap) -> PricerResult<SwapResults> {
        let fixed_leg_npv = self.fixed_leg_pv(swap, swap.fixed_rate)?;
        let float_leg_npv = self.float_leg_pv(swap, swap.float_spread)?;
        let npv = swap.side.sign() * (float_leg_npv - fixed_leg_npv);

        // Both legs are affine in the solved parameter.
        let fair_rate = solve_fair(|r| self.fixed_leg_pv(swap, r), float_leg_npv)?;
        let fair_spread = solve_fair(|s| self.float_leg_pv(swap, s), fixed_leg_npv)?;

        let fixed_annuity = self.fixed_leg_pv(swap, 1.0)? - self.fixed_leg_pv(swap, 0.0)?;
        let float_flat = self.float_leg_pv(swap, 0.0)?;
        let float_annuity = self.float_leg_pv(swap, 1.0)? - float_flat;

        Ok(SwapResults {
            notional: swap.notional,
            fixed_rate: swap.fixed_rate,
            side: swap.side,
            npv,
            fair_rate,
            fair_spread,
            fixed_leg_npv,
            float_leg_npv,
            fixed_leg_bps: fixed_annuity * 1e-4,
            float_leg_bps: float_annuity * 1e-4,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fairval_curves::discount::DiscountCurve;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_curve(reference: Date, rate: f64) -> DiscountCurve {
        let pillars: Vec<(Date, f64)> = [0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]
            .iter()
            .map(|t: &f64| {
                (
                    reference.add_days((t * 365.0).round() as i64),
                    (-rate * t).exp(),
                )
            })
            .collect();
        DiscountCurve::from_pillars(reference, &pillars).unwrap()
    }

    fn sample_swap(fixed_rate: f64) -> VanillaSwap {
        VanillaSwap::builder(date(2025, 1, 17), date(2030, 1, 17))
            .notional(10_000_000.0)
            .fixed_rate(fixed_rate)
            .build()
            .unwrap()
    }

    #[test]
    fn test_fair_rate_zeroes_npv() {
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let pricer = SwapPricer::new(&ctx);

        let results = pricer.price(&sample_swap(0.028)).unwrap();
        let repriced = pricer.price(&sample_swap(results.fair_rate)).unwrap();
        assert!(
            repriced.npv.abs() < 1e-6 * 10_000_000.0,
            "npv = {}",
            repriced.npv
        );
    }

    #[test]
    fn test_payer_receiver_mirror() {
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let pricer = SwapPricer::new(&ctx);

        let payer = pricer.price(&sample_swap(0.028)).unwrap();
        let receiver = VanillaSwap::builder(date(2025, 1, 17), date(2030, 1, 17))
            .notional(10_000_000.0)
            .fixed_rate(0.028)
            .side(SwapSide::Receiver)
            .build()
            .unwrap();
        let receiver = pricer.price(&receiver).unwrap();
        assert_relative_eq!(payer.npv, -receiver.npv, epsilon = 1e-9);
    }

    #[test]
    fn test_fair_rate_near_curve_level() {
        // On a flat continuous 3% curve the 5y par rate sits near 3%.
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let pricer = SwapPricer::new(&ctx);

        let results = pricer.price(&sample_swap(0.03)).unwrap();
        assert!(
            (results.fair_rate - 0.03).abs() < 0.002,
            "fair rate = {}",
            results.fair_rate
        );
    }

    #[test]
    fn test_fair_spread_consistency() {
        // Plugging the fair spread back into the float leg matches the
        // fixed leg PV.
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let pricer = SwapPricer::new(&ctx);

        let swap = sample_swap(0.035);
        let results = pricer.price(&swap).unwrap();
        let leg = legs::floating_coupons(
            &curve,
            &swap.float_periods,
            swap.notional,
            results.fair_spread,
            swap.float_day_count,
        )
        .unwrap();
        let pv = legs::present_value(&curve, &leg).unwrap();
        assert_relative_eq!(pv, results.fixed_leg_npv, epsilon = 1e-6);
    }

    #[test]
    fn test_leg_bps_positive_and_ordered() {
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let pricer = SwapPricer::new(&ctx);

        let results = pricer.price(&sample_swap(0.03)).unwrap();
        assert!(results.fixed_leg_bps > 0.0);
        assert!(results.float_leg_bps > 0.0);
        // 5y annuity on 10mm is roughly 4.6k per bp.
        assert!(results.fixed_leg_bps > 3_000.0 && results.fixed_leg_bps < 6_000.0);
    }

    #[test]
    fn test_non_positive_notional_rejected() {
        let result = VanillaSwap::builder(date(2025, 1, 17), date(2030, 1, 17))
            .notional(0.0)
            .build();
        assert!(matches!(result, Err(PricerError::InvalidInput { .. })));
    }
}

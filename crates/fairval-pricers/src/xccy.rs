//! Cross-currency swap valuation.
//!
//! Each leg is projected and discounted on its own currency's curve;
//! the foreign leg PV is converted at spot FX into domestic terms
//! before netting. Notionals are exchanged at start and maturity by
//! default, as on a standard mark-to-market-free cross-currency swap.
//!
//! The holder pays the domestic leg and receives the foreign leg, so
//! `npv_domestic = foreign PV in domestic - domestic PV`.

use serde::{Deserialize, Serialize};

use fairval_core::daycounts::DayCountConvention;
use fairval_core::schedule::Schedule;
use fairval_core::types::{CashflowLeg, Currency, Date, Frequency};
use fairval_curves::discount::DiscountCurve;
use fairval_curves::traits::Curve;

use crate::context::XccyContext;
use crate::error::{PricerError, PricerResult};
use crate::fairvalue::solve_fair;
use crate::legs;

/// Coupon type of one swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LegKind {
    /// Fixed coupons at an annual rate.
    Fixed {
        /// Annual coupon rate as a decimal.
        rate: f64,
    },
    /// Floating coupons at forward plus spread.
    Floating {
        /// Spread over the forward as a decimal.
        spread: f64,
    },
}

/// Structural variant of a cross-currency swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XccyVariant {
    /// Both legs fixed.
    FixedFixed,
    /// One fixed leg against one floating leg.
    FixedFloating,
    /// Both legs floating, spread on one side.
    FloatFloat,
}

/// One leg of a cross-currency swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XccyLeg {
    currency: Currency,
    notional: f64,
    periods: Vec<(Date, Date)>,
    day_count: DayCountConvention,
    kind: LegKind,
}

impl XccyLeg {
    /// Creates a fixed leg with coupons generated backward from `end`.
    pub fn fixed(
        currency: Currency,
        notional: f64,
        start: Date,
        end: Date,
        frequency: Frequency,
        day_count: DayCountConvention,
        rate: f64,
    ) -> PricerResult<Self> {
        Self::build(currency, notional, start, end, frequency, day_count, LegKind::Fixed { rate })
    }

    /// Creates a floating leg paying forward + spread.
    pub fn floating(
        currency: Currency,
        notional: f64,
        start: Date,
        end: Date,
        frequency: Frequency,
        day_count: DayCountConvention,
        spread: f64,
    ) -> PricerResult<Self> {
        Self::build(
            currency,
            notional,
            start,
            end,
            frequency,
            day_count,
            LegKind::Floating { spread },
        )
    }

    fn build(
        currency: Currency,
        notional: f64,
        start: Date,
        end: Date,
        frequency: Frequency,
        day_count: DayCountConvention,
        kind: LegKind,
    ) -> PricerResult<Self> {
        if !(notional > 0.0) {
            return Err(PricerError::invalid_input(format!(
                "leg notional must be positive, got {notional}"
            )));
        }
        let schedule = Schedule::builder(start, end).frequency(frequency).build()?;
        Ok(Self {
            currency,
            notional,
            periods: schedule.periods(),
            day_count,
            kind,
        })
    }

    /// Leg currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Leg notional in leg currency.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Coupon type and parameter.
    pub fn kind(&self) -> LegKind {
        self.kind
    }

    /// First accrual start date.
    pub fn start_date(&self) -> Date {
        self.periods[0].0
    }

    /// Final (adjusted) payment date.
    pub fn maturity(&self) -> Date {
        self.periods[self.periods.len() - 1].1
    }

    /// Leg cash flows in leg currency, coupons from `kind` unless a
    /// parameter override is supplied for fair value solving.
    fn cash_flows(
        &self,
        curve: &DiscountCurve,
        parameter: Option<f64>,
        exchange_notionals: bool,
    ) -> PricerResult<CashflowLeg> {
        let coupons = match self.kind {
            LegKind::Fixed { rate } => legs::fixed_coupons(
                &self.periods,
                self.notional,
                parameter.unwrap_or(rate),
                self.day_count,
            ),
            LegKind::Floating { spread } => legs::floating_coupons(
                curve,
                &self.periods,
                self.notional,
                parameter.unwrap_or(spread),
                self.day_count,
            )?,
        };
        if exchange_notionals {
            Ok(legs::with_notional_exchange(
                coupons,
                self.notional,
                self.start_date(),
                self.maturity(),
            ))
        } else {
            Ok(coupons)
        }
    }
}

/// A two-leg cross-currency swap: pay domestic, receive foreign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossCurrencySwap {
    domestic: XccyLeg,
    foreign: XccyLeg,
    exchange_notionals: bool,
}

impl CrossCurrencySwap {
    /// Pairs a pay (domestic) and receive (foreign) leg. The legs must
    /// be in different currencies.
    pub fn new(domestic: XccyLeg, foreign: XccyLeg) -> PricerResult<Self> {
        if domestic.currency == foreign.currency {
            return Err(PricerError::invalid_input(format!(
                "cross-currency legs share the currency {}",
                domestic.currency
            )));
        }
        Ok(Self {
            domestic,
            foreign,
            exchange_notionals: true,
        })
    }

    /// Drops the initial and final notional exchanges.
    #[must_use]
    pub fn without_notional_exchange(mut self) -> Self {
        self.exchange_notionals = false;
        self
    }

    /// The pay leg.
    pub fn domestic_leg(&self) -> &XccyLeg {
        &self.domestic
    }

    /// The receive leg.
    pub fn foreign_leg(&self) -> &XccyLeg {
        &self.foreign
    }

    /// Structural variant implied by the two leg kinds.
    pub fn variant(&self) -> XccyVariant {
        match (self.domestic.kind, self.foreign.kind) {
            (LegKind::Fixed { .. }, LegKind::Fixed { .. }) => XccyVariant::FixedFixed,
            (LegKind::Floating { .. }, LegKind::Floating { .. }) => XccyVariant::FloatFloat,
            _ => XccyVariant::FixedFloating,
        }
    }
}

/// Which leg a fair value query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegSelector {
    /// The pay leg.
    Domestic,
    /// The receive leg.
    Foreign,
}

/// One discounted cash flow on a leg, for valuation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowDetail {
    /// Payment date.
    pub date: Date,
    /// Amount in leg currency.
    pub amount: f64,
    /// Discount factor applied, zero for flows at or before the
    /// evaluation date.
    pub discount_factor: f64,
    /// PV in leg currency.
    pub pv: f64,
}

/// Cross-currency valuation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XccyResults {
    /// Structural variant of the priced swap.
    pub variant: XccyVariant,
    /// Net value to the holder in domestic currency.
    pub npv_domestic: f64,
    /// The same value converted to foreign currency at spot.
    pub npv_foreign: f64,
    /// Pay leg PV in domestic currency.
    pub domestic_leg_pv: f64,
    /// Receive leg PV in foreign currency.
    pub foreign_leg_pv: f64,
    /// Receive leg PV converted at spot FX.
    pub foreign_leg_pv_domestic: f64,
    /// Per-flow detail on the pay leg.
    pub domestic_flows: Vec<FlowDetail>,
    /// Per-flow detail on the receive leg.
    pub foreign_flows: Vec<FlowDetail>,
}

/// Cross-currency swap pricing engine.
#[derive(Debug, Clone, Copy)]
pub struct XccyPricer<'a> {
    ctx: &'a XccyContext<'a>,
}

impl<'a> XccyPricer<'a> {
    /// Creates a pricer over the given two-currency context.
    #[must_use]
    pub fn new(ctx: &'a XccyContext<'a>) -> Self {
        Self { ctx }
    }

    fn leg_pv(
        &self,
        leg: &XccyLeg,
        curve: &DiscountCurve,
        parameter: Option<f64>,
        exchange_notionals: bool,
    ) -> PricerResult<f64> {
        let flows = leg.cash_flows(curve, parameter, exchange_notionals)?;
        legs::present_value(curve, &flows)
    }

    fn leg_detail(
        &self,
        leg: &XccyLeg,
        curve: &DiscountCurve,
        exchange_notionals: bool,
    ) -> PricerResult<Vec<FlowDetail>> {
        let reference = curve.reference_date();
        leg.cash_flows(curve, None, exchange_notionals)?
            .into_iter()
            .map(|cf| {
                let df = if cf.date <= reference {
                    0.0
                } else {
                    curve.discount(cf.date)?
                };
                Ok(FlowDetail {
                    date: cf.date,
                    amount: cf.amount,
                    discount_factor: df,
                    pv: cf.amount * df,
                })
            })
            .collect()
    }

    /// Full valuation with per-flow detail on both legs.
    pub fn price(&self, swap: &CrossCurrencySwap) -> PricerResult<XccyResults> {
        let domestic_curve = self.ctx.domestic_curve();
        let foreign_curve = self.ctx.foreign_curve();
        let exchange = swap.exchange_notionals;

        let domestic_leg_pv = self.leg_pv(&swap.domestic, domestic_curve, None, exchange)?;
        let foreign_leg_pv = self.leg_pv(&swap.foreign, foreign_curve, None, exchange)?;
        let foreign_leg_pv_domestic = foreign_leg_pv * self.ctx.spot_fx();
        let npv_domestic = foreign_leg_pv_domestic - domestic_leg_pv;

        Ok(XccyResults {
            variant: swap.variant(),
            npv_domestic,
            npv_foreign: npv_domestic / self.ctx.spot_fx(),
            domestic_leg_pv,
            foreign_leg_pv,
            foreign_leg_pv_domestic,
            domestic_flows: self.leg_detail(&swap.domestic, domestic_curve, exchange)?,
            foreign_flows: self.leg_detail(&swap.foreign, foreign_curve, exchange)?,
        })
    }

    /// Fixed rate on the selected leg that zeroes the domestic NPV.
    pub fn fair_rate(&self, swap: &CrossCurrencySwap, leg: LegSelector) -> PricerResult<f64> {
        let (target_leg, kind) = self.selected(swap, leg);
        if !matches!(kind, LegKind::Fixed { .. }) {
            return Err(PricerError::invalid_input(
                "fair rate requested on a floating leg",
            ));
        }
        self.solve_leg_parameter(swap, leg, target_leg)
    }

    /// Floating spread on the selected leg that zeroes the domestic NPV.
    pub fn fair_spread(&self, swap: &CrossCurrencySwap, leg: LegSelector) -> PricerResult<f64> {
        let (target_leg, kind) = self.selected(swap, leg);
        if !matches!(kind, LegKind::Floating { .. }) {
            return Err(PricerError::invalid_input(
                "fair spread requested on a fixed leg",
            ));
        }
        self.solve_leg_parameter(swap, leg, target_leg)
    }

    fn selected<'s>(
        &self,
        swap: &'s CrossCurrencySwap,
        leg: LegSelector,
    ) -> (&'s XccyLeg, LegKind) {
        match leg {
            LegSelector::Domestic => (&swap.domestic, swap.domestic.kind),
            LegSelector::Foreign => (&swap.foreign, swap.foreign.kind),
        }
    }

    /// Solves the coupon parameter of one leg so the swap's domestic
    /// NPV is zero. Leg PV is affine in the parameter, so the solver
    /// recovers the annuity by direct summation of the leg flows.
    fn solve_leg_parameter(
        &self,
        swap: &CrossCurrencySwap,
        leg: LegSelector,
        target_leg: &XccyLeg,
    ) -> PricerResult<f64> {
        let exchange = swap.exchange_notionals;
        let fx = self.ctx.spot_fx();
        match leg {
            LegSelector::Domestic => {
                let other =
                    self.leg_pv(&swap.foreign, self.ctx.foreign_curve(), None, exchange)? * fx;
                solve_fair(
                    |x| self.leg_pv(target_leg, self.ctx.domestic_curve(), Some(x), exchange),
                    other,
                )
            }
            LegSelector::Foreign => {
                let other = self.leg_pv(&swap.domestic, self.ctx.domestic_curve(), None, exchange)?;
                solve_fair(
                    |x| {
                        Ok(self.leg_pv(target_leg, self.ctx.foreign_curve(), Some(x), exchange)?
                            * fx)
                    },
                    other,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

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

    fn fixed_fixed_swap(domestic_rate: f64, foreign_rate: f64) -> CrossCurrencySwap {
        let start = date(2025, 1, 17);
        let end = date(2030, 1, 17);
        let domestic = XccyLeg::fixed(
            Currency::EUR,
            10_000_000.0,
            start,
            end,
            Frequency::Annual,
            DayCountConvention::Thirty360,
            domestic_rate,
        )
        .unwrap();
        let foreign = XccyLeg::fixed(
            Currency::USD,
            10_850_000.0,
            start,
            end,
            Frequency::Annual,
            DayCountConvention::Thirty360,
            foreign_rate,
        )
        .unwrap();
        CrossCurrencySwap::new(domestic, foreign).unwrap()
    }

    #[test]
    fn test_same_currency_legs_rejected() {
        let start = date(2025, 1, 17);
        let end = date(2030, 1, 17);
        let a = XccyLeg::fixed(
            Currency::EUR,
            1.0e6,
            start,
            end,
            Frequency::Annual,
            DayCountConvention::Thirty360,
            0.03,
        )
        .unwrap();
        let b = a.clone();
        assert!(matches!(
            CrossCurrencySwap::new(a, b),
            Err(PricerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_variant_classification() {
        let swap = fixed_fixed_swap(0.03, 0.045);
        assert_eq!(swap.variant(), XccyVariant::FixedFixed);

        let start = date(2025, 1, 17);
        let end = date(2030, 1, 17);
        let float_leg = XccyLeg::floating(
            Currency::USD,
            10_850_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let mixed =
            CrossCurrencySwap::new(swap.domestic_leg().clone(), float_leg.clone()).unwrap();
        assert_eq!(mixed.variant(), XccyVariant::FixedFloating);

        let domestic_float = XccyLeg::floating(
            Currency::EUR,
            10_000_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let ff = CrossCurrencySwap::new(domestic_float, float_leg).unwrap();
        assert_eq!(ff.variant(), XccyVariant::FloatFloat);
    }

    #[test]
    fn test_fair_domestic_rate_zeroes_npv() {
        let reference = date(2025, 1, 15);
        let eur = flat_curve(reference, 0.025);
        let usd = flat_curve(reference, 0.045);
        let ctx = XccyContext::new(reference, &eur, &usd, 1.0850).unwrap();
        let pricer = XccyPricer::new(&ctx);

        let swap = fixed_fixed_swap(0.03, 0.045);
        let fair = pricer.fair_rate(&swap, LegSelector::Domestic).unwrap();

        let repriced = fixed_fixed_swap(fair, 0.045);
        let results = pricer.price(&repriced).unwrap();
        assert!(
            results.npv_domestic.abs() < 1e-6 * 10_000_000.0,
            "npv = {}",
            results.npv_domestic
        );
    }

    #[test]
    fn test_float_float_fair_spread() {
        let reference = date(2025, 1, 15);
        let eur = flat_curve(reference, 0.025);
        let usd = flat_curve(reference, 0.045);
        let ctx = XccyContext::new(reference, &eur, &usd, 1.0850).unwrap();
        let pricer = XccyPricer::new(&ctx);

        let start = date(2025, 1, 17);
        let end = date(2030, 1, 17);
        let domestic = XccyLeg::floating(
            Currency::EUR,
            10_000_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let foreign = XccyLeg::floating(
            Currency::USD,
            10_850_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let swap = CrossCurrencySwap::new(domestic, foreign).unwrap();

        let basis = pricer.fair_spread(&swap, LegSelector::Domestic).unwrap();

        let repriced_domestic = XccyLeg::floating(
            Currency::EUR,
            10_000_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            basis,
        )
        .unwrap();
        let repriced = CrossCurrencySwap::new(
            repriced_domestic,
            swap.foreign_leg().clone(),
        )
        .unwrap();
        let results = pricer.price(&repriced).unwrap();
        assert!(
            results.npv_domestic.abs() < 1e-6 * 10_000_000.0,
            "npv = {}",
            results.npv_domestic
        );
    }

    #[test]
    fn test_fair_rate_on_floating_leg_rejected() {
        let reference = date(2025, 1, 15);
        let eur = flat_curve(reference, 0.025);
        let usd = flat_curve(reference, 0.045);
        let ctx = XccyContext::new(reference, &eur, &usd, 1.0850).unwrap();
        let pricer = XccyPricer::new(&ctx);

        let start = date(2025, 1, 17);
        let end = date(2030, 1, 17);
        let domestic = XccyLeg::floating(
            Currency::EUR,
            10_000_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let foreign = XccyLeg::fixed(
            Currency::USD,
            10_850_000.0,
            start,
            end,
            Frequency::Annual,
            DayCountConvention::Thirty360,
            0.045,
        )
        .unwrap();
        let swap = CrossCurrencySwap::new(domestic, foreign).unwrap();
        assert!(pricer.fair_rate(&swap, LegSelector::Domestic).is_err());
        assert!(pricer.fair_spread(&swap, LegSelector::Foreign).is_err());
    }

    #[test]
    fn test_matched_par_floaters_value_near_zero() {
        // Spreadless floating legs with notional exchange are each worth
        // par on their own curve, so at FX-consistent notionals the swap
        // is worth zero.
        let reference = date(2025, 1, 15);
        let eur = flat_curve(reference, 0.025);
        let usd = flat_curve(reference, 0.045);
        let fx = 1.0850;
        let ctx = XccyContext::new(reference, &eur, &usd, fx).unwrap();
        let pricer = XccyPricer::new(&ctx);

        let start = date(2025, 1, 17);
        let end = date(2030, 1, 17);
        let domestic = XccyLeg::floating(
            Currency::EUR,
            10_000_000.0,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let foreign = XccyLeg::floating(
            Currency::USD,
            10_000_000.0 * fx,
            start,
            end,
            Frequency::SemiAnnual,
            DayCountConvention::Act360,
            0.0,
        )
        .unwrap();
        let swap = CrossCurrencySwap::new(domestic, foreign).unwrap();
        let results = pricer.price(&swap).unwrap();

        // Each leg telescopes to exactly zero: the coupons are worth
        // DF(start) - DF(end) per unit, offset by the two exchanges.
        assert!(
            results.npv_domestic.abs() < 1e-6,
            "npv = {}",
            results.npv_domestic
        );
    }

    #[test]
    fn test_flow_detail_sums_to_leg_pv() {
        let reference = date(2025, 1, 15);
        let eur = flat_curve(reference, 0.025);
        let usd = flat_curve(reference, 0.045);
        let ctx = XccyContext::new(reference, &eur, &usd, 1.0850).unwrap();
        let pricer = XccyPricer::new(&ctx);

        let swap = fixed_fixed_swap(0.03, 0.045);
        let results = pricer.price(&swap).unwrap();
        let summed: f64 = results.domestic_flows.iter().map(|f| f.pv).sum();
        assert_relative_eq!(summed, results.domestic_leg_pv, epsilon = 1e-6);
    }
}

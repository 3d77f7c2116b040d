//! Fixed rate bond instrument and curve/yield pricing.
//!
//! Prices are quoted per 100 face value. The pricer discounts every
//! remaining cash flow on the context curve and rebases to the
//! settlement date, so a clean price is directly comparable to a market
//! quote. Yield measures are solved from a market clean price with
//! Newton's method using the analytic price derivative.

use log::debug;
use serde::{Deserialize, Serialize};

use fairval_core::calendars::{Calendar, WeekendCalendar};
use fairval_core::daycounts::DayCountConvention;
use fairval_core::schedule::Schedule;
use fairval_core::types::{CashFlow, CashFlowKind, CashflowLeg, Currency, Date, Frequency};
use fairval_math::solvers::{newton_raphson, SolverConfig};

use crate::context::ValuationContext;
use crate::error::{PricerError, PricerResult};
use crate::legs;

/// A plain fixed rate bullet bond.
///
/// Coupons accrue on the unadjusted schedule periods under the bond's
/// day count; the redemption amount is paid with the final coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedRateBond {
    coupon_rate: f64,
    schedule: Schedule,
    frequency: Frequency,
    day_count: DayCountConvention,
    currency: Currency,
    face_value: f64,
    redemption: f64,
    settlement_days: i32,
}

impl FixedRateBond {
    /// Creates a builder for a bond running from `issue` to `maturity`
    /// with the given annual coupon rate as a decimal (0.0325 for 3.25%).
    #[must_use]
    pub fn builder(issue: Date, maturity: Date, coupon_rate: f64) -> FixedRateBondBuilder<'static> {
        FixedRateBondBuilder {
            issue,
            maturity,
            coupon_rate,
            frequency: Frequency::Annual,
            day_count: DayCountConvention::Thirty360,
            currency: Currency::default(),
            face_value: 100.0,
            redemption: 100.0,
            settlement_days: 2,
            calendar: &WeekendCalendar,
        }
    }

    /// Annual coupon rate as a decimal.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupon payment frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Accrual day count convention.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Denomination currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Face value in currency units.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Standard settlement lag in business days.
    pub fn settlement_days(&self) -> i32 {
        self.settlement_days
    }

    /// First schedule date.
    pub fn issue_date(&self) -> Date {
        self.schedule.first()
    }

    /// Final (adjusted) schedule date.
    pub fn maturity(&self) -> Date {
        self.schedule.last()
    }

    /// The coupon schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Remaining cash flows strictly after `settlement`, in face value units.
    pub fn cash_flows(&self, settlement: Date) -> CashflowLeg {
        let periods = self.schedule.periods();
        let mut flows: CashflowLeg = Vec::with_capacity(periods.len() + 1);
        for &(start, end) in &periods {
            if end <= settlement {
                continue;
            }
            let tau = self.day_count.year_fraction(start, end);
            flows.push(CashFlow::coupon(
                end,
                self.face_value * self.coupon_rate * tau,
                start,
                end,
            ));
        }
        flows.push(CashFlow::simple(
            self.maturity(),
            self.face_value * self.redemption / 100.0,
            CashFlowKind::Principal,
        ));
        flows
    }

    /// Accrued interest at `settlement` in face value units.
    ///
    /// Zero outside the bond's life and on coupon dates.
    pub fn accrued_interest(&self, settlement: Date) -> f64 {
        for &(start, end) in &self.schedule.periods() {
            if settlement > start && settlement < end {
                let tau = self.day_count.year_fraction(start, settlement);
                return self.face_value * self.coupon_rate * tau;
            }
        }
        0.0
    }

    /// Accrued interest expressed per 100 face, price units.
    pub fn accrued_per_100(&self, settlement: Date) -> f64 {
        self.accrued_interest(settlement) / self.face_value * 100.0
    }

    fn validate_settlement(&self, settlement: Date) -> PricerResult<()> {
        if settlement >= self.maturity() {
            return Err(PricerError::invalid_settlement(settlement, self.maturity()));
        }
        Ok(())
    }
}

/// Builder for [`FixedRateBond`].
#[derive(Clone, Copy)]
pub struct FixedRateBondBuilder<'a> {
    issue: Date,
    maturity: Date,
    coupon_rate: f64,
    frequency: Frequency,
    day_count: DayCountConvention,
    currency: Currency,
    face_value: f64,
    redemption: f64,
    settlement_days: i32,
    calendar: &'a dyn Calendar,
}

impl<'a> FixedRateBondBuilder<'a> {
    /// Sets the coupon frequency (default annual).
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the accrual day count (default 30/360).
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the denomination currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the face value (default 100).
    #[must_use]
    pub fn face_value(mut self, face_value: f64) -> Self {
        self.face_value = face_value;
        self
    }

    /// Sets the redemption amount per 100 face (default 100).
    #[must_use]
    pub fn redemption(mut self, redemption: f64) -> Self {
        self.redemption = redemption;
        self
    }

    /// Sets the settlement lag in business days (default T+2).
    #[must_use]
    pub fn settlement_days(mut self, days: i32) -> Self {
        self.settlement_days = days;
        self
    }

    /// Sets the calendar used to roll coupon dates (default weekends only).
    #[must_use]
    pub fn calendar<'b>(self, calendar: &'b dyn Calendar) -> FixedRateBondBuilder<'b> {
        FixedRateBondBuilder {
            issue: self.issue,
            maturity: self.maturity,
            coupon_rate: self.coupon_rate,
            frequency: self.frequency,
            day_count: self.day_count,
            currency: self.currency,
            face_value: self.face_value,
            redemption: self.redemption,
            settlement_days: self.settlement_days,
            calendar,
        }
    }

    /// Builds the bond, generating its coupon schedule backward from
    /// maturity and rolling dates on the builder's calendar.
    pub fn build(self) -> PricerResult<FixedRateBond> {
        if !(self.coupon_rate >= 0.0) {
            return Err(PricerError::invalid_input(format!(
                "coupon rate cannot be negative or NaN, got {}",
                self.coupon_rate
            )));
        }
        if !(self.face_value > 0.0) {
            return Err(PricerError::invalid_input(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        let schedule = Schedule::builder(self.issue, self.maturity)
            .frequency(self.frequency)
            .calendar(self.calendar)
            .build()?;
        Ok(FixedRateBond {
            coupon_rate: self.coupon_rate,
            schedule,
            frequency: self.frequency,
            day_count: self.day_count,
            currency: self.currency,
            face_value: self.face_value,
            redemption: self.redemption,
            settlement_days: self.settlement_days,
        })
    }
}

/// Yield and risk measures computed from one market clean price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondAnalytics {
    /// Market clean price the measures were derived from.
    pub clean_price: f64,
    /// Clean price plus accrued interest.
    pub dirty_price: f64,
    /// Accrued interest per 100 face.
    pub accrued: f64,
    /// Yield to maturity compounded at the coupon frequency.
    pub ytm: f64,
    /// PV-weighted average time to cash flow, in years.
    pub macaulay_duration: f64,
    /// Macaulay duration scaled by the periodic yield factor.
    pub modified_duration: f64,
    /// Second-order price sensitivity per unit yield squared.
    pub convexity: f64,
    /// Price change in price points for a one basis point yield drop.
    pub bpv: f64,
}

/// Bond pricing engine over a valuation context.
#[derive(Debug, Clone, Copy)]
pub struct BondPricer<'a> {
    ctx: &'a ValuationContext<'a>,
    config: SolverConfig,
}

impl<'a> BondPricer<'a> {
    /// Creates a pricer with default solver settings.
    #[must_use]
    pub fn new(ctx: &'a ValuationContext<'a>) -> Self {
        Self {
            ctx,
            config: SolverConfig::default(),
        }
    }

    /// Overrides the yield solver configuration.
    #[must_use]
    pub fn with_solver(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Dirty price off the discount curve, per 100 face at settlement.
    pub fn dirty_price(&self, bond: &FixedRateBond, settlement: Date) -> PricerResult<f64> {
        bond.validate_settlement(settlement)?;
        let flows = bond.cash_flows(settlement);
        if flows.is_empty() {
            return Err(PricerError::empty_schedule(
                "no cash flows remain after settlement",
            ));
        }
        let pv = legs::present_value_at(self.ctx.curve(), &flows, settlement)?;
        Ok(pv / bond.face_value() * 100.0)
    }

    /// Clean price off the discount curve.
    pub fn clean_price(&self, bond: &FixedRateBond, settlement: Date) -> PricerResult<f64> {
        Ok(self.dirty_price(bond, settlement)? - bond.accrued_per_100(settlement))
    }

    /// Dirty price for a given yield compounded at the coupon frequency.
    pub fn dirty_price_for_yield(
        &self,
        bond: &FixedRateBond,
        ytm: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        bond.validate_settlement(settlement)?;
        let m = compounding_periods(bond.frequency());
        let mut price = 0.0;
        for cf in bond.cash_flows(settlement) {
            let t = bond.day_count().year_fraction(settlement, cf.date);
            price += cf.amount * (1.0 + ytm / m).powf(-m * t);
        }
        Ok(price / bond.face_value() * 100.0)
    }

    /// Clean price for a given yield.
    pub fn clean_price_for_yield(
        &self,
        bond: &FixedRateBond,
        ytm: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        Ok(self.dirty_price_for_yield(bond, ytm, settlement)? - bond.accrued_per_100(settlement))
    }

    /// Yield to maturity from a market clean price.
    ///
    /// Newton iteration with the analytic dP/dy; the initial guess is
    /// the coupon rate.
    pub fn yield_to_maturity(
        &self,
        bond: &FixedRateBond,
        clean_price: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        bond.validate_settlement(settlement)?;
        let target_dirty = clean_price + bond.accrued_per_100(settlement);
        let flows = bond.cash_flows(settlement);
        if flows.is_empty() {
            return Err(PricerError::empty_schedule(
                "no cash flows remain after settlement",
            ));
        }
        let m = compounding_periods(bond.frequency());
        let face = bond.face_value();
        let day_count = bond.day_count();

        let price = |y: f64| -> f64 {
            flows
                .iter()
                .map(|cf| {
                    let t = day_count.year_fraction(settlement, cf.date);
                    cf.amount * (1.0 + y / m).powf(-m * t)
                })
                .sum::<f64>()
                / face
                * 100.0
        };
        let derivative = |y: f64| -> f64 {
            flows
                .iter()
                .map(|cf| {
                    let t = day_count.year_fraction(settlement, cf.date);
                    -cf.amount * t * (1.0 + y / m).powf(-m * t - 1.0)
                })
                .sum::<f64>()
                / face
                * 100.0
        };

        let guess = if bond.coupon_rate() > 0.0 {
            bond.coupon_rate()
        } else {
            0.05
        };
        let result = newton_raphson(|y| price(y) - target_dirty, derivative, guess, &self.config)
            .map_err(|e| PricerError::solver_failed("yield to maturity", e))?;
        debug!(
            "ytm solved to {:.6} in {} iterations",
            result.root, result.iterations
        );
        Ok(result.root)
    }

    /// Macaulay duration at the given yield, in years.
    pub fn macaulay_duration(
        &self,
        bond: &FixedRateBond,
        ytm: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        bond.validate_settlement(settlement)?;
        let m = compounding_periods(bond.frequency());
        let mut weighted = 0.0;
        let mut total = 0.0;
        for cf in bond.cash_flows(settlement) {
            let t = bond.day_count().year_fraction(settlement, cf.date);
            let pv = cf.amount * (1.0 + ytm / m).powf(-m * t);
            weighted += t * pv;
            total += pv;
        }
        if total <= 0.0 {
            return Err(PricerError::invalid_input(
                "bond has non-positive dirty value at this yield",
            ));
        }
        Ok(weighted / total)
    }

    /// Modified duration: Macaulay scaled by the periodic yield factor.
    pub fn modified_duration(
        &self,
        bond: &FixedRateBond,
        ytm: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        let m = compounding_periods(bond.frequency());
        Ok(self.macaulay_duration(bond, ytm, settlement)? / (1.0 + ytm / m))
    }

    /// Convexity by central difference on the dirty price, per unit yield squared.
    pub fn convexity(
        &self,
        bond: &FixedRateBond,
        ytm: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        let h = 1e-4;
        let up = self.dirty_price_for_yield(bond, ytm + h, settlement)?;
        let mid = self.dirty_price_for_yield(bond, ytm, settlement)?;
        let down = self.dirty_price_for_yield(bond, ytm - h, settlement)?;
        if mid <= 0.0 {
            return Err(PricerError::invalid_input(
                "bond has non-positive dirty value at this yield",
            ));
        }
        Ok((up - 2.0 * mid + down) / (mid * h * h))
    }

    /// Basis point value: price gain in points for a 1bp yield drop.
    pub fn bpv(&self, bond: &FixedRateBond, ytm: f64, settlement: Date) -> PricerResult<f64> {
        let h = 1e-4;
        let up = self.dirty_price_for_yield(bond, ytm + h, settlement)?;
        let down = self.dirty_price_for_yield(bond, ytm - h, settlement)?;
        Ok((down - up) / 2.0)
    }

    /// All yield measures from one market clean price.
    pub fn analytics(
        &self,
        bond: &FixedRateBond,
        clean_price: f64,
        settlement: Date,
    ) -> PricerResult<BondAnalytics> {
        let accrued = bond.accrued_per_100(settlement);
        let ytm = self.yield_to_maturity(bond, clean_price, settlement)?;
        Ok(BondAnalytics {
            clean_price,
            dirty_price: clean_price + accrued,
            accrued,
            ytm,
            macaulay_duration: self.macaulay_duration(bond, ytm, settlement)?,
            modified_duration: self.modified_duration(bond, ytm, settlement)?,
            convexity: self.convexity(bond, ytm, settlement)?,
            bpv: self.bpv(bond, ytm, settlement)?,
        })
    }
}

fn compounding_periods(frequency: Frequency) -> f64 {
    let m = frequency.periods_per_year();
    if m == 0 {
        1.0
    } else {
        f64::from(m)
    }
}

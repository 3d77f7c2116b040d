//! Par-par asset swap and Z-spread engine.
//!
//! The asset-swap spread is derived two independent ways and both are
//! reported:
//!
//! * **structural**: build the actual package legs (bond flows in,
//!   floating flows plus terminal notional out, upfront at settlement)
//!   and root-find the spread that zeroes the package NPV;
//! * **replicated**: the closed form `s = (PV_bond - dirty) / (100 A)`
//!   with `A` the floating-side annuity.
//!
//! With the floating leg modelled as a par floater the two derivations
//! agree to numerical tolerance, which makes the pair a useful internal
//! consistency check. The Z-spread is a separate measure: the constant
//! continuous shift of the discount curve that reprices the bond to its
//! market dirty price.

use log::debug;
use serde::{Deserialize, Serialize};

use fairval_core::daycounts::DayCountConvention;
use fairval_core::schedule::Schedule;
use fairval_core::types::{Date, Frequency, Spread, SpreadType};
use fairval_curves::traits::Curve;
use fairval_math::solvers::{brent, SolverConfig};

use crate::bond::FixedRateBond;
use crate::context::ValuationContext;
use crate::error::{PricerError, PricerResult};
use crate::legs;

/// Search bracket for spread root-finding, in decimal rate.
const SPREAD_BRACKET: (f64, f64) = (-0.05, 0.20);

/// Asset-swap valuation output, spreads quoted in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetSwapResult {
    /// Market dirty price per 100 face.
    pub dirty_price: f64,
    /// Upfront payment per 100 notional, `100 - dirty`.
    pub upfront: f64,
    /// Floating-side annuity per unit notional at settlement.
    pub annuity: f64,
    /// Par-par spread from the cash flow root-find.
    pub structural: Spread,
    /// Par-par spread from the annuity closed form.
    pub replicated: Spread,
    /// Constant continuous curve shift repricing the bond.
    pub zspread: Spread,
}

/// Par-par asset swap engine over a valuation context.
#[derive(Debug, Clone, Copy)]
pub struct AssetSwapEngine<'a> {
    ctx: &'a ValuationContext<'a>,
    float_frequency: Frequency,
    float_day_count: DayCountConvention,
    config: SolverConfig,
}

impl<'a> AssetSwapEngine<'a> {
    /// Creates an engine with semi-annual ACT/360 floating conventions.
    #[must_use]
    pub fn new(ctx: &'a ValuationContext<'a>) -> Self {
        Self {
            ctx,
            float_frequency: Frequency::SemiAnnual,
            float_day_count: DayCountConvention::Act360,
            config: SolverConfig::default(),
        }
    }

    /// Overrides the floating leg frequency.
    #[must_use]
    pub fn with_float_frequency(mut self, frequency: Frequency) -> Self {
        self.float_frequency = frequency;
        self
    }

    /// Overrides the floating leg day count.
    #[must_use]
    pub fn with_float_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.float_day_count = day_count;
        self
    }

    /// Overrides the spread solver configuration.
    #[must_use]
    pub fn with_solver(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Floating-side schedule from settlement out to bond maturity.
    fn float_periods(
        &self,
        bond: &FixedRateBond,
        settlement: Date,
    ) -> PricerResult<Vec<(Date, Date)>> {
        let schedule = Schedule::builder(settlement, bond.maturity())
            .frequency(self.float_frequency)
            .build()?;
        Ok(schedule.periods())
    }

    /// PV of the bond's remaining flows per 100 face, at settlement.
    fn bond_pv(&self, bond: &FixedRateBond, settlement: Date) -> PricerResult<f64> {
        let flows = bond.cash_flows(settlement);
        if flows.is_empty() {
            return Err(PricerError::empty_schedule(
                "no bond cash flows remain after settlement",
            ));
        }
        let pv = legs::present_value_at(self.ctx.curve(), &flows, settlement)?;
        Ok(pv / bond.face_value() * 100.0)
    }

    /// Floating-side annuity per unit notional: `sum tau_i DF(end_i) / DF(settle)`.
    fn float_annuity(&self, periods: &[(Date, Date)], settlement: Date) -> PricerResult<f64> {
        let curve = self.ctx.curve();
        let df_settle = curve.discount(settlement)?;
        let mut annuity = 0.0;
        for &(start, end) in periods {
            let tau = self.float_day_count.year_fraction(start, end);
            annuity += tau * curve.discount(end)?;
        }
        Ok(annuity / df_settle)
    }

    /// Replicated par-par spread from the closed-form annuity identity.
    pub fn replicated_spread(
        &self,
        bond: &FixedRateBond,
        clean_price: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        self.validate(bond, settlement)?;
        let dirty = clean_price + bond.accrued_per_100(settlement);
        let bond_pv = self.bond_pv(bond, settlement)?;
        let periods = self.float_periods(bond, settlement)?;
        let annuity = self.float_annuity(&periods, settlement)?;
        if annuity.abs() < crate::fairvalue::MIN_ANNUITY {
            return Err(PricerError::DegenerateAnnuity { annuity });
        }
        Ok((bond_pv - dirty) / (100.0 * annuity))
    }

    /// Structural par-par spread: root of the package NPV in the spread.
    ///
    /// The package receives the bond flows and the upfront, and pays a
    /// par floater: spread coupons on 100 notional plus the terminal
    /// notional repayment.
    pub fn structural_spread(
        &self,
        bond: &FixedRateBond,
        clean_price: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        self.validate(bond, settlement)?;
        let dirty = clean_price + bond.accrued_per_100(settlement);
        let upfront = 100.0 - dirty;
        let bond_pv = self.bond_pv(bond, settlement)?;
        let periods = self.float_periods(bond, settlement)?;
        let maturity = periods
            .last()
            .map(|&(_, end)| end)
            .ok_or_else(|| PricerError::empty_schedule("empty floating schedule"))?;
        let curve = self.ctx.curve();

        let package_npv = |spread: f64| -> PricerResult<f64> {
            let float_leg =
                legs::floating_coupons(curve, &periods, 100.0, spread, self.float_day_count)?;
            let float_leg = legs::with_final_notional(float_leg, 100.0, maturity);
            let float_pv = legs::present_value_at(curve, &float_leg, settlement)?;
            Ok(upfront + bond_pv - float_pv)
        };

        let (lo, hi) = SPREAD_BRACKET;
        let result = brent(
            |s| package_npv(s).unwrap_or(f64::NAN),
            lo,
            hi,
            &self.config,
        )
        .map_err(|e| PricerError::solver_failed("structural asset-swap spread", e))?;
        debug!(
            "structural spread solved to {:.4} bps in {} iterations",
            result.root * 10_000.0,
            result.iterations
        );
        Ok(result.root)
    }

    /// Constant continuous shift of the curve repricing the bond to its
    /// market dirty price.
    pub fn zspread(
        &self,
        bond: &FixedRateBond,
        clean_price: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        self.validate(bond, settlement)?;
        let target_dirty = clean_price + bond.accrued_per_100(settlement);
        let (lo, hi) = SPREAD_BRACKET;
        let result = brent(
            |z| {
                self.dirty_price_with_zspread(bond, z, settlement)
                    .unwrap_or(f64::NAN)
                    - target_dirty
            },
            lo,
            hi,
            &self.config,
        )
        .map_err(|e| PricerError::solver_failed("z-spread", e))?;
        Ok(result.root)
    }

    /// Dirty price implied by shifting the curve by a continuous spread.
    pub fn dirty_price_with_zspread(
        &self,
        bond: &FixedRateBond,
        zspread: f64,
        settlement: Date,
    ) -> PricerResult<f64> {
        self.validate(bond, settlement)?;
        let curve = self.ctx.curve();
        let t_settle = curve.time_from_reference(settlement);
        let df_settle = curve.discount(settlement)? * (-zspread * t_settle).exp();
        let mut pv = 0.0;
        for cf in bond.cash_flows(settlement) {
            if cf.date <= settlement {
                continue;
            }
            let t = curve.time_from_reference(cf.date);
            pv += cf.amount * curve.discount(cf.date)? * (-zspread * t).exp();
        }
        Ok(pv / df_settle / bond.face_value() * 100.0)
    }

    /// Full asset-swap valuation: both par-par derivations plus Z-spread.
    pub fn calculate(
        &self,
        bond: &FixedRateBond,
        clean_price: f64,
        settlement: Date,
    ) -> PricerResult<AssetSwapResult> {
        let dirty = clean_price + bond.accrued_per_100(settlement);
        let periods = self.float_periods(bond, settlement)?;
        let annuity = self.float_annuity(&periods, settlement)?;
        let structural = self.structural_spread(bond, clean_price, settlement)?;
        let replicated = self.replicated_spread(bond, clean_price, settlement)?;
        let zspread = self.zspread(bond, clean_price, settlement)?;
        Ok(AssetSwapResult {
            dirty_price: dirty,
            upfront: 100.0 - dirty,
            annuity,
            structural: Spread::from_decimal_rate(structural, SpreadType::AssetSwapStructural),
            replicated: Spread::from_decimal_rate(replicated, SpreadType::AssetSwapReplicated),
            zspread: Spread::from_decimal_rate(zspread, SpreadType::ZSpread),
        })
    }

    fn validate(&self, bond: &FixedRateBond, settlement: Date) -> PricerResult<()> {
        if settlement >= bond.maturity() {
            return Err(PricerError::invalid_settlement(settlement, bond.maturity()));
        }
        if settlement < self.ctx.evaluation_date() {
            return Err(PricerError::invalid_input(format!(
                "settlement {} precedes evaluation date {}",
                settlement,
                self.ctx.evaluation_date()
            )));
        }
        Ok(())
    }
}

//! Parallel scenario sweeps over prices and rates.
//!
//! Each scenario revalues independently, so sweeps fan out across a
//! rayon thread pool and fail fast on the first scenario error.

use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use fairval_core::types::Date;

use crate::asset_swap::AssetSwapEngine;
use crate::bond::FixedRateBond;
use crate::error::PricerResult;
use crate::irs::{SwapPricer, VanillaSwap};

/// Default clean price bumps in price points.
pub const DEFAULT_PRICE_BUMPS: [f64; 7] = [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0];

/// Default fixed rate bumps in basis points.
pub const DEFAULT_RATE_BUMPS_BPS: [f64; 7] = [-50.0, -25.0, -10.0, 0.0, 10.0, 25.0, 50.0];

/// Asset-swap measures at one bumped clean price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AswSweepPoint {
    /// Bump applied to the base clean price, in price points.
    pub price_bump: f64,
    /// Bumped clean price.
    pub clean_price: f64,
    /// Structural par-par spread in basis points.
    pub structural_bps: f64,
    /// Replicated par-par spread in basis points.
    pub replicated_bps: f64,
    /// Z-spread in basis points.
    pub zspread_bps: f64,
}

/// Revalues the asset swap across bumped clean prices in parallel.
pub fn asw_price_sweep(
    engine: &AssetSwapEngine<'_>,
    bond: &FixedRateBond,
    clean_price: f64,
    settlement: Date,
    bumps: &[f64],
) -> PricerResult<Vec<AswSweepPoint>> {
    bumps
        .par_iter()
        .map(|&bump| {
            let bumped = clean_price + bump;
            let result = engine.calculate(bond, bumped, settlement)?;
            Ok(AswSweepPoint {
                price_bump: bump,
                clean_price: bumped,
                structural_bps: result.structural.value_bps().to_f64().unwrap_or(f64::NAN),
                replicated_bps: result.replicated.value_bps().to_f64().unwrap_or(f64::NAN),
                zspread_bps: result.zspread.value_bps().to_f64().unwrap_or(f64::NAN),
            })
        })
        .collect()
}

/// Swap NPV at one bumped fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrsSweepPoint {
    /// Bump applied to the contract rate, in basis points.
    pub rate_bump_bps: f64,
    /// Bumped fixed rate as a decimal.
    pub fixed_rate: f64,
    /// Holder NPV at the bumped rate.
    pub npv: f64,
}

/// Revalues the swap across bumped fixed rates in parallel.
pub fn irs_rate_sweep(
    pricer: &SwapPricer<'_>,
    swap: &VanillaSwap,
    bumps_bps: &[f64],
) -> PricerResult<Vec<IrsSweepPoint>> {
    bumps_bps
        .par_iter()
        .map(|&bump| {
            let rate = swap.fixed_rate() + bump * 1e-4;
            let fixed = pricer.fixed_leg_pv(swap, rate)?;
            let float = pricer.float_leg_pv(swap, swap.float_spread())?;
            Ok(IrsSweepPoint {
                rate_bump_bps: bump,
                fixed_rate: rate,
                npv: swap.side().sign() * (float - fixed),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairval_core::types::Frequency;
    use fairval_curves::discount::DiscountCurve;

    use crate::context::ValuationContext;

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

    #[test]
    fn test_asw_sweep_is_monotone_in_price() {
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let engine = AssetSwapEngine::new(&ctx);
        let bond = FixedRateBond::builder(date(2023, 3, 15), date(2033, 3, 15), 0.0325)
            .build()
            .unwrap();

        let points = asw_price_sweep(
            &engine,
            &bond,
            98.50,
            date(2025, 1, 17),
            &DEFAULT_PRICE_BUMPS,
        )
        .unwrap();
        assert_eq!(points.len(), DEFAULT_PRICE_BUMPS.len());
        // Rayon preserves input ordering through collect.
        for pair in points.windows(2) {
            assert!(pair[0].price_bump < pair[1].price_bump);
            assert!(pair[0].replicated_bps > pair[1].replicated_bps);
            assert!(pair[0].zspread_bps > pair[1].zspread_bps);
        }
    }

    #[test]
    fn test_irs_sweep_crosses_zero_at_fair_rate() {
        let reference = date(2025, 1, 15);
        let curve = flat_curve(reference, 0.03);
        let ctx = ValuationContext::new(reference, &curve).unwrap();
        let pricer = SwapPricer::new(&ctx);
        let swap = VanillaSwap::builder(date(2025, 1, 17), date(2030, 1, 17))
            .notional(10_000_000.0)
            .fixed_rate(0.03)
            .fixed_frequency(Frequency::Annual)
            .build()
            .unwrap();

        let points = irs_rate_sweep(&pricer, &swap, &DEFAULT_RATE_BUMPS_BPS).unwrap();
        assert_eq!(points.len(), DEFAULT_RATE_BUMPS_BPS.len());
        // A payer swap loses value as the fixed rate climbs.
        for pair in points.windows(2) {
            assert!(pair[0].npv > pair[1].npv);
        }
        // With bumps straddling the fair rate the NPV changes sign.
        assert!(points.first().unwrap().npv > 0.0);
        assert!(points.last().unwrap().npv < 0.0);
    }
}

//! Fair parameter solving by linear decomposition.
//!
//! Leg PV is affine in the coupon rate or spread being solved for:
//! `pv(x) = pv(0) + x * annuity`. Evaluating the leg at 0 and 1 recovers
//! both terms exactly, so the fair value is a single division rather
//! than a root-find. The slope is the leg annuity; when it is
//! numerically zero the instrument carries no exposure to the parameter
//! and solving is an error, never a silent zero.

use crate::error::{PricerError, PricerResult};

/// Smallest annuity magnitude considered solvable.
pub const MIN_ANNUITY: f64 = 1e-10;

/// Solves `leg_pv(x) = target_pv` for an `x` the leg PV is affine in.
pub fn solve_fair<F>(leg_pv: F, target_pv: f64) -> PricerResult<f64>
where
    F: Fn(f64) -> PricerResult<f64>,
{
    let pv0 = leg_pv(0.0)?;
    let slope = leg_pv(1.0)? - pv0;
    if slope.abs() < MIN_ANNUITY {
        return Err(PricerError::DegenerateAnnuity { annuity: slope });
    }
    Ok((target_pv - pv0) / slope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recovers_affine_parameter() {
        // pv(x) = 3.0 + 7.5 x, target 18.0 -> x = 2.0
        let fair = solve_fair(|x| Ok(3.0 + 7.5 * x), 18.0).unwrap();
        assert_relative_eq!(fair, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_annuity_is_an_error() {
        let result = solve_fair(|_| Ok(5.0), 10.0);
        assert!(matches!(
            result,
            Err(PricerError::DegenerateAnnuity { .. })
        ));
    }
}

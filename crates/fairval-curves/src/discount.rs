//! Immutable bootstrapped discount curve.

use fairval_core::types::Date;
use fairval_math::interpolation::{CubicSpline, Interpolator, LogLinear};

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// Interpolation backing a [`DiscountCurve`].
///
/// The spline interpolates `ln(DF)` directly (log-cubic discounting);
/// the log-linear fallback for curves with fewer than three pillars
/// interpolates DF but is linear in `ln(DF)` by construction.
#[derive(Debug, Clone)]
enum LogDfInterp {
    Spline(CubicSpline),
    Linear(LogLinear),
}

impl LogDfInterp {
    fn discount(&self, t: f64) -> CurveResult<f64> {
        match self {
            LogDfInterp::Spline(s) => Ok(s.interpolate(t)?.exp()),
            LogDfInterp::Linear(l) => Ok(l.interpolate(t)?),
        }
    }

    /// d ln(DF)/dt at `t`.
    fn log_derivative(&self, t: f64) -> CurveResult<f64> {
        match self {
            LogDfInterp::Spline(s) => Ok(s.derivative(t)?),
            LogDfInterp::Linear(l) => {
                let df = l.interpolate(t)?;
                Ok(l.derivative(t)? / df)
            }
        }
    }
}

/// A bootstrapped discount curve.
///
/// Holds pillar times and discount factors together with a fitted
/// interpolation on `ln(DF)` over ACT/365F curve time. Beyond the last
/// pillar the curve continues flat-forward, holding the last
/// instantaneous forward rate constant.
///
/// The curve is an immutable value: rebuilding from fresh quotes is a
/// new curve, never a mutation of an existing one.
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    reference_date: Date,
    max_date: Date,
    times: Vec<f64>,
    dfs: Vec<f64>,
    interp: LogDfInterp,
    /// Instantaneous forward at the last pillar, used flat beyond it.
    terminal_forward: f64,
}

impl DiscountCurve {
    /// Builds a curve from dated pillars.
    ///
    /// A (reference date, DF = 1) pillar is inserted automatically.
    /// Pillar dates must be strictly increasing and after the
    /// reference date; discount factors must be positive.
    ///
    /// # Errors
    ///
    /// Returns `CurveError` if the pillar list is empty, unsorted, or
    /// contains non-positive discount factors.
    pub fn from_pillars(reference_date: Date, pillars: &[(Date, f64)]) -> CurveResult<Self> {
        if pillars.is_empty() {
            return Err(CurveError::NoHelpers);
        }

        let mut times = Vec::with_capacity(pillars.len() + 1);
        let mut dfs = Vec::with_capacity(pillars.len() + 1);
        times.push(0.0);
        dfs.push(1.0);

        let mut previous = reference_date;
        for (date, df) in pillars {
            if *date <= previous {
                return Err(CurveError::bootstrap_failed(
                    format!("pillar {date}"),
                    "pillar dates must be strictly increasing after the reference date",
                ));
            }
            if *df <= 0.0 {
                return Err(CurveError::ImplausibleDiscountFactor {
                    df: *df,
                    helper: format!("pillar {date}"),
                });
            }
            previous = *date;
            times.push(year_fraction(reference_date, *date));
            dfs.push(*df);
        }

        let interp = if times.len() >= 3 {
            let log_dfs: Vec<f64> = dfs.iter().map(|df| df.ln()).collect();
            LogDfInterp::Spline(CubicSpline::new(times.clone(), log_dfs)?.with_extrapolation())
        } else {
            LogDfInterp::Linear(LogLinear::new(times.clone(), dfs.clone())?.with_extrapolation())
        };

        let last_t = times[times.len() - 1];
        let terminal_forward = -interp.log_derivative(last_t)?;

        Ok(Self {
            reference_date,
            max_date: pillars[pillars.len() - 1].0,
            times,
            dfs,
            interp,
            terminal_forward,
        })
    }

    /// Returns the pillar times in ACT/365F years (leading 0 included).
    #[must_use]
    pub fn pillar_times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the pillar discount factors (leading 1 included).
    #[must_use]
    pub fn pillar_discounts(&self) -> &[f64] {
        &self.dfs
    }
}

impl Curve for DiscountCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn max_date(&self) -> Date {
        self.max_date
    }

    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        let last_t = self.times[self.times.len() - 1];
        if t <= last_t {
            return self.interp.discount(t);
        }
        // Flat-forward continuation past the last pillar
        let last_df = self.dfs[self.dfs.len() - 1];
        Ok(last_df * (-self.terminal_forward * (t - last_t)).exp())
    }
}

fn year_fraction(start: Date, end: Date) -> f64 {
    start.days_between(&end) as f64 / 365.0
}

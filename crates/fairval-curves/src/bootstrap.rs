//! Sequential curve bootstrap.
//!
//! Solves one pillar discount factor per rate helper, in pillar-date
//! order, root-finding each helper's residual against the curve built
//! so far. Intermediate queries between solved pillars use log-linear
//! interpolation; the published curve refits the solved pillars with
//! log-cubic discounting.

use fairval_core::types::Date;
use fairval_math::interpolation::{Interpolator, LogLinear};
use fairval_math::solvers::{brent, SolverConfig};

use crate::discount::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::helpers::RateHelper;
use crate::traits::Curve;

/// Widest discount factor bracket tried per pillar.
const DF_BRACKET: (f64, f64) = (1e-6, 2.0);

/// Sequential bootstrapper for building discount curves.
///
/// # Example
///
/// ```rust,ignore
/// let curve = CurveBootstrapper::new(evaluation_date)
///     .add_helper(DepositHelper::from_tenor(spot, "6M".parse()?, 0.0365, &cal)?)
///     .add_helper(SwapHelper::from_tenor(spot, "5Y".parse()?, 0.029, Frequency::Annual, &cal)?)
///     .bootstrap()?;
/// ```
pub struct CurveBootstrapper {
    reference_date: Date,
    helpers: Vec<Box<dyn RateHelper>>,
    solver: SolverConfig,
}

impl CurveBootstrapper {
    /// Creates a bootstrapper anchored at the given reference date.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        Self {
            reference_date,
            helpers: Vec::new(),
            solver: SolverConfig::default(),
        }
    }

    /// Overrides the per-pillar solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Adds a rate helper.
    #[must_use]
    pub fn add_helper<H: RateHelper + 'static>(mut self, helper: H) -> Self {
        self.helpers.push(Box::new(helper));
        self
    }

    /// Adds a boxed rate helper.
    #[must_use]
    pub fn add_boxed_helper(mut self, helper: Box<dyn RateHelper>) -> Self {
        self.helpers.push(helper);
        self
    }

    /// Bootstraps the discount curve.
    ///
    /// # Errors
    ///
    /// - [`CurveError::NoHelpers`] when called with no helpers
    /// - [`CurveError::PillarNotAfterReference`] when a helper matures on or
    ///   before the reference date
    /// - [`CurveError::DuplicatePillar`] when two helpers share a pillar date
    /// - [`CurveError::BootstrapFailed`] when a pillar solve does not converge
    pub fn bootstrap(mut self) -> CurveResult<DiscountCurve> {
        if self.helpers.is_empty() {
            return Err(CurveError::NoHelpers);
        }

        for helper in &self.helpers {
            if helper.pillar_date() <= self.reference_date {
                return Err(CurveError::PillarNotAfterReference {
                    date: helper.pillar_date().to_string(),
                    helper: helper.description(),
                });
            }
        }

        self.helpers.sort_by_key(|h| h.pillar_date());

        for pair in self.helpers.windows(2) {
            if pair[0].pillar_date() == pair[1].pillar_date() {
                return Err(CurveError::DuplicatePillar {
                    date: pair[0].pillar_date().to_string(),
                    first: pair[0].description(),
                    second: pair[1].description(),
                });
            }
        }

        let mut pillars: Vec<(Date, f64)> = Vec::with_capacity(self.helpers.len());

        for helper in &self.helpers {
            let df = self.solve_pillar(helper.as_ref(), &pillars)?;

            if df <= 0.0 || df > 1.5 {
                return Err(CurveError::ImplausibleDiscountFactor {
                    df,
                    helper: helper.description(),
                });
            }

            log::debug!(
                "bootstrapped pillar {} -> DF {:.10} ({})",
                helper.pillar_date(),
                df,
                helper.description()
            );

            pillars.push((helper.pillar_date(), df));
        }

        DiscountCurve::from_pillars(self.reference_date, &pillars)
    }

    /// Root-finds the discount factor at one helper's pillar.
    fn solve_pillar(
        &self,
        helper: &dyn RateHelper,
        solved: &[(Date, f64)],
    ) -> CurveResult<f64> {
        let objective = |df: f64| {
            let partial = PartialCurve::new(self.reference_date, solved, helper.pillar_date(), df);
            // A partial curve over positive DFs cannot fail to evaluate
            helper.residual(&partial).unwrap_or(f64::NAN)
        };

        let result = brent(objective, DF_BRACKET.0, DF_BRACKET.1, &self.solver).map_err(|e| {
            CurveError::bootstrap_failed(helper.description(), e.to_string())
        })?;

        if result.residual.abs() > self.solver.tolerance * 10.0 {
            log::warn!(
                "pillar {} residual {:.2e} near tolerance after {} iterations",
                helper.pillar_date(),
                result.residual,
                result.iterations
            );
        }

        Ok(result.root)
    }
}

/// Curve over the solved pillars plus one trial pillar.
///
/// Log-linear between knots and flat continuation of the last segment,
/// which is all the per-pillar solve needs.
struct PartialCurve {
    reference_date: Date,
    max_date: Date,
    interp: LogLinear,
}

impl PartialCurve {
    fn new(reference_date: Date, solved: &[(Date, f64)], trial_date: Date, trial_df: f64) -> Self {
        let mut times = Vec::with_capacity(solved.len() + 2);
        let mut dfs = Vec::with_capacity(solved.len() + 2);
        times.push(0.0);
        dfs.push(1.0);
        for (date, df) in solved {
            times.push(reference_date.days_between(date) as f64 / 365.0);
            dfs.push(*df);
        }
        times.push(reference_date.days_between(&trial_date) as f64 / 365.0);
        dfs.push(trial_df.max(1e-12));

        let interp = LogLinear::new(times, dfs)
            .expect("partial curve knots are strictly increasing and positive")
            .with_extrapolation();

        Self {
            reference_date,
            max_date: trial_date,
            interp,
        }
    }
}

impl Curve for PartialCurve {
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
        Ok(self.interp.interpolate(t)?)
    }
}

//! Newton-Raphson root-finding.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Derivatives smaller than this are treated as vanishing.
const DERIVATIVE_FLOOR: f64 = 1e-15;

/// Raw Newton steps are clamped to this multiple of the iterate scale.
const MAX_STEP_FACTOR: f64 = 0.5;

/// Damped Newton-Raphson root-finding.
///
/// Takes the step `f(x) / f'(x)`, clamped so a single iteration never
/// moves more than half the current iterate scale. The clamp keeps
/// yield and spread solves from being thrown out of range by a flat
/// tail in the objective. Converges when the residual drops below the
/// configured tolerance, or when the step becomes negligible relative
/// to the iterate.
///
/// # Errors
///
/// - `MathError::DivisionByZero` if the derivative vanishes at an iterate
/// - `MathError::ConvergenceFailed` if the iteration budget runs out
///
/// # Example
///
/// ```rust
/// use fairval_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 1..=config.max_iterations {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration - 1,
                residual: fx,
            });
        }

        let dfx = df(x);
        if dfx.abs() < DERIVATIVE_FLOOR {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let raw = fx / dfx;
        let cap = MAX_STEP_FACTOR * (x.abs() + 1.0);
        let step = if raw.abs() > cap { cap.copysign(raw) } else { raw };

        x -= step;
        fx = f(x);

        if step.abs() <= config.tolerance * (1.0 + x.abs()) && fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs(),
    ))
}

/// Newton-Raphson with a central-difference derivative.
///
/// For functions where writing the analytic derivative is not worth it.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-8;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);
    newton_raphson(&f, df, initial_guess, config)
}

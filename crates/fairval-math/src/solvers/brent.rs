//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines bisection, secant steps, and inverse quadratic
/// interpolation. Requires a sign change: `f(a) * f(b) <= 0`.
///
/// # Errors
///
/// - `MathError::InvalidBracket` if the endpoints have the same sign
/// - `MathError::ConvergenceFailed` if the iteration budget runs out
///
/// # Example
///
/// ```rust
/// use fairval_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // Keep b as the best estimate: |f(b)| <= |f(a)|
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb.abs() < config.tolerance || (b - a).abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        let mut s;
        let mut bisect = true;

        if (fa - fc).abs() > 1e-15 && (fb - fc).abs() > 1e-15 {
            // Inverse quadratic interpolation through (a, b, c)
            let q = fa / fb;
            let r = fb / fc;
            let p = fa / fc;
            s = b - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                / ((q - 1.0) * (r - 1.0) * (p - 1.0));
            let mid = 0.5 * (a + b);
            if s > mid.min(b) && s < mid.max(b) && (s - b).abs() < 0.5 * e.abs() {
                bisect = false;
            }
        } else if (fb - fa).abs() > 1e-15 {
            // Secant step
            s = b - fb * (b - a) / (fb - fa);
            let mid = 0.5 * (a + b);
            if s > mid.min(b) && s < mid.max(b) && (s - b).abs() < 0.5 * e.abs() {
                bisect = false;
            }
        } else {
            s = 0.5 * (a + b);
        }

        if bisect {
            s = 0.5 * (a + b);
            e = b - a;
            d = e;
        } else {
            e = d;
            d = s - b;
        }

        c = b;
        fc = fb;

        let fs = f(s);
        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cubic() {
        let f = |x: f64| x * x * x - x - 2.0;
        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        assert!(f(result.root).abs() < 1e-10);
        assert_relative_eq!(result.root, 1.521_379_706_804_568, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;
        let result = brent(f, 2.0, 3.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_superlinear() {
        let f = |x: f64| x.sin();
        let result = brent(f, 3.0, 4.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::PI, epsilon = 1e-10);
        assert!(result.iterations < 20);
    }
}

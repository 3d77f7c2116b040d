//! Interpolation for discount curve construction.
//!
//! Fairval interpolates on the log of discount factors, so a single
//! smooth interpolator covers curve construction:
//!
//! - [`CubicSpline`]: natural cubic spline, C2-continuous
//! - [`LogLinear`]: piecewise linear, used between partially solved
//!   pillars during bootstrap

mod cubic_spline;
mod log_linear;

pub use cubic_spline::CubicSpline;
pub use log_linear::LogLinear;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

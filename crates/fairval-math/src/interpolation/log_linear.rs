//! Log-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Log-linear interpolation on positive values.
///
/// Interpolates linearly in `ln(y)`, which for discount factors means
/// piecewise-constant forward rates between knots. The bootstrap uses
/// this between partially solved pillars; extrapolation continues the
/// last segment's slope.
#[derive(Debug, Clone)]
pub struct LogLinear {
    xs: Vec<f64>,
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinear {
    /// Creates a log-linear interpolator through the given points.
    ///
    /// # Errors
    ///
    /// Returns an error on fewer than 2 points, mismatched lengths,
    /// non-increasing x values, or non-positive y values.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
        if ys.iter().any(|y| *y <= 0.0) {
            return Err(MathError::invalid_input(
                "log-linear interpolation requires positive values",
            ));
        }

        let log_ys = ys.iter().map(|y| y.ln()).collect();

        Ok(Self {
            xs,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => i.saturating_sub(1).min(self.xs.len() - 2),
        }
    }

    fn log_at(&self, x: f64) -> MathResult<f64> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        let i = self.segment(x);
        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(self.log_ys[i] + w * (self.log_ys[i + 1] - self.log_ys[i]))
    }
}

impl Interpolator for LogLinear {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        Ok(self.log_at(x)?.exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        let i = self.segment(x);
        let slope = (self.log_ys[i + 1] - self.log_ys[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(slope * self.interpolate(x)?)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_knots() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![1.0, 0.97, 0.93];
        let interp = LogLinear::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_geometric_midpoint() {
        let interp = LogLinear::new(vec![0.0, 2.0], vec![1.0, 0.81]).unwrap();
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(LogLinear::new(vec![0.0, 1.0], vec![1.0, 0.0]).is_err());
    }

    #[test]
    fn test_extrapolation_continues_slope() {
        let interp = LogLinear::new(vec![0.0, 1.0], vec![1.0, 0.9])
            .unwrap()
            .with_extrapolation();
        let df2 = interp.interpolate(2.0).unwrap();
        assert_relative_eq!(df2, 0.81, epsilon = 1e-12);
    }
}

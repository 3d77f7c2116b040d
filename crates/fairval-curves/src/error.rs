//! Error types for curve operations.

use fairval_core::CoreError;
use fairval_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Bootstrap was requested with no rate helpers.
    #[error("No rate helpers provided for bootstrap")]
    NoHelpers,

    /// Two helpers share the same pillar date.
    #[error("Duplicate pillar date {date} ({first} and {second})")]
    DuplicatePillar {
        /// The shared pillar date (ISO format).
        date: String,
        /// Description of the first helper.
        first: String,
        /// Description of the second helper.
        second: String,
    },

    /// A helper's pillar date does not lie past the curve reference date.
    #[error("Pillar date {date} is not after the reference date ({helper})")]
    PillarNotAfterReference {
        /// The offending pillar date (ISO format).
        date: String,
        /// Description of the helper.
        helper: String,
    },

    /// The pillar solve failed for one helper.
    #[error("Bootstrap failed for {helper}: {reason}")]
    BootstrapFailed {
        /// Description of the helper that failed.
        helper: String,
        /// Description of the failure.
        reason: String,
    },

    /// A solved discount factor fell outside its plausible range.
    #[error("Implausible discount factor {df} for {helper}")]
    ImplausibleDiscountFactor {
        /// The solved discount factor.
        df: f64,
        /// Description of the helper.
        helper: String,
    },

    /// Underlying numerical failure.
    #[error("Numerical error: {0}")]
    Math(#[from] MathError),

    /// Underlying date or schedule failure.
    #[error("Date error: {0}")]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a bootstrap failure error.
    #[must_use]
    pub fn bootstrap_failed(helper: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BootstrapFailed {
            helper: helper.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::bootstrap_failed("DEPOSIT 6M @ 3.65%", "no sign change");
        assert!(err.to_string().contains("DEPOSIT 6M"));
    }

    #[test]
    fn test_math_error_wraps() {
        let err: CurveError = MathError::convergence_failed(100, 1e-3).into();
        assert!(err.to_string().contains("Convergence failed"));
    }
}

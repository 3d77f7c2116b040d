//! Error types for pricing engines.

use fairval_core::error::CoreError;
use fairval_curves::error::CurveError;
use fairval_math::error::MathError;
use thiserror::Error;

/// Errors that can occur during instrument valuation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricerError {
    /// Settlement date is on or after the instrument's final cash flow
    #[error("Invalid settlement: settlement {settlement} is on or after maturity {maturity}")]
    InvalidSettlement { settlement: String, maturity: String },

    /// An instrument was constructed with no remaining cash flows
    #[error("Empty schedule: {reason}")]
    EmptySchedule { reason: String },

    /// The annuity of the leg being solved for is numerically zero
    #[error("Degenerate annuity {annuity:.6e}: cannot solve for a fair rate or spread")]
    DegenerateAnnuity { annuity: f64 },

    /// A root-finder failed to converge on a spread or yield
    #[error("Solver failed for {quantity}: {reason}")]
    SolverFailed { quantity: String, reason: String },

    /// Invalid input parameters
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Curve error
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Math error
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl PricerError {
    /// Create an invalid settlement error
    pub fn invalid_settlement(
        settlement: impl std::fmt::Display,
        maturity: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidSettlement {
            settlement: settlement.to_string(),
            maturity: maturity.to_string(),
        }
    }

    /// Create an empty schedule error
    pub fn empty_schedule(reason: impl Into<String>) -> Self {
        Self::EmptySchedule {
            reason: reason.into(),
        }
    }

    /// Create a solver failure error
    pub fn solver_failed(quantity: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::SolverFailed {
            quantity: quantity.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type alias for pricer operations
pub type PricerResult<T> = Result<T, PricerError>;

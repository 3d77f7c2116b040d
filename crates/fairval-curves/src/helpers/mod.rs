//! Rate helpers: the market quotes a curve is bootstrapped from.
//!
//! Each helper pairs a quote with a fair-value equation. The bootstrap
//! solves the discount factor at each helper's pillar date so that its
//! [`residual`](RateHelper::residual) vanishes against the curve built
//! so far.

mod deposit;
mod swap;

pub use deposit::DepositHelper;
pub use swap::SwapHelper;

use fairval_core::types::Date;

use crate::error::CurveResult;
use crate::traits::Curve;

/// One bootstrap instrument.
pub trait RateHelper: Send + Sync {
    /// The date whose discount factor this helper pins down.
    fn pillar_date(&self) -> Date;

    /// Fair-value equation: zero when the quote reprices on `curve`.
    fn residual(&self, curve: &dyn Curve) -> CurveResult<f64>;

    /// Human-readable description used in errors and logs.
    fn description(&self) -> String;
}

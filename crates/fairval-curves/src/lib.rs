//! # Fairval Curves
//!
//! Discount curve construction and queries:
//!
//! - **Rate helpers**: deposit and par-swap quotes with fair-value equations
//! - **Bootstrap**: sequential pillar-by-pillar root-finding
//! - **DiscountCurve**: immutable log-cubic discounting with flat-forward
//!   extrapolation
//!
//! ## Example
//!
//! ```rust
//! use fairval_core::calendars::{Calendar, TargetCalendar};
//! use fairval_core::types::{Date, Frequency};
//! use fairval_curves::prelude::*;
//!
//! let eval = Date::from_ymd(2025, 1, 15).unwrap();
//! let cal = TargetCalendar;
//! let spot = cal.add_business_days(eval, 2);
//!
//! let curve = CurveBootstrapper::new(eval)
//!     .add_helper(DepositHelper::from_tenor(spot, "6M".parse().unwrap(), 0.0365, &cal).unwrap())
//!     .add_helper(
//!         SwapHelper::from_tenor(spot, "2Y".parse().unwrap(), 0.030, Frequency::Annual, &cal)
//!             .unwrap(),
//!     )
//!     .bootstrap()
//!     .unwrap();
//!
//! assert!((curve.discount(eval).unwrap() - 1.0).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod discount;
pub mod error;
pub mod helpers;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::CurveBootstrapper;
    pub use crate::discount::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::helpers::{DepositHelper, RateHelper, SwapHelper};
    pub use crate::traits::Curve;
}

pub use bootstrap::CurveBootstrapper;
pub use discount::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use traits::Curve;

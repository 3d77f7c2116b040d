//! # Fairval Pricers
//!
//! Valuation engines on top of [`fairval_curves`]:
//!
//! - **Bonds**: curve and yield pricing, duration, convexity, BPV
//! - **Asset swaps**: par-par spread by two cross-checked derivations,
//!   plus Z-spread
//! - **Interest rate swaps**: single-curve NPV, fair rate and spread,
//!   leg BPS
//! - **Cross-currency swaps**: fixed-fixed, fixed-floating and
//!   float-float legs over a two-curve FX context
//! - **Sensitivity**: parallel price and rate sweeps
//!
//! ## Example
//!
//! ```rust
//! use fairval_core::types::Date;
//! use fairval_curves::discount::DiscountCurve;
//! use fairval_pricers::prelude::*;
//!
//! let eval = Date::from_ymd(2025, 1, 15).unwrap();
//! let pillars: Vec<(Date, f64)> = [1.0_f64, 2.0, 5.0, 10.0]
//!     .iter()
//!     .map(|t| (eval.add_days((t * 365.0) as i64), (-0.03 * t).exp()))
//!     .collect();
//! let curve = DiscountCurve::from_pillars(eval, &pillars).unwrap();
//! let ctx = ValuationContext::new(eval, &curve).unwrap();
//!
//! let bond = FixedRateBond::builder(
//!     Date::from_ymd(2023, 3, 15).unwrap(),
//!     Date::from_ymd(2033, 3, 15).unwrap(),
//!     0.0325,
//! )
//! .build()
//! .unwrap();
//!
//! let pricer = BondPricer::new(&ctx);
//! let settlement = Date::from_ymd(2025, 1, 17).unwrap();
//! let clean = pricer.clean_price(&bond, settlement).unwrap();
//! assert!(clean > 90.0 && clean < 110.0);
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

pub mod asset_swap;
pub mod bond;
pub mod context;
pub mod error;
pub mod fairvalue;
pub mod irs;
pub mod legs;
pub mod sensitivity;
pub mod xccy;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::asset_swap::{AssetSwapEngine, AssetSwapResult};
    pub use crate::bond::{BondAnalytics, BondPricer, FixedRateBond};
    pub use crate::context::{ValuationContext, XccyContext};
    pub use crate::error::{PricerError, PricerResult};
    pub use crate::irs::{SwapPricer, SwapResults, SwapSide, VanillaSwap};
    pub use crate::xccy::{
        CrossCurrencySwap, LegKind, LegSelector, XccyLeg, XccyPricer, XccyResults, XccyVariant,
    };
}

pub use asset_swap::AssetSwapEngine;
pub use bond::{BondPricer, FixedRateBond};
pub use context::{ValuationContext, XccyContext};
pub use error::{PricerError, PricerResult};
pub use irs::{SwapPricer, VanillaSwap};
pub use xccy::{CrossCurrencySwap, XccyPricer};

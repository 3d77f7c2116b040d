//! # Fairval Math
//!
//! Numerical utilities for the Fairval valuation library:
//!
//! - **Solvers**: Newton-Raphson and Brent root-finding with a shared
//!   configuration and deterministic failure behavior
//! - **Interpolation**: natural cubic spline and log-linear, the two
//!   schemes discount curve construction needs
//!
//! ## Example
//!
//! ```rust
//! use fairval_math::solvers::{brent, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let root = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap().root;
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{SolverConfig, SolverResult};

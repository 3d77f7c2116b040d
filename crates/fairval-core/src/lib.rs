//! # Fairval Core
//!
//! Core types, conventions, and schedule generation for the Fairval
//! valuation library.
//!
//! This crate provides the foundational building blocks used throughout
//! Fairval:
//!
//! - **Types**: Domain-specific types like `Date`, `Tenor`, `Price`, `Spread`
//! - **Day Count Conventions**: Accrual fraction calculations
//! - **Business Day Calendars**: TARGET and US Federal Reserve calendars
//! - **Schedules**: Backward/forward coupon date generation
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: No global state; every input is a parameter
//!
//! ## Example
//!
//! ```rust
//! use fairval_core::prelude::*;
//!
//! let start = Date::from_ymd(2023, 3, 15).unwrap();
//! let end = Date::from_ymd(2033, 3, 15).unwrap();
//! let schedule = Schedule::builder(start, end)
//!     .frequency(Frequency::Annual)
//!     .calendar(&TargetCalendar)
//!     .build()
//!     .unwrap();
//! assert_eq!(schedule.len(), 11);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, FederalReserveCalendar, TargetCalendar, WeekendCalendar,
    };
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount, DayCountConvention, Thirty360};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::schedule::{DateGeneration, Schedule};
    pub use crate::types::{
        CashFlow, CashFlowKind, CashflowLeg, Compounding, Currency, Date, Frequency, Price,
        Spread, SpreadType, Tenor, TenorUnit,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, Frequency, Tenor};

//! Core domain types.

mod cashflow;
mod currency;
mod date;
mod frequency;
mod price;
mod spread;
mod tenor;

pub use cashflow::{CashFlow, CashFlowKind, CashflowLeg};
pub use currency::Currency;
pub use date::{days_in_month, Date};
pub use frequency::{Compounding, Frequency};
pub use price::Price;
pub use spread::{Spread, SpreadType};
pub use tenor::{Tenor, TenorUnit};

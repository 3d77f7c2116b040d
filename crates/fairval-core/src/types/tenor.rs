//! Tenor type for quoting instrument maturities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Unit of a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Calendar weeks
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

/// A market tenor such as `6M` or `10Y`.
///
/// # Example
///
/// ```rust
/// use fairval_core::types::Tenor;
///
/// let tenor: Tenor = "18M".parse().unwrap();
/// assert_eq!(tenor.in_months(), Some(18));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    /// Number of units.
    pub n: i32,
    /// Unit of the tenor.
    pub unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor of `n` months.
    #[must_use]
    pub fn months(n: i32) -> Self {
        Self {
            n,
            unit: TenorUnit::Months,
        }
    }

    /// Creates a tenor of `n` years.
    #[must_use]
    pub fn years(n: i32) -> Self {
        Self {
            n,
            unit: TenorUnit::Years,
        }
    }

    /// Creates a tenor of `n` days.
    #[must_use]
    pub fn days(n: i32) -> Self {
        Self {
            n,
            unit: TenorUnit::Days,
        }
    }

    /// Returns the tenor expressed in whole months, if it has one.
    ///
    /// Day and week tenors have no exact month count and return `None`.
    #[must_use]
    pub fn in_months(&self) -> Option<i32> {
        match self.unit {
            TenorUnit::Months => Some(self.n),
            TenorUnit::Years => Some(self.n * 12),
            TenorUnit::Days | TenorUnit::Weeks => None,
        }
    }

    /// Advances a date by this tenor using calendar-free arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn advance_from(&self, date: Date) -> CoreResult<Date> {
        match self.unit {
            TenorUnit::Days => Ok(date.add_days(i64::from(self.n))),
            TenorUnit::Weeks => Ok(date.add_days(i64::from(self.n) * 7)),
            TenorUnit::Months => date.add_months(self.n),
            TenorUnit::Years => date.add_years(self.n),
        }
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        if s.len() < 2 {
            return Err(CoreError::invalid_tenor(format!("too short: '{s}'")));
        }
        let (num, unit) = s.split_at(s.len() - 1);
        let n: i32 = num
            .parse()
            .map_err(|_| CoreError::invalid_tenor(format!("bad count in '{s}'")))?;
        let unit = match unit.to_ascii_uppercase().as_str() {
            "D" => TenorUnit::Days,
            "W" => TenorUnit::Weeks,
            "M" => TenorUnit::Months,
            "Y" => TenorUnit::Years,
            other => {
                return Err(CoreError::invalid_tenor(format!(
                    "unknown unit '{other}' in '{s}'"
                )))
            }
        };
        Ok(Tenor { n, unit })
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = match self.unit {
            TenorUnit::Days => "D",
            TenorUnit::Weeks => "W",
            TenorUnit::Months => "M",
            TenorUnit::Years => "Y",
        };
        write!(f, "{}{u}", self.n)
    }
}

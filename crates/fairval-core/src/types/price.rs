//! Price type quoted as a percentage of par.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;

/// A bond price quoted as a percentage of par (e.g. 98.50).
///
/// Quoted values are held as `Decimal` so they round-trip exactly;
/// pricing math converts to `f64` at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Price as a percentage of par.
    value: Decimal,
    /// Currency of the quoted instrument.
    currency: Currency,
}

impl Price {
    /// Creates a new price.
    #[must_use]
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Returns the quoted value as a percentage of par.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the quoted value as `f64` for pricing math.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_display() {
        let p = Price::new(dec!(98.50), Currency::EUR);
        assert_eq!(p.to_string(), "98.50 EUR");
        assert!((p.as_f64() - 98.5).abs() < 1e-12);
    }
}

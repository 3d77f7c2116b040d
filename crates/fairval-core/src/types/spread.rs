//! Spread type quoted in basis points.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of spread measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreadType {
    /// Z-spread: parallel shift of the zero curve repricing the bond.
    ZSpread,
    /// Par-par asset-swap spread from the structural (cashflow) derivation.
    AssetSwapStructural,
    /// Par-par asset-swap spread from the replication (annuity) derivation.
    AssetSwapReplicated,
    /// Cross-currency or floating-floating basis spread.
    Basis,
}

impl fmt::Display for SpreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpreadType::ZSpread => "Z-Spread",
            SpreadType::AssetSwapStructural => "ASW (structural)",
            SpreadType::AssetSwapReplicated => "ASW (replicated)",
            SpreadType::Basis => "Basis",
        };
        write!(f, "{name}")
    }
}

/// A spread in basis points with its measure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// Spread value in basis points.
    value_bps: Decimal,
    /// Kind of spread measure.
    spread_type: SpreadType,
}

impl Spread {
    /// Creates a new spread from a basis-point value.
    #[must_use]
    pub fn new(value_bps: Decimal, spread_type: SpreadType) -> Self {
        Self {
            value_bps,
            spread_type,
        }
    }

    /// Creates a spread from a decimal rate (0.0015 -> 15 bps).
    #[must_use]
    pub fn from_decimal_rate(rate: f64, spread_type: SpreadType) -> Self {
        let bps = Decimal::from_f64(rate * 10_000.0).unwrap_or_default();
        Self::new(bps, spread_type)
    }

    /// Returns the spread in basis points.
    #[must_use]
    pub fn value_bps(&self) -> Decimal {
        self.value_bps
    }

    /// Returns the spread as a decimal rate (15 bps -> 0.0015).
    #[must_use]
    pub fn as_decimal_rate(&self) -> f64 {
        self.value_bps.to_f64().unwrap_or(f64::NAN) / 10_000.0
    }

    /// Returns the kind of spread measure.
    #[must_use]
    pub fn spread_type(&self) -> SpreadType {
        self.spread_type
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps ({})", self.value_bps, self.spread_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_trip() {
        let s = Spread::from_decimal_rate(0.00425, SpreadType::ZSpread);
        assert_relative_eq!(s.as_decimal_rate(), 0.00425, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let s = Spread::new(dec!(42.5), SpreadType::AssetSwapReplicated);
        assert!(s.to_string().contains("42.5 bps"));
    }
}

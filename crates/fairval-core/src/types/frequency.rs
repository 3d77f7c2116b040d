//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment frequency for coupon legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year) - standard EUR fixed leg
    #[default]
    Annual,
    /// Semi-annual payments (2 per year) - standard USD fixed leg
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
    /// Zero coupon (no periodic payments)
    Zero,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Zero => 0,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
            Frequency::Zero => 0,
        }
    }

    /// Returns true if this is a zero coupon (no periodic payments).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Frequency::Zero)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Zero => "Zero Coupon",
        };
        write!(f, "{name}")
    }
}

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Continuous compounding
    #[default]
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year.
    ///
    /// Returns 0 for Simple and Continuous, which have no finite period count.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Simple | Compounding::Continuous => 0,
            Compounding::Annual => 1,
            Compounding::SemiAnnual => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }

    /// Discount factor for `rate` over year fraction `t` under this convention.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Continuous => (-rate * t).exp(),
            _ => {
                let m = f64::from(self.periods_per_year());
                (1.0 + rate / m).powf(-m * t)
            }
        }
    }

    /// Rate implied by a discount factor over year fraction `t`.
    ///
    /// Returns 0 for non-positive `t` or `df`, where no rate is defined.
    #[must_use]
    pub fn rate_from_discount(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 || df <= 0.0 {
            return 0.0;
        }
        match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Continuous => -df.ln() / t,
            _ => {
                let m = f64::from(self.periods_per_year());
                m * (df.powf(-1.0 / (m * t)) - 1.0)
            }
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

impl From<Frequency> for Compounding {
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Compounding::Annual,
            Frequency::SemiAnnual => Compounding::SemiAnnual,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
            Frequency::Zero => Compounding::Continuous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::SemiAnnual.months_per_period(), 6);
        assert_eq!(Frequency::Zero.periods_per_year(), 0);
    }

    #[test]
    fn test_discount_rate_round_trip() {
        for comp in [
            Compounding::Simple,
            Compounding::Annual,
            Compounding::SemiAnnual,
            Compounding::Continuous,
        ] {
            let df = comp.discount_factor(0.035, 2.5);
            let rate = comp.rate_from_discount(df, 2.5);
            assert_relative_eq!(rate, 0.035, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_continuous_discount() {
        let df = Compounding::Continuous.discount_factor(0.03, 1.0);
        assert_relative_eq!(df, (-0.03f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_frequency_to_compounding() {
        let comp: Compounding = Frequency::Annual.into();
        assert_eq!(comp, Compounding::Annual);
    }

    proptest! {
        // Any positive rate survives the trip through a discount factor
        // and back, under every compounding convention.
        #[test]
        fn prop_rate_discount_round_trip(
            rate in 0.0001f64..0.15,
            t in 0.05f64..40.0,
        ) {
            for comp in [
                Compounding::Simple,
                Compounding::Annual,
                Compounding::SemiAnnual,
                Compounding::Quarterly,
                Compounding::Monthly,
                Compounding::Continuous,
            ] {
                let df = comp.discount_factor(rate, t);
                prop_assert!(df > 0.0 && df < 1.0, "{}: df {}", comp, df);
                let back = comp.rate_from_discount(df, t);
                prop_assert!(
                    (back - rate).abs() < 1e-9,
                    "{}: {} came back as {}",
                    comp, rate, back
                );
            }
        }
    }
}

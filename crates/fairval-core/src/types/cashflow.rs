//! Cash flow types shared by the bond and swap pricers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Kind of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Fixed coupon payment
    Coupon,
    /// Floating coupon payment (amount from a projected forward)
    FloatingCoupon,
    /// Principal redemption at maturity
    Principal,
    /// Initial or final notional exchange on a swap leg
    NotionalExchange,
    /// Upfront payment at settlement
    Upfront,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::FloatingCoupon => "Floating Coupon",
            CashFlowKind::Principal => "Principal",
            CashFlowKind::NotionalExchange => "Notional Exchange",
            CashFlowKind::Upfront => "Upfront",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow in leg currency units.
///
/// Amounts are signed: positive flows are received, negative flows are
/// paid. Accrual dates are carried for coupon flows so pricers can
/// recompute year fractions without regenerating the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date.
    pub date: Date,
    /// Signed amount in leg currency units.
    pub amount: f64,
    /// Kind of cash flow.
    pub kind: CashFlowKind,
    /// Accrual period start (coupons only).
    pub accrual_start: Option<Date>,
    /// Accrual period end (coupons only).
    pub accrual_end: Option<Date>,
}

impl CashFlow {
    /// Creates a non-accruing cash flow (principal, notional, upfront).
    #[must_use]
    pub fn simple(date: Date, amount: f64, kind: CashFlowKind) -> Self {
        Self {
            date,
            amount,
            kind,
            accrual_start: None,
            accrual_end: None,
        }
    }

    /// Creates a coupon cash flow with its accrual period.
    #[must_use]
    pub fn coupon(date: Date, amount: f64, accrual_start: Date, accrual_end: Date) -> Self {
        Self {
            date,
            amount,
            kind: CashFlowKind::Coupon,
            accrual_start: Some(accrual_start),
            accrual_end: Some(accrual_end),
        }
    }

    /// Creates a floating coupon cash flow with its accrual period.
    #[must_use]
    pub fn floating_coupon(
        date: Date,
        amount: f64,
        accrual_start: Date,
        accrual_end: Date,
    ) -> Self {
        Self {
            date,
            amount,
            kind: CashFlowKind::FloatingCoupon,
            accrual_start: Some(accrual_start),
            accrual_end: Some(accrual_end),
        }
    }
}

/// An ordered sequence of cash flows on one leg.
pub type CashflowLeg = Vec<CashFlow>;

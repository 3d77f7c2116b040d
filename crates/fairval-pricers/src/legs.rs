//! Cash flow leg generation and present value.
//!
//! Fixed and floating legs are built from schedule periods into plain
//! [`CashflowLeg`] vectors, and discounted with a single PV routine. All
//! swap and asset-swap engines go through these functions so that a
//! floating coupon is always projected and accrued with the same day
//! count.

use fairval_core::daycounts::DayCountConvention;
use fairval_core::types::{CashFlow, CashFlowKind, CashflowLeg, Date};
use fairval_curves::traits::Curve;

use crate::error::PricerResult;

/// Generates fixed coupons `notional * rate * tau` for each accrual period.
pub fn fixed_coupons(
    periods: &[(Date, Date)],
    notional: f64,
    rate: f64,
    day_count: DayCountConvention,
) -> CashflowLeg {
    periods
        .iter()
        .map(|&(start, end)| {
            let tau = day_count.year_fraction(start, end);
            CashFlow::coupon(end, notional * rate * tau, start, end)
        })
        .collect()
}

/// Generates floating coupons `notional * (forward + spread) * tau`.
///
/// Forwards are projected off `curve` with the same day count used for
/// accrual, so a spread of zero reprices the curve's own forwards.
pub fn floating_coupons(
    curve: &dyn Curve,
    periods: &[(Date, Date)],
    notional: f64,
    spread: f64,
    day_count: DayCountConvention,
) -> PricerResult<CashflowLeg> {
    let dc = day_count.as_day_count();
    periods
        .iter()
        .map(|&(start, end)| {
            let tau = day_count.year_fraction(start, end);
            let forward = curve.simple_forward(start, end, dc)?;
            Ok(CashFlow::floating_coupon(
                end,
                notional * (forward + spread) * tau,
                start,
                end,
            ))
        })
        .collect()
}

/// Appends a final notional repayment to a leg.
pub fn with_final_notional(mut leg: CashflowLeg, notional: f64, maturity: Date) -> CashflowLeg {
    leg.push(CashFlow::simple(
        maturity,
        notional,
        CashFlowKind::NotionalExchange,
    ));
    leg
}

/// Wraps a leg with an initial notional outflow and a final repayment,
/// as exchanged on a cross-currency swap.
pub fn with_notional_exchange(
    leg: CashflowLeg,
    notional: f64,
    start: Date,
    maturity: Date,
) -> CashflowLeg {
    let mut out = Vec::with_capacity(leg.len() + 2);
    out.push(CashFlow::simple(
        start,
        -notional,
        CashFlowKind::NotionalExchange,
    ));
    out.extend(leg);
    out.push(CashFlow::simple(
        maturity,
        notional,
        CashFlowKind::NotionalExchange,
    ));
    out
}

/// Present value of a leg as of the curve's reference date.
///
/// Flows on or before the reference date carry no value.
pub fn present_value(curve: &dyn Curve, leg: &[CashFlow]) -> PricerResult<f64> {
    let reference = curve.reference_date();
    let mut pv = 0.0;
    for cf in leg {
        if cf.date <= reference {
            continue;
        }
        pv += cf.amount * curve.discount(cf.date)?;
    }
    Ok(pv)
}

/// Present value of a leg per unit of discount factor to `settlement`,
/// i.e. the forward value at settlement. Used for bond-style quotes.
pub fn present_value_at(
    curve: &dyn Curve,
    leg: &[CashFlow],
    settlement: Date,
) -> PricerResult<f64> {
    let df_settle = curve.discount(settlement)?;
    let mut pv = 0.0;
    for cf in leg {
        if cf.date <= settlement {
            continue;
        }
        pv += cf.amount * curve.discount(cf.date)?;
    }
    Ok(pv / df_settle)
}

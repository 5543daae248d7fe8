//! Level-payment loan amortization: payment, remaining balance, and the full
//! period-by-period schedule.

use crate::rates::tvm::annuity_payment;

/// One row of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationEntry {
    /// 1-based period index.
    pub period: u32,
    /// Total payment for the period.
    pub payment: f64,
    /// Interest portion of the payment.
    pub interest: f64,
    /// Principal portion of the payment.
    pub principal: f64,
    /// Outstanding balance after the payment.
    pub balance: f64,
}

/// Level per-period payment for a fully amortizing loan.
///
/// # Panics
/// Panics if `rate <= -1` or `periods == 0`.
pub fn payment(principal: f64, rate: f64, periods: u32) -> f64 {
    annuity_payment(principal, rate, periods)
}

/// Outstanding balance after `paid_periods` of `total_periods` level
/// payments, via the closed form
/// `P * (1+r)^p - pmt * ((1+r)^p - 1) / r`.
///
/// # Panics
/// Panics if `rate <= -1`, `total_periods == 0`, or
/// `paid_periods > total_periods`.
pub fn remaining_balance(
    principal: f64,
    rate: f64,
    total_periods: u32,
    paid_periods: u32,
) -> f64 {
    assert!(
        paid_periods <= total_periods,
        "paid periods cannot exceed total periods"
    );
    let pmt = annuity_payment(principal, rate, total_periods);
    if rate.abs() < 1.0e-12 {
        return principal - pmt * paid_periods as f64;
    }
    let grown = (1.0 + rate).powi(paid_periods as i32);
    principal * grown - pmt * (grown - 1.0) / rate
}

/// Full amortization schedule for a level-payment loan.
///
/// The final row retires the balance exactly: its principal portion is set
/// to the remaining balance so rounding drift cannot leave a residual.
///
/// # Examples
/// ```rust
/// use closedform::rates::amortization::schedule;
///
/// let rows = schedule(10_000.0, 0.004, 24);
/// assert_eq!(rows.len(), 24);
/// assert_eq!(rows.last().unwrap().balance, 0.0);
/// ```
pub fn schedule(principal: f64, rate: f64, periods: u32) -> Vec<AmortizationEntry> {
    let pmt = annuity_payment(principal, rate, periods);

    let mut rows = Vec::with_capacity(periods as usize);
    let mut balance = principal;
    for period in 1..=periods {
        let interest = balance * rate;
        let (pay, principal_part) = if period == periods {
            // Retire whatever is left, absorbing accumulated rounding.
            (balance + interest, balance)
        } else {
            (pmt, pmt - interest)
        };
        balance -= principal_part;
        rows.push(AmortizationEntry {
            period,
            payment: pay,
            interest,
            principal: principal_part,
            balance,
        });
    }
    rows
}

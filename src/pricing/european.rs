//! Module `pricing::european`.
//!
//! Closed-form Black-Scholes pricing for vanilla European options, plus the
//! put-call parity identity.
//!
//! References: Hull (11th ed.) Ch. 15; Black and Scholes (1973).
//!
//! Numerical considerations: inputs are validated up front — `sigma <= 0` or
//! `t <= 0` is a [`FormulaError::DomainError`], never a silently computed
//! NaN/Infinity. The normal CDF underneath is accurate to ~7.5e-8.

use crate::core::{FormulaError, OptionType};
use crate::math::normal_cdf;

/// Computes the standardized moneyness/drift pair `(d1, d2)`:
///
/// ```text
/// d1 = (ln(s/k) + (r + sigma^2/2) * t) / (sigma * sqrt(t))
/// d2 = d1 - sigma * sqrt(t)
/// ```
///
/// # Errors
/// Returns [`FormulaError::DomainError`] when `s <= 0`, `k <= 0`,
/// `sigma <= 0`, `t <= 0`, or any input is non-finite.
pub fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<(f64, f64), FormulaError> {
    validate_contract(s, k, r, sigma, t)?;

    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    Ok((d1, d1 - sig_sqrt_t))
}

pub(crate) fn validate_contract(
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Result<(), FormulaError> {
    if !s.is_finite() || !k.is_finite() || !r.is_finite() || !sigma.is_finite() || !t.is_finite() {
        return Err(FormulaError::DomainError(
            "inputs must be finite".to_string(),
        ));
    }
    if s <= 0.0 {
        return Err(FormulaError::DomainError(
            "spot price must be > 0".to_string(),
        ));
    }
    if k <= 0.0 {
        return Err(FormulaError::DomainError(
            "strike price must be > 0".to_string(),
        ));
    }
    if sigma <= 0.0 {
        return Err(FormulaError::DomainError(
            "volatility must be > 0".to_string(),
        ));
    }
    if t <= 0.0 {
        return Err(FormulaError::DomainError(
            "time to maturity must be > 0".to_string(),
        ));
    }
    Ok(())
}

/// Black-Scholes European call price.
///
/// Parameters:
/// - `s`: current spot price.
/// - `k`: strike price.
/// - `r`: continuously compounded risk-free rate.
/// - `sigma`: annualized volatility.
/// - `t`: time to expiry in years.
///
/// # Examples
/// ```rust
/// use closedform::pricing::european::{black_scholes_call, black_scholes_put};
///
/// let call = black_scholes_call(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// let put = black_scholes_put(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// assert!(call > put);
/// ```
pub fn black_scholes_call(
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Result<f64, FormulaError> {
    let (d1, d2) = d1_d2(s, k, r, sigma, t)?;
    Ok(s * normal_cdf(d1) - k * (-r * t).exp() * normal_cdf(d2))
}

/// Black-Scholes European put price.
pub fn black_scholes_put(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, FormulaError> {
    let (d1, d2) = d1_d2(s, k, r, sigma, t)?;
    Ok(k * (-r * t).exp() * normal_cdf(-d2) - s * normal_cdf(-d1))
}

/// Black-Scholes price dispatching on option side.
///
/// # Examples
/// ```rust
/// use closedform::core::OptionType;
/// use closedform::pricing::european::black_scholes_price;
///
/// let px = black_scholes_price(OptionType::Put, 100.0, 110.0, 0.02, 0.3, 0.5).unwrap();
/// assert!(px > 0.0);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Result<f64, FormulaError> {
    match option_type {
        OptionType::Call => black_scholes_call(s, k, r, sigma, t),
        OptionType::Put => black_scholes_put(s, k, r, sigma, t),
    }
}

/// Recovers the missing leg of put-call parity, `C - P = S - K * e^(-rt)`.
///
/// Exactly one of `call_price` / `put_price` must be `Some`; the function
/// returns the other leg's price.
///
/// # Errors
/// Returns [`FormulaError::InvalidInput`] when both or neither leg is
/// supplied.
///
/// # Examples
/// ```rust
/// use closedform::pricing::european::put_call_parity;
///
/// let put = put_call_parity(Some(10.45), None, 100.0, 100.0, 0.05, 1.0).unwrap();
/// assert!((put - 5.573).abs() < 0.01);
/// ```
pub fn put_call_parity(
    call_price: Option<f64>,
    put_price: Option<f64>,
    s: f64,
    k: f64,
    r: f64,
    t: f64,
) -> Result<f64, FormulaError> {
    let forward_gap = s - k * (-r * t).exp();
    match (call_price, put_price) {
        (Some(call), None) => Ok(call - forward_gap),
        (None, Some(put)) => Ok(put + forward_gap),
        _ => Err(FormulaError::InvalidInput(
            "exactly one of call price or put price must be supplied".to_string(),
        )),
    }
}

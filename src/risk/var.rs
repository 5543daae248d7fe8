//! Value-at-Risk estimators: historical (empirical quantile) and
//! delta-normal (parametric).
//!
//! The module uses a loss-positive convention (`loss = -pnl`) and returns
//! non-negative tail metrics. Empirical quantiles are sample-size sensitive
//! at high confidence; parametric VaR scales annual volatility by
//! `sqrt(horizon_days / 252)`.

use crate::math::normal_inv_cdf;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Historical Value-at-Risk from a P&L sample.
///
/// Positive P&L values are profits and negative values are losses. Returned
/// VaR is a positive loss number.
///
/// # Panics
/// Panics if `pnl` is empty or `confidence` is outside `(0, 1)`.
///
/// # Examples
/// ```rust
/// use closedform::risk::var::historical_var;
///
/// let pnl = [-2.0, -1.0, 0.5, 1.0, -0.2];
/// let var_95 = historical_var(&pnl, 0.95);
/// assert!(var_95 >= 0.0);
/// ```
pub fn historical_var(pnl: &[f64], confidence: f64) -> f64 {
    assert!(!pnl.is_empty(), "pnl must not be empty");
    assert!(
        confidence > 0.0 && confidence < 1.0,
        "confidence must be in (0,1)"
    );

    let mut losses: Vec<f64> = pnl.iter().map(|x| -x).collect();
    empirical_quantile(&mut losses, confidence).max(0.0)
}

/// Delta-normal parametric VaR for a linear position.
///
/// `position_delta` is the currency exposure to a one-unit return move.
///
/// # Panics
/// Panics if `confidence` is outside `(0, 1)`, `annual_volatility` is
/// negative or non-finite, or `horizon_days <= 0`.
///
/// # Examples
/// ```rust
/// use closedform::risk::var::delta_normal_var;
///
/// let var_99 = delta_normal_var(1.0, 0.20, 0.99, 1.0);
/// assert!(var_99 > 0.0);
/// ```
pub fn delta_normal_var(
    position_delta: f64,
    annual_volatility: f64,
    confidence: f64,
    horizon_days: f64,
) -> f64 {
    assert!(
        confidence > 0.0 && confidence < 1.0,
        "confidence must be in (0,1)"
    );
    assert!(
        annual_volatility.is_finite() && annual_volatility >= 0.0,
        "annual_volatility must be finite and >= 0"
    );
    assert!(
        horizon_days.is_finite() && horizon_days > 0.0,
        "horizon_days must be finite and > 0"
    );

    let z = normal_inv_cdf(confidence);
    let sigma_h = annual_volatility * (horizon_days / TRADING_DAYS_PER_YEAR).sqrt();
    position_delta.abs() * sigma_h * z
}

fn empirical_quantile(sample: &mut [f64], p: f64) -> f64 {
    sample.sort_by(|a, b| a.total_cmp(b));
    if sample.len() == 1 {
        return sample[0];
    }

    let rank = p * (sample.len() as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sample[lo]
    } else {
        let w = rank - lo as f64;
        sample[lo] + w * (sample[hi] - sample[lo])
    }
}

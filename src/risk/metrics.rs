//! Return-series statistics and risk-adjusted performance ratios.
//!
//! Preconditions are checked with documented panics: empty samples or
//! non-positive risk denominators are programmer errors here, not
//! data-dependent failure paths.

/// Arithmetic mean of a return series.
///
/// # Panics
/// Panics if `returns` is empty.
pub fn mean_return(returns: &[f64]) -> f64 {
    assert!(!returns.is_empty(), "returns must not be empty");
    returns.iter().sum::<f64>() / returns.len() as f64
}

/// Sample standard deviation (n - 1 denominator) of a return series.
///
/// # Panics
/// Panics if `returns` has fewer than two observations.
pub fn volatility(returns: &[f64]) -> f64 {
    assert!(returns.len() >= 2, "need at least two observations");
    let mean = mean_return(returns);
    let ss = returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>();
    (ss / (returns.len() - 1) as f64).sqrt()
}

/// Downside deviation against a minimum acceptable return: root mean square
/// of shortfalls below `mar` over the full sample size.
///
/// # Panics
/// Panics if `returns` is empty.
pub fn downside_deviation(returns: &[f64], mar: f64) -> f64 {
    assert!(!returns.is_empty(), "returns must not be empty");
    let ss = returns
        .iter()
        .map(|r| (r - mar).min(0.0))
        .map(|d| d * d)
        .sum::<f64>();
    (ss / returns.len() as f64).sqrt()
}

/// Sharpe ratio, `(rp - rf) / volatility`.
///
/// # Panics
/// Panics if `volatility <= 0`.
pub fn sharpe_ratio(portfolio_return: f64, risk_free_rate: f64, volatility: f64) -> f64 {
    assert!(volatility > 0.0, "volatility must be > 0");
    (portfolio_return - risk_free_rate) / volatility
}

/// Sortino ratio, `(rp - rf) / downside_deviation`.
///
/// # Panics
/// Panics if `downside_deviation <= 0`.
pub fn sortino_ratio(
    portfolio_return: f64,
    risk_free_rate: f64,
    downside_deviation: f64,
) -> f64 {
    assert!(downside_deviation > 0.0, "downside deviation must be > 0");
    (portfolio_return - risk_free_rate) / downside_deviation
}

/// Treynor ratio, `(rp - rf) / beta`.
///
/// # Panics
/// Panics if `beta == 0`.
pub fn treynor_ratio(portfolio_return: f64, risk_free_rate: f64, beta: f64) -> f64 {
    assert!(beta != 0.0, "beta must be nonzero");
    (portfolio_return - risk_free_rate) / beta
}

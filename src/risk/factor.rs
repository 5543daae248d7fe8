//! Expected-return factor models: CAPM, Fama-French three-factor, and
//! arbitrage pricing theory.

/// One factor's loading and premium for [`arbitrage_pricing`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorExposure {
    /// Sensitivity of the asset to the factor.
    pub beta: f64,
    /// Expected factor risk premium.
    pub premium: f64,
}

/// CAPM expected return, `rf + beta * (rm - rf)`.
///
/// # Examples
/// ```rust
/// use closedform::risk::factor::capm_expected_return;
///
/// let er = capm_expected_return(0.02, 1.2, 0.08);
/// assert!((er - 0.092).abs() < 1e-12);
/// ```
pub fn capm_expected_return(
    risk_free_rate: f64,
    beta: f64,
    expected_market_return: f64,
) -> f64 {
    risk_free_rate + beta * (expected_market_return - risk_free_rate)
}

/// Fama-French three-factor expected return: market, size (SMB), and value
/// (HML) premia with their loadings.
#[allow(clippy::too_many_arguments)]
pub fn fama_french_3factor(
    risk_free_rate: f64,
    market_beta: f64,
    market_premium: f64,
    size_beta: f64,
    size_premium: f64,
    value_beta: f64,
    value_premium: f64,
) -> f64 {
    risk_free_rate
        + market_beta * market_premium
        + size_beta * size_premium
        + value_beta * value_premium
}

/// Arbitrage-pricing-theory expected return over an arbitrary factor set,
/// `rf + sum(beta_i * premium_i)`.
pub fn arbitrage_pricing(risk_free_rate: f64, exposures: &[FactorExposure]) -> f64 {
    risk_free_rate
        + exposures
            .iter()
            .map(|f| f.beta * f.premium)
            .sum::<f64>()
}

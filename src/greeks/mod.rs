//! Black-Scholes sensitivities (Delta, Gamma, Theta, Vega).
//!
//! Each function recomputes `d1`/`d2` from its inputs — repeated computation
//! is traded for statelessness, so nothing is shared between calls.

use crate::core::{FormulaError, OptionType};
use crate::math::{normal_cdf, normal_pdf};
use crate::pricing::european::d1_d2;

/// Sensitivities of a Black-Scholes option price.
///
/// The fields correspond to:
/// - `delta = dV/dS`
/// - `gamma = d²V/dS²`
/// - `theta = dV/dt` (calendar decay, call-side)
/// - `vega = dV/dσ`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
}

/// First derivative of the option price to spot: `N(d1)` for a call,
/// `N(d1) - 1` for a put.
///
/// # Examples
/// ```rust
/// use closedform::core::OptionType;
/// use closedform::greeks::delta;
///
/// let call = delta(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// let put = delta(OptionType::Put, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((call - put - 1.0).abs() < 1e-12);
/// ```
pub fn delta(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Result<f64, FormulaError> {
    let (d1, _) = d1_d2(s, k, r, sigma, t)?;
    match option_type {
        OptionType::Call => Ok(normal_cdf(d1)),
        OptionType::Put => Ok(normal_cdf(d1) - 1.0),
    }
}

/// Second derivative to spot, `N'(d1) / (s * sigma * sqrt(t))`. Identical
/// for calls and puts, and strictly positive on the valid domain.
pub fn gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, FormulaError> {
    let (d1, _) = d1_d2(s, k, r, sigma, t)?;
    Ok(normal_pdf(d1) / (s * sigma * t.sqrt()))
}

/// Call-side calendar decay:
/// `-s * sigma * N'(d1) / (2 * sqrt(t)) - r * k * e^(-rt) * N(d2)`.
///
/// This model provides theta for calls only; a put theta can be derived from
/// put-call parity by the caller.
pub fn theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, FormulaError> {
    let (d1, d2) = d1_d2(s, k, r, sigma, t)?;
    let decay = -(s * sigma * normal_pdf(d1)) / (2.0 * t.sqrt());
    Ok(decay - r * k * (-r * t).exp() * normal_cdf(d2))
}

/// First derivative to volatility, `s * sqrt(t) * N'(d1)`. Identical for
/// calls and puts, and strictly positive on the valid domain.
pub fn vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, FormulaError> {
    let (d1, _) = d1_d2(s, k, r, sigma, t)?;
    Ok(s * t.sqrt() * normal_pdf(d1))
}

/// Bundles the four call-side sensitivities into one [`Greeks`] value.
///
/// # Examples
/// ```rust
/// use closedform::greeks::call_greeks;
///
/// let g = call_greeks(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!(g.delta > 0.5 && g.theta < 0.0);
/// ```
pub fn call_greeks(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<Greeks, FormulaError> {
    Ok(Greeks {
        delta: delta(OptionType::Call, s, k, r, sigma, t)?,
        gamma: gamma(s, k, r, sigma, t)?,
        theta: theta(s, k, r, sigma, t)?,
        vega: vega(s, k, r, sigma, t)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::european::black_scholes_call;
    use approx::assert_relative_eq;

    #[test]
    fn atm_reference_values() {
        // S=100, K=100, r=0.05, sigma=0.20, T=1.0 (QuantLib-checked setup).
        let g = call_greeks(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();

        assert_relative_eq!(g.delta, 0.636831, epsilon = 1e-5);
        assert_relative_eq!(g.gamma, 0.018762, epsilon = 1e-5);
        assert_relative_eq!(g.theta, -6.414028, epsilon = 1e-4);
        assert_relative_eq!(g.vega, 37.524035, epsilon = 1e-4);
    }

    #[test]
    fn gamma_and_vega_positive_across_grid() {
        for &k in &[60.0, 85.0, 100.0, 115.0, 160.0] {
            for &sigma in &[0.05, 0.2, 0.6] {
                for &t in &[0.1, 1.0, 3.0] {
                    let g = gamma(100.0, k, 0.03, sigma, t).unwrap();
                    let v = vega(100.0, k, 0.03, sigma, t).unwrap();
                    assert!(g > 0.0, "gamma k={k} sigma={sigma} t={t}");
                    assert!(v > 0.0, "vega k={k} sigma={sigma} t={t}");
                }
            }
        }
    }

    #[test]
    fn delta_matches_finite_difference() {
        let s = 100.0;
        let k = 105.0;
        let r = 0.02;
        let sigma = 0.25;
        let t = 0.75;
        let ds = 1e-3;

        let up = black_scholes_call(s + ds, k, r, sigma, t).unwrap();
        let dn = black_scholes_call(s - ds, k, r, sigma, t).unwrap();
        let fd = (up - dn) / (2.0 * ds);

        let analytic = delta(OptionType::Call, s, k, r, sigma, t).unwrap();
        assert_relative_eq!(analytic, fd, epsilon = 1e-6);
    }

    #[test]
    fn vega_matches_finite_difference() {
        let s = 100.0;
        let k = 95.0;
        let r = 0.04;
        let sigma = 0.3;
        let t = 2.0;
        let dv = 1e-5;

        let up = black_scholes_call(s, k, r, sigma + dv, t).unwrap();
        let dn = black_scholes_call(s, k, r, sigma - dv, t).unwrap();
        let fd = (up - dn) / (2.0 * dv);

        assert_relative_eq!(vega(s, k, r, sigma, t).unwrap(), fd, epsilon = 1e-4);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(delta(OptionType::Call, 100.0, 100.0, 0.05, -0.2, 1.0).is_err());
        assert!(gamma(100.0, 100.0, 0.05, 0.2, -1.0).is_err());
        assert!(theta(0.0, 100.0, 0.05, 0.2, 1.0).is_err());
        assert!(vega(100.0, 0.0, 0.05, 0.2, 1.0).is_err());
    }
}

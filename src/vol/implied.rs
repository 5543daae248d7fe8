//! Implied-volatility inversion by Newton-Raphson.
//!
//! Inverts `black_scholes_call(sigma) = market_price` for `sigma`, using the
//! analytic vega as the derivative of each step.
//!
//! Numerical considerations: Newton stagnates when vega is tiny (deep
//! ITM/OTM, short-dated); that degeneracy is reported as a
//! [`FormulaError::NumericalError`] instead of letting NaN propagate. Hitting
//! the iteration cap is not an error — the last iterate is returned with
//! `converged == false` so callers can decide what convergence is worth.

use crate::core::FormulaError;
use crate::math::normal_pdf;
use crate::pricing::european::black_scholes_call;

/// Default Newton iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Default absolute pricing-error tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Vega below this is treated as a degenerate derivative.
const MIN_VEGA: f64 = 1e-10;
/// Floor keeping an aggressive Newton step inside the sigma > 0 domain.
const MIN_SIGMA: f64 = 1e-6;

/// Outcome of a Newton-Raphson implied-volatility solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVol {
    /// Final volatility iterate.
    pub sigma: f64,
    /// Newton iterations consumed.
    pub iterations: usize,
    /// Whether `|price(sigma) - market_price| < tolerance` was met.
    pub converged: bool,
}

/// Solves for implied volatility with the default tolerance (`1e-4`) and
/// iteration cap (`100`).
///
/// # Examples
/// ```rust
/// use closedform::pricing::european::black_scholes_call;
/// use closedform::vol::implied::implied_volatility;
///
/// let price = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// let solved = implied_volatility(price, 100.0, 100.0, 0.05, 1.0, 0.1).unwrap();
/// assert!(solved.converged);
/// assert!((solved.sigma - 0.2).abs() < 1e-3);
/// ```
pub fn implied_volatility(
    market_price: f64,
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    initial_guess: f64,
) -> Result<ImpliedVol, FormulaError> {
    implied_volatility_with(
        market_price,
        s,
        k,
        r,
        t,
        initial_guess,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    )
}

/// Newton-Raphson implied-volatility solver with explicit tolerance and
/// iteration cap.
///
/// Each step evaluates `f(sigma) = call(sigma) - market_price` and divides by
/// the analytic vega. Iteration stops as soon as `|f| < tolerance`; if the
/// cap is reached first, the last iterate is returned with
/// `converged == false`.
///
/// # Errors
/// - [`FormulaError::InvalidInput`] when `market_price < 0` or
///   `initial_guess <= 0`.
/// - [`FormulaError::DomainError`] when the Black-Scholes preconditions on
///   `s`, `k`, `t` fail.
/// - [`FormulaError::NumericalError`] when vega collapses below `1e-10` and
///   no Newton step can be taken.
#[allow(clippy::too_many_arguments)]
pub fn implied_volatility_with(
    market_price: f64,
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    initial_guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<ImpliedVol, FormulaError> {
    if !market_price.is_finite() || market_price < 0.0 {
        return Err(FormulaError::InvalidInput(
            "market price must be finite and >= 0".to_string(),
        ));
    }
    if !initial_guess.is_finite() || initial_guess <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "initial volatility guess must be > 0".to_string(),
        ));
    }
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "tolerance must be > 0".to_string(),
        ));
    }

    let sqrt_t = t.sqrt();
    let mut sigma = initial_guess;

    for n in 0..max_iterations {
        let price = black_scholes_call(s, k, r, sigma, t)?;
        let diff = price - market_price;
        if diff.abs() < tolerance {
            return Ok(ImpliedVol {
                sigma,
                iterations: n,
                converged: true,
            });
        }

        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
        let vega = s * normal_pdf(d1) * sqrt_t;
        if vega.abs() < MIN_VEGA {
            return Err(FormulaError::NumericalError(
                "vega is too close to zero for a Newton step".to_string(),
            ));
        }

        sigma = (sigma - diff / vega).max(MIN_SIGMA);
    }

    Ok(ImpliedVol {
        sigma,
        iterations: max_iterations,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn recovers_true_sigma_atm() {
        let s = 100.0;
        let k = 100.0;
        let r = 0.05;
        let t = 1.0;
        let sigma = 0.2;

        let price = black_scholes_call(s, k, r, sigma, t).unwrap();
        let solved = implied_volatility(price, s, k, r, t, 0.1).unwrap();

        assert!(solved.converged);
        assert_relative_eq!(solved.sigma, sigma, epsilon = 1e-3);
    }

    #[test]
    fn left_inverse_of_call_price_across_sigmas() {
        let s = 100.0;
        let k = 105.0;
        let r = 0.03;
        let t = 1.5;

        for &sigma in &[0.05, 0.15, 0.3, 0.6, 1.2, 2.5, 5.0] {
            let price = black_scholes_call(s, k, r, sigma, t).unwrap();
            for &offset in &[-0.1, 0.25, 0.5] {
                let guess = (sigma + offset).max(0.05);
                let solved =
                    implied_volatility_with(price, s, k, r, t, guess, 1e-8, 200).unwrap();
                assert!(
                    solved.converged,
                    "sigma={sigma} guess={guess} its={}",
                    solved.iterations
                );
                assert_relative_eq!(solved.sigma, sigma, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn reprices_the_market_price() {
        let s = 100.0;
        let k = 92.0;
        let r = 0.02;
        let t = 0.8;
        let market = black_scholes_call(s, k, r, 0.33, t).unwrap();

        let solved = implied_volatility_with(market, s, k, r, t, 0.1, 1e-10, 200).unwrap();
        let repriced = black_scholes_call(s, k, r, solved.sigma, t).unwrap();
        assert_relative_eq!(repriced, market, epsilon = 1e-9);
    }

    #[test]
    fn iteration_cap_returns_last_iterate_unconverged() {
        let s = 100.0;
        let k = 100.0;
        let r = 0.05;
        let t = 1.0;
        let price = black_scholes_call(s, k, r, 0.2, t).unwrap();

        // Zero allowed iterations: the guess comes straight back, flagged.
        let solved = implied_volatility_with(price, s, k, r, t, 0.9, 1e-12, 0).unwrap();
        assert!(!solved.converged);
        assert_relative_eq!(solved.sigma, 0.9, epsilon = 1e-15);
        assert_eq!(solved.iterations, 0);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            implied_volatility(-1.0, 100.0, 100.0, 0.05, 1.0, 0.2),
            Err(FormulaError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_volatility(10.0, 100.0, 100.0, 0.05, 1.0, 0.0),
            Err(FormulaError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_volatility(10.0, 100.0, 100.0, 0.05, -1.0, 0.2),
            Err(FormulaError::DomainError(_))
        ));
    }

    #[test]
    fn degenerate_vega_is_reported() {
        // Far out-of-the-money, near-zero guess: price is ~0, vega collapses.
        let err = implied_volatility_with(5.0, 100.0, 300.0, 0.0, 0.05, 0.01, 1e-12, 100);
        assert!(matches!(err, Err(FormulaError::NumericalError(_))));
    }
}

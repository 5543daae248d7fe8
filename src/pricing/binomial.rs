//! Module `pricing::binomial`.
//!
//! Cox-Ross-Rubinstein binomial lattice for American-style call valuation
//! with early exercise checked at every node.
//!
//! References: Cox, Ross, and Rubinstein (1979); Hull (11th ed.) Ch. 13 and
//! the backward-induction recursion around Eq. (13.10).
//!
//! Numerical considerations: the lattice has O(steps²) nodes and that is the
//! dominant cost — the per-step inner loop runs over one flat buffer and the
//! node asset values follow a multiplicative recurrence instead of per-node
//! `powf` calls. Convergence to the continuous-time price is first-order in
//! the step count.

use crate::core::FormulaError;

/// Prices an American-style call on a CRR binomial lattice.
///
/// The underlying state is the project/asset present value and the strike is
/// the investment cost; with `u = e^(sigma * sqrt(dt))`, `d = 1/u`, and
/// risk-neutral probability `p = (e^(r*dt) - d)/(u - d)`, terminal payoffs
/// `max(S_node - K, 0)` are rolled back through the tree, taking
/// `max(continuation, exercise)` at every intermediate node.
///
/// Tree size is O(steps²) in time and O(steps) in memory; the step count is
/// uncapped, but a few thousand steps is typically far more resolution than
/// the first-order convergence can use.
///
/// # Errors
/// Fails fast with [`FormulaError::InvalidInput`] before any computation when
/// an input is out of range (first failing check wins, in argument order),
/// and with [`FormulaError::NumericalError`] if the risk-neutral probability
/// falls outside `[0, 1]`.
///
/// # Examples
/// ```rust
/// use closedform::pricing::binomial::binomial_model;
///
/// let px = binomial_model(100.0, 90.0, 1.0, 0.05, 0.20, 2).unwrap();
/// assert!((px - 17.1599).abs() < 1e-3);
///
/// assert!(binomial_model(100.0, 90.0, 1.0, 0.05, 0.20, 0).is_err());
/// ```
pub fn binomial_model(
    present_value: f64,
    investment_cost: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    steps: usize,
) -> Result<f64, FormulaError> {
    if !present_value.is_finite() || present_value <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "present value must be > 0".to_string(),
        ));
    }
    if !investment_cost.is_finite() || investment_cost <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "investment cost must be > 0".to_string(),
        ));
    }
    if !time_to_expiry.is_finite() || time_to_expiry <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "time to expiry must be > 0".to_string(),
        ));
    }
    if !risk_free_rate.is_finite() {
        return Err(FormulaError::InvalidInput(
            "risk-free rate must be a finite number".to_string(),
        ));
    }
    if !volatility.is_finite() || volatility <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "volatility must be > 0".to_string(),
        ));
    }
    if steps == 0 {
        return Err(FormulaError::InvalidInput(
            "number of steps must be a positive integer".to_string(),
        ));
    }

    let dt = time_to_expiry / steps as f64;
    let u = (volatility * dt.sqrt()).exp();
    let d = 1.0 / u;
    let growth = (risk_free_rate * dt).exp();
    let p = (growth - d) / (u - d);
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(FormulaError::NumericalError(
            "risk-neutral probability is outside [0, 1]".to_string(),
        ));
    }

    let disc = (-risk_free_rate * dt).exp();
    let disc_p = disc * p;
    let disc_1mp = disc * (1.0 - p);

    // Asset values per layer via spot * d^i * (u/d)^j, lowest node first.
    let ratio = u / d;

    let mut values = vec![0.0_f64; steps + 1];
    {
        let mut st = present_value * d.powi(steps as i32);
        for value in values.iter_mut() {
            *value = (st - investment_cost).max(0.0);
            st *= ratio;
        }
    }

    let mut base = present_value * d.powi(steps as i32 - 1);
    for i in (0..steps).rev() {
        let mut st = base;
        for j in 0..=i {
            let continuation = disc_p * values[j + 1] + disc_1mp * values[j];
            let exercise = (st - investment_cost).max(0.0);
            values[j] = continuation.max(exercise);
            st *= ratio;
        }
        base *= u;
    }

    Ok(values[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::european::black_scholes_call;
    use approx::assert_relative_eq;

    #[test]
    fn two_step_tree_known_value() {
        let px = binomial_model(100.0, 90.0, 1.0, 0.05, 0.2, 2).unwrap();
        assert_relative_eq!(px, 17.159870, epsilon = 1e-5);
    }

    #[test]
    fn one_step_tree_matches_hand_rollback() {
        // u = e^0.2, d = 1/u, p = (e^0.05 - d)/(u - d), single discounted step.
        let u = 0.2_f64.exp();
        let d = 1.0 / u;
        let p = (0.05_f64.exp() - d) / (u - d);
        let expected = (-0.05_f64).exp() * p * (100.0 * u - 90.0);

        let px = binomial_model(100.0, 90.0, 1.0, 0.05, 0.2, 1).unwrap();
        assert_relative_eq!(px, expected.max(10.0), epsilon = 1e-10);
    }

    #[test]
    fn converges_to_black_scholes_for_calls() {
        // No dividends, so early exercise carries no premium and the lattice
        // limit is the European closed form.
        let bs = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        let tree = binomial_model(100.0, 100.0, 1.0, 0.05, 0.2, 100).unwrap();
        assert!((tree - bs).abs() / bs < 0.01, "tree={tree} bs={bs}");

        let tree_fine = binomial_model(100.0, 100.0, 1.0, 0.05, 0.2, 500).unwrap();
        assert!((tree_fine - bs).abs() < (tree - bs).abs() + 1e-6);
    }

    #[test]
    fn price_is_at_least_intrinsic() {
        let px = binomial_model(120.0, 100.0, 0.5, 0.03, 0.25, 50).unwrap();
        assert!(px >= 20.0);

        let otm = binomial_model(80.0, 100.0, 0.5, 0.03, 0.25, 50).unwrap();
        assert!(otm >= 0.0);
    }

    #[test]
    fn validation_order_reports_first_failure() {
        let err = binomial_model(0.0, 0.0, 0.0, f64::NAN, 0.0, 0).unwrap_err();
        assert_eq!(
            err,
            FormulaError::InvalidInput("present value must be > 0".to_string())
        );

        let err = binomial_model(100.0, -1.0, 0.0, 0.05, 0.2, 0).unwrap_err();
        assert_eq!(
            err,
            FormulaError::InvalidInput("investment cost must be > 0".to_string())
        );

        let err = binomial_model(100.0, 90.0, 1.0, 0.05, 0.2, 0).unwrap_err();
        assert_eq!(
            err,
            FormulaError::InvalidInput("number of steps must be a positive integer".to_string())
        );
    }

    #[test]
    fn extreme_rate_fails_with_numerical_error() {
        // growth factor exceeds the up move, so p > 1.
        let err = binomial_model(100.0, 100.0, 1.0, 0.5, 0.05, 1).unwrap_err();
        assert!(matches!(err, FormulaError::NumericalError(_)));
    }
}

//! Foreign-exchange parity relations under discrete annual compounding.

/// Covered interest-rate-parity forward,
/// `spot * ((1 + r_domestic) / (1 + r_foreign))^t`.
///
/// Quote convention: `spot` is domestic currency per unit of foreign.
///
/// # Panics
/// Panics if `spot <= 0`, either rate is `<= -1`, or `t < 0`.
///
/// # Examples
/// ```rust
/// use closedform::fx::covered_interest_parity_forward;
///
/// let fwd = covered_interest_parity_forward(1.30, 0.05, 0.03, 1.0);
/// assert!((fwd - 1.325243).abs() < 1e-6);
/// ```
pub fn covered_interest_parity_forward(
    spot: f64,
    domestic_rate: f64,
    foreign_rate: f64,
    t: f64,
) -> f64 {
    assert!(spot > 0.0, "spot must be > 0");
    assert!(domestic_rate > -1.0, "domestic rate must be > -100%");
    assert!(foreign_rate > -1.0, "foreign rate must be > -100%");
    assert!(t >= 0.0, "t must be >= 0");
    spot * ((1.0 + domestic_rate) / (1.0 + foreign_rate)).powf(t)
}

/// Relative purchasing-power-parity expected spot,
/// `spot * ((1 + inflation_domestic) / (1 + inflation_foreign))^t`.
///
/// # Panics
/// Same preconditions as [`covered_interest_parity_forward`].
pub fn purchasing_power_parity_spot(
    spot: f64,
    domestic_inflation: f64,
    foreign_inflation: f64,
    t: f64,
) -> f64 {
    assert!(spot > 0.0, "spot must be > 0");
    assert!(domestic_inflation > -1.0, "domestic inflation must be > -100%");
    assert!(foreign_inflation > -1.0, "foreign inflation must be > -100%");
    assert!(t >= 0.0, "t must be >= 0");
    spot * ((1.0 + domestic_inflation) / (1.0 + foreign_inflation)).powf(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_reference_value() {
        let fwd = covered_interest_parity_forward(1.30, 0.05, 0.03, 1.0);
        assert_relative_eq!(fwd, 1.3252427, epsilon = 1e-6);
    }

    #[test]
    fn zero_horizon_returns_spot() {
        assert_relative_eq!(
            covered_interest_parity_forward(1.30, 0.05, 0.03, 0.0),
            1.30,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            purchasing_power_parity_spot(110.0, 0.02, 0.01, 0.0),
            110.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn higher_domestic_carry_weakens_the_forward() {
        // Higher domestic rates push the forward above spot and vice versa.
        let up = covered_interest_parity_forward(1.0, 0.06, 0.02, 1.0);
        let down = covered_interest_parity_forward(1.0, 0.02, 0.06, 1.0);
        assert!(up > 1.0);
        assert!(down < 1.0);
        assert_relative_eq!(up * down, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ppp_compounds_inflation_differential() {
        let one_year = purchasing_power_parity_spot(100.0, 0.08, 0.02, 1.0);
        let two_year = purchasing_power_parity_spot(100.0, 0.08, 0.02, 2.0);
        assert_relative_eq!(two_year, one_year * one_year / 100.0, epsilon = 1e-9);
    }
}

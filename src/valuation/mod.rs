//! Validated corporate and on-chain valuation utilities.
//!
//! Unlike the statistics helpers, every function here returns a
//! `Result` — these ratios sit at the edge of user-supplied data, where a
//! zero denominator or a negative input is an expected failure, not a
//! programmer error.

use crate::core::FormulaError;

fn require_finite(value: f64, what: &str) -> Result<(), FormulaError> {
    if !value.is_finite() {
        return Err(FormulaError::InvalidInput(format!(
            "{what} must be a finite number"
        )));
    }
    Ok(())
}

/// Adjusted present value: base-case unlevered NPV plus the present value of
/// financing side effects.
pub fn adjusted_present_value(
    unlevered_npv: f64,
    financing_side_effects: f64,
) -> Result<f64, FormulaError> {
    require_finite(unlevered_npv, "unlevered npv")?;
    require_finite(financing_side_effects, "financing side effects")?;
    Ok(unlevered_npv + financing_side_effects)
}

/// Debt-service coverage ratio, `net operating income / total debt service`.
///
/// # Errors
/// Returns [`FormulaError::InvalidInput`] when the debt service is not a
/// positive finite number.
pub fn debt_service_coverage_ratio(
    net_operating_income: f64,
    total_debt_service: f64,
) -> Result<f64, FormulaError> {
    require_finite(net_operating_income, "net operating income")?;
    if !total_debt_service.is_finite() || total_debt_service <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "total debt service must be > 0".to_string(),
        ));
    }
    Ok(net_operating_income / total_debt_service)
}

/// Return on equity, `net income / shareholders' equity`.
pub fn return_on_equity(
    net_income: f64,
    shareholders_equity: f64,
) -> Result<f64, FormulaError> {
    require_finite(net_income, "net income")?;
    if !shareholders_equity.is_finite() || shareholders_equity == 0.0 {
        return Err(FormulaError::InvalidInput(
            "shareholders' equity must be nonzero".to_string(),
        ));
    }
    Ok(net_income / shareholders_equity)
}

/// Return on assets, `net income / total assets`.
pub fn return_on_assets(net_income: f64, total_assets: f64) -> Result<f64, FormulaError> {
    require_finite(net_income, "net income")?;
    if !total_assets.is_finite() || total_assets <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "total assets must be > 0".to_string(),
        ));
    }
    Ok(net_income / total_assets)
}

/// Insurance loss ratio, `incurred losses / earned premiums`.
pub fn loss_ratio(incurred_losses: f64, earned_premiums: f64) -> Result<f64, FormulaError> {
    if !incurred_losses.is_finite() || incurred_losses < 0.0 {
        return Err(FormulaError::InvalidInput(
            "incurred losses must be >= 0".to_string(),
        ));
    }
    if !earned_premiums.is_finite() || earned_premiums <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "earned premiums must be > 0".to_string(),
        ));
    }
    Ok(incurred_losses / earned_premiums)
}

/// Network-value-to-transactions ratio, `network value / daily transaction
/// volume`.
///
/// # Examples
/// ```rust
/// use closedform::valuation::nvt_ratio;
///
/// let nvt = nvt_ratio(1.0e9, 2.0e7).unwrap();
/// assert!((nvt - 50.0).abs() < 1e-12);
/// ```
pub fn nvt_ratio(
    network_value: f64,
    daily_transaction_volume: f64,
) -> Result<f64, FormulaError> {
    if !network_value.is_finite() || network_value < 0.0 {
        return Err(FormulaError::InvalidInput(
            "network value must be >= 0".to_string(),
        ));
    }
    if !daily_transaction_volume.is_finite() || daily_transaction_volume <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "daily transaction volume must be > 0".to_string(),
        ));
    }
    Ok(network_value / daily_transaction_volume)
}

/// Stock-to-flow ratio, `circulating stock / annual flow`.
pub fn stock_to_flow(stock: f64, flow: f64) -> Result<f64, FormulaError> {
    if !stock.is_finite() || stock < 0.0 {
        return Err(FormulaError::InvalidInput("stock must be >= 0".to_string()));
    }
    if !flow.is_finite() || flow <= 0.0 {
        return Err(FormulaError::InvalidInput("flow must be > 0".to_string()));
    }
    Ok(stock / flow)
}

/// Realized capitalization: each lot valued at the price it last moved,
/// `sum(amount_i * price_i)`.
///
/// # Errors
/// Returns [`FormulaError::InvalidInput`] when any lot has a negative or
/// non-finite amount or price.
pub fn realized_cap(lots: &[(f64, f64)]) -> Result<f64, FormulaError> {
    let mut total = 0.0;
    for &(amount, price) in lots {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FormulaError::InvalidInput(
                "lot amount must be >= 0".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(FormulaError::InvalidInput(
                "lot price must be >= 0".to_string(),
            ));
        }
        total += amount * price;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn apv_sums_base_and_financing() {
        assert_relative_eq!(
            adjusted_present_value(1_000_000.0, 150_000.0).unwrap(),
            1_150_000.0,
            epsilon = 1e-9
        );
        assert!(adjusted_present_value(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn dscr_reference_value() {
        assert_relative_eq!(
            debt_service_coverage_ratio(120_000.0, 100_000.0).unwrap(),
            1.2,
            epsilon = 1e-12
        );
        assert!(debt_service_coverage_ratio(120_000.0, 0.0).is_err());
    }

    #[test]
    fn profitability_ratios() {
        assert_relative_eq!(
            return_on_equity(50_000.0, 400_000.0).unwrap(),
            0.125,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            return_on_assets(50_000.0, 1_000_000.0).unwrap(),
            0.05,
            epsilon = 1e-12
        );
        assert!(return_on_equity(50_000.0, 0.0).is_err());
        assert!(return_on_assets(50_000.0, -10.0).is_err());
    }

    #[test]
    fn loss_ratio_and_bounds() {
        assert_relative_eq!(loss_ratio(60.0, 100.0).unwrap(), 0.6, epsilon = 1e-12);
        assert!(loss_ratio(-1.0, 100.0).is_err());
        assert!(loss_ratio(60.0, 0.0).is_err());
    }

    #[test]
    fn onchain_metrics() {
        assert_relative_eq!(nvt_ratio(1.0e9, 2.0e7).unwrap(), 50.0, epsilon = 1e-12);
        assert_relative_eq!(stock_to_flow(19_000_000.0, 328_500.0).unwrap(), 57.838660, epsilon = 1e-5);
        assert!(stock_to_flow(19_000_000.0, 0.0).is_err());
    }

    #[test]
    fn realized_cap_weights_each_lot() {
        let lots = [(10.0, 100.0), (5.0, 60_000.0), (0.0, 1.0)];
        assert_relative_eq!(realized_cap(&lots).unwrap(), 301_000.0, epsilon = 1e-9);
        assert!(realized_cap(&[(1.0, -5.0)]).is_err());
        assert_relative_eq!(realized_cap(&[]).unwrap(), 0.0, epsilon = 1e-12);
    }
}

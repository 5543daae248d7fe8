//! Time-value-of-money identities: interest accrual, discounting, annuities,
//! and perpetuities.
//!
//! Rates are per period and periods are counts of that same period; nothing
//! here assumes an annual convention. Preconditions are checked with
//! documented panics, matching the statistics modules: these are programmer
//! errors, not data-dependent failures.

/// Interest accrued under simple (non-compounding) growth,
/// `principal * rate * periods`.
pub fn simple_interest(principal: f64, rate: f64, periods: f64) -> f64 {
    principal * rate * periods
}

/// Future value under per-period compounding, `pv * (1 + rate)^periods`.
///
/// # Panics
/// Panics if `rate <= -1`.
pub fn future_value(present: f64, rate: f64, periods: f64) -> f64 {
    assert!(rate > -1.0, "rate must be > -100%");
    present * (1.0 + rate).powf(periods)
}

/// Present value of a single future amount, `fv / (1 + rate)^periods`.
///
/// # Panics
/// Panics if `rate <= -1`.
pub fn present_value(future: f64, rate: f64, periods: f64) -> f64 {
    assert!(rate > -1.0, "rate must be > -100%");
    future * (1.0 + rate).powf(-periods)
}

/// Present value of an ordinary annuity paying `payment` at the end of each
/// of `periods` periods.
///
/// # Examples
/// ```rust
/// use closedform::rates::tvm::annuity_present_value;
///
/// let pv = annuity_present_value(100.0, 0.05, 10);
/// assert!((pv - 772.1735).abs() < 1e-4);
/// ```
pub fn annuity_present_value(payment: f64, rate: f64, periods: u32) -> f64 {
    assert!(rate > -1.0, "rate must be > -100%");
    if rate.abs() < 1.0e-12 {
        return payment * periods as f64;
    }
    payment * (1.0 - (1.0 + rate).powi(-(periods as i32))) / rate
}

/// Future value of an ordinary annuity at the final payment date.
pub fn annuity_future_value(payment: f64, rate: f64, periods: u32) -> f64 {
    assert!(rate > -1.0, "rate must be > -100%");
    if rate.abs() < 1.0e-12 {
        return payment * periods as f64;
    }
    payment * ((1.0 + rate).powi(periods as i32) - 1.0) / rate
}

/// Level payment that retires `principal` over `periods` periods at the
/// given per-period rate (the loan-payment formula).
///
/// # Panics
/// Panics if `rate <= -1` or `periods == 0`.
pub fn annuity_payment(principal: f64, rate: f64, periods: u32) -> f64 {
    assert!(rate > -1.0, "rate must be > -100%");
    assert!(periods > 0, "periods must be > 0");
    if rate.abs() < 1.0e-12 {
        return principal / periods as f64;
    }
    principal * rate / (1.0 - (1.0 + rate).powi(-(periods as i32)))
}

/// Present value of a level perpetuity, `payment / rate`.
///
/// # Panics
/// Panics if `rate <= 0`.
pub fn perpetuity_value(payment: f64, rate: f64) -> f64 {
    assert!(rate > 0.0, "rate must be > 0");
    payment / rate
}

/// Present value of a perpetuity growing at `growth` per period
/// (Gordon growth), `payment / (rate - growth)`.
///
/// # Panics
/// Panics if `rate <= growth`.
pub fn growing_perpetuity_value(payment: f64, rate: f64, growth: f64) -> f64 {
    assert!(rate > growth, "rate must exceed the growth rate");
    payment / (rate - growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn compounding_round_trip() {
        let fv = future_value(1000.0, 0.05, 10.0);
        assert_relative_eq!(fv, 1628.894627, epsilon = 1e-5);
        assert_relative_eq!(present_value(fv, 0.05, 10.0), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn simple_interest_is_linear() {
        assert_relative_eq!(simple_interest(1000.0, 0.05, 2.0), 100.0, epsilon = 1e-12);
        assert_relative_eq!(
            simple_interest(1000.0, 0.05, 4.0),
            2.0 * simple_interest(1000.0, 0.05, 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn annuity_reference_values() {
        assert_relative_eq!(
            annuity_present_value(100.0, 0.05, 10),
            772.173493,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            annuity_future_value(100.0, 0.05, 10),
            1257.789254,
            epsilon = 1e-5
        );
    }

    #[test]
    fn annuity_zero_rate_limits() {
        assert_relative_eq!(annuity_present_value(100.0, 0.0, 10), 1000.0, epsilon = 1e-12);
        assert_relative_eq!(annuity_future_value(100.0, 0.0, 10), 1000.0, epsilon = 1e-12);
        assert_relative_eq!(annuity_payment(1200.0, 0.0, 12), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn payment_amortizes_principal() {
        // 30-year monthly mortgage at 6% nominal annual.
        let pmt = annuity_payment(200_000.0, 0.005, 360);
        assert_relative_eq!(pmt, 1199.101050, epsilon = 1e-5);

        // Paying that level amount discounts back to the principal.
        assert_relative_eq!(
            annuity_present_value(pmt, 0.005, 360),
            200_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn perpetuities() {
        assert_relative_eq!(perpetuity_value(100.0, 0.04), 2500.0, epsilon = 1e-12);
        assert_relative_eq!(
            growing_perpetuity_value(100.0, 0.06, 0.02),
            2500.0,
            epsilon = 1e-12
        );
    }

    #[test]
    #[should_panic(expected = "rate must exceed the growth rate")]
    fn growing_perpetuity_rejects_growth_at_rate() {
        growing_perpetuity_value(100.0, 0.05, 0.05);
    }
}

//! Module `rates::bond`.
//!
//! Fixed-coupon bond analytics under flat per-period compounding: price from
//! yield, current yield, Macaulay/modified duration, and yield-to-maturity.
//!
//! References: Fabozzi, *Bond Markets, Analysis, and Strategies*; Hull
//! (11th ed.) Ch. 4 for duration identities.

use crate::core::FormulaError;
use crate::math::{MathError, newton_raphson};

/// Plain fixed-rate bond.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedRateBond {
    /// Notional/face amount.
    pub face_value: f64,
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Coupon payments per year.
    pub frequency: u32,
    /// Maturity in years.
    pub maturity: f64,
}

impl FixedRateBond {
    /// Dirty price for a flat annual yield `y` compounded `frequency` times
    /// per year.
    ///
    /// # Examples
    /// ```rust
    /// use closedform::rates::FixedRateBond;
    ///
    /// let bond = FixedRateBond {
    ///     face_value: 1000.0,
    ///     coupon_rate: 0.06,
    ///     frequency: 2,
    ///     maturity: 5.0,
    /// };
    /// // Coupon equal to yield prices at par.
    /// assert!((bond.price_from_yield(0.06) - 1000.0).abs() < 1e-6);
    /// ```
    pub fn price_from_yield(&self, y: f64) -> f64 {
        let m = self.frequency.max(1) as f64;
        self.cashflows()
            .iter()
            .map(|(t, cf)| cf * (1.0 + y / m).powf(-m * t))
            .sum()
    }

    /// Annual coupon income over price.
    ///
    /// # Panics
    /// Panics if `price <= 0`.
    pub fn current_yield(&self, price: f64) -> f64 {
        assert!(price > 0.0, "price must be > 0");
        self.face_value * self.coupon_rate / price
    }

    /// Macaulay duration in years at yield `y`.
    pub fn macaulay_duration(&self, y: f64) -> f64 {
        let m = self.frequency.max(1) as f64;
        let price = self.price_from_yield(y);
        if price <= 0.0 {
            return 0.0;
        }

        self.cashflows()
            .iter()
            .map(|(t, cf)| t * cf * (1.0 + y / m).powf(-m * t))
            .sum::<f64>()
            / price
    }

    /// Modified duration, `macaulay / (1 + y/m)`.
    pub fn modified_duration(&self, y: f64) -> f64 {
        let m = self.frequency.max(1) as f64;
        self.macaulay_duration(y) / (1.0 + y / m)
    }

    /// Yield-to-maturity solved by Newton-Raphson against the dirty price.
    ///
    /// # Errors
    /// - [`FormulaError::InvalidInput`] when `market_price <= 0`, the
    ///   coupon schedule is empty, or the bond has no payment frequency.
    /// - [`FormulaError::NumericalError`] when the solver stalls or fails to
    ///   converge.
    ///
    /// # Examples
    /// ```rust
    /// use closedform::rates::FixedRateBond;
    ///
    /// let bond = FixedRateBond {
    ///     face_value: 1000.0,
    ///     coupon_rate: 0.06,
    ///     frequency: 2,
    ///     maturity: 5.0,
    /// };
    /// let price = bond.price_from_yield(0.05);
    /// let ytm = bond.ytm(price).unwrap();
    /// assert!((ytm - 0.05).abs() < 1e-8);
    /// ```
    pub fn ytm(&self, market_price: f64) -> Result<f64, FormulaError> {
        if self.frequency == 0 {
            return Err(FormulaError::InvalidInput(
                "coupon frequency must be > 0".to_string(),
            ));
        }
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(FormulaError::InvalidInput(
                "market price must be > 0".to_string(),
            ));
        }
        let cashflows = self.cashflows();
        if cashflows.is_empty() {
            return Err(FormulaError::InvalidInput(
                "bond has no remaining cashflows".to_string(),
            ));
        }

        let m = self.frequency as f64;
        let f = |y: f64| {
            cashflows
                .iter()
                .map(|(t, cf)| cf * (1.0 + y / m).powf(-m * t))
                .sum::<f64>()
                - market_price
        };
        let df = |y: f64| {
            cashflows
                .iter()
                .map(|(t, cf)| -t * cf * (1.0 + y / m).powf(-m * t - 1.0))
                .sum::<f64>()
        };

        let guess = self.coupon_rate.max(1.0e-4);
        newton_raphson(f, df, guess, 1.0e-10, 100).map_err(|err| match err {
            MathError::ZeroDerivative => {
                FormulaError::NumericalError("yield sensitivity vanished".to_string())
            }
            MathError::NonConvergence => {
                FormulaError::NumericalError("yield solver did not converge".to_string())
            }
            MathError::InvalidInput(msg) => FormulaError::InvalidInput(msg.to_string()),
        })
    }

    fn cashflows(&self) -> Vec<(f64, f64)> {
        if self.frequency == 0 || self.maturity <= 0.0 {
            return Vec::new();
        }

        let period = 1.0 / self.frequency as f64;
        let coupon = self.face_value * self.coupon_rate / self.frequency as f64;

        let mut out = Vec::new();
        let mut t = period;
        while t < self.maturity - 1.0e-12 {
            out.push((t, coupon));
            t += period;
        }
        out.push((self.maturity, coupon + self.face_value));

        out
    }
}

/// Price of a zero-coupon bond under annual compounding,
/// `face / (1 + y)^t`.
///
/// # Panics
/// Panics if `y <= -1`.
pub fn zero_coupon_price(face_value: f64, y: f64, maturity: f64) -> f64 {
    assert!(y > -1.0, "yield must be > -100%");
    face_value * (1.0 + y).powf(-maturity)
}

/// Textbook yield-to-maturity approximation,
/// `(C + (F - P)/n) / ((F + P)/2)`.
///
/// # Panics
/// Panics if `years <= 0` or `face_value + price <= 0`.
pub fn yield_to_maturity_approx(
    face_value: f64,
    price: f64,
    annual_coupon: f64,
    years: f64,
) -> f64 {
    assert!(years > 0.0, "years must be > 0");
    assert!(face_value + price > 0.0, "face value plus price must be > 0");
    (annual_coupon + (face_value - price) / years) / ((face_value + price) / 2.0)
}

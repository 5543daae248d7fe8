//! Common domain types and the library-wide error enum.

pub mod types;

pub use types::*;

/// Errors surfaced by the formula APIs.
///
/// Every expected-invalid-input path returns one of these as a value; the
/// library never panics on bad arguments to a `Result`-returning function and
/// never logs. Presentation is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// A mathematical precondition is violated (for example `sigma <= 0` or
    /// `t <= 0` where a log or a division requires otherwise).
    DomainError(String),
    /// Structural validation error with a human-readable reason.
    InvalidInput(String),
    /// Numerical degeneracy (near-zero derivative, probability outside [0, 1]).
    NumericalError(String),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainError(msg) => write!(f, "domain error: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for FormulaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = FormulaError::InvalidInput("strike must be > 0".to_string());
        assert_eq!(err.to_string(), "invalid input: strike must be > 0");

        let err = FormulaError::DomainError("volatility must be > 0".to_string());
        assert!(err.to_string().starts_with("domain error:"));
    }
}

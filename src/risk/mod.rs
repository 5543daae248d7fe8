//! Portfolio and return-series risk analytics.
//!
//! This module wires and re-exports:
//! - `metrics`: return statistics and risk-adjusted performance ratios,
//! - `var`: historical and delta-normal Value-at-Risk,
//! - `factor`: CAPM, Fama-French, and APT expected-return models.

pub mod factor;
pub mod metrics;
pub mod var;

pub use factor::{FactorExposure, arbitrage_pricing, capm_expected_return, fama_french_3factor};
pub use metrics::{sharpe_ratio, sortino_ratio, treynor_ratio, volatility};
pub use var::{delta_normal_var, historical_var};

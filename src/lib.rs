//! Closedform is a library of closed-form financial formulas: time value of
//! money, loan amortization, bond analytics, Black-Scholes option pricing and
//! Greeks, implied volatility, binomial-lattice valuation, portfolio risk
//! statistics, factor models, and corporate/on-chain valuation ratios.
//!
//! Every function is a pure mapping from numeric inputs to a numeric (or small
//! structured) output: no shared state, no I/O, no caching between calls. The
//! iterative pieces — the Newton-Raphson implied-volatility solver and the
//! binomial lattice — allocate and discard their working state per call, so
//! all entry points are safe to use concurrently without locking.
//!
//! References used across modules include:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13, 15, 19.
//! - Abramowitz and Stegun, *Handbook of Mathematical Functions*, 7.1.26.
//! - Cox, Ross, and Rubinstein (1979) for the lattice parameterization.
//! - Fabozzi, *Bond Markets, Analysis, and Strategies* for fixed-income identities.
//!
//! Numerical considerations:
//! - The normal CDF is a rational polynomial approximation (max abs error
//!   ~7.5e-8); callers must not assume exactness beyond that.
//! - The implied-vol solver reports convergence explicitly; check
//!   [`vol::implied::ImpliedVol::converged`] when the answer matters.
//! - Lattice cost grows as O(steps²); step count is caller-chosen and uncapped.
//!
//! # Feature Flags
//! - `serde`: derives `Serialize`/`Deserialize` on the small public value
//!   structs (Greeks, solver output, amortization rows).
//!
//! # Quick Start
//! Price a Black-Scholes call:
//! ```rust
//! use closedform::pricing::european::black_scholes_call;
//!
//! let px = black_scholes_call(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
//! assert!(px > 10.0 && px < 11.0);
//! ```
//!
//! Compute Greeks:
//! ```rust
//! use closedform::greeks::call_greeks;
//!
//! let g = call_greeks(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
//! assert!(g.delta > 0.0 && g.gamma > 0.0 && g.vega > 0.0);
//! ```
//!
//! Invert implied volatility:
//! ```rust
//! use closedform::pricing::european::black_scholes_call;
//! use closedform::vol::implied::implied_volatility;
//!
//! let sigma_true = 0.25;
//! let market = black_scholes_call(100.0, 105.0, 0.02, sigma_true, 1.0).unwrap();
//! let solved = implied_volatility(market, 100.0, 105.0, 0.02, 1.0, 0.4).unwrap();
//! assert!(solved.converged);
//! assert!((solved.sigma - sigma_true).abs() < 1.0e-4);
//! ```
//!
//! Value an American-style call on a lattice:
//! ```rust
//! use closedform::pricing::binomial::binomial_model;
//!
//! let px = binomial_model(100.0, 90.0, 1.0, 0.05, 0.20, 100).unwrap();
//! assert!(px > 0.0);
//! ```
//!
//! Run a loan amortization:
//! ```rust
//! use closedform::rates::amortization::schedule;
//!
//! let rows = schedule(10_000.0, 0.004, 24);
//! assert_eq!(rows.len(), 24);
//! assert!(rows.last().unwrap().balance.abs() < 1.0e-8);
//! ```

pub mod core;
pub mod fx;
pub mod greeks;
pub mod math;
pub mod pricing;
pub mod rates;
pub mod risk;
pub mod valuation;
pub mod vol;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::greeks::{Greeks, call_greeks};
    pub use crate::pricing::binomial::binomial_model;
    pub use crate::pricing::european::{
        black_scholes_call, black_scholes_price, black_scholes_put, put_call_parity,
    };
    pub use crate::vol::implied::{ImpliedVol, implied_volatility};
}

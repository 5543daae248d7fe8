//! Time-value-of-money, loan, and bond analytics.
//!
//! This module wires and re-exports:
//! - `tvm`: interest, discounting, annuity, and perpetuity identities,
//! - `amortization`: level-payment loan math and full schedules,
//! - `bond`: fixed-coupon bond pricing, durations, and yield solving.

pub mod amortization;
pub mod bond;
pub mod tvm;

pub use bond::{FixedRateBond, yield_to_maturity_approx, zero_coupon_price};

pub mod implied;

pub use implied::{ImpliedVol, implied_volatility, implied_volatility_with};

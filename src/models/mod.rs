//! Pricing models
//!
//! Implements:
//! - Black-Scholes (closed-form European pricing, vega)
//! - Implied volatility (Newton-Raphson inversion)
//! - Smile construction ((strike, implied vol) pairs per expiry)

pub mod black_scholes;
pub mod implied_vol;
pub mod smile;

pub use black_scholes::*;
pub use implied_vol::*;
pub use smile::*;

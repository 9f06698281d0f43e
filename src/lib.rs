//! # IV Options - European Option Pricing Kernel
//!
//! A small options pricing library: closed-form Black-Scholes valuation and
//! an implied volatility solver that inverts it via Newton-Raphson, using
//! vega as the derivative.
//!
//! ## Key Components
//!
//! - **Black-Scholes**: European call/put pricing with continuous dividend
//!   yield, domain-checked before any transcendental evaluation
//! - **Implied Volatility**: unconstrained Newton-Raphson with typed failure
//!   modes instead of sentinel values
//! - **Smile**: (strike, implied vol) pairs from a slice of market quotes
//!
//! ## Usage
//!
//! ```rust
//! use iv_options::prelude::*;
//!
//! let t = 30.0 / 365.0;
//! let call = bs_price(100.0, 100.0, 0.05, 0.0, 0.5, t, OptionType::Call)?;
//!
//! // Invert an observed market price back into a vol
//! let config = SolverConfig::default();
//! let iv = implied_volatility(call, 100.0, 100.0, 0.05, 0.0, t, OptionType::Call, &config)?;
//! assert!((iv - 0.5).abs() < 1e-4);
//! # Ok::<(), iv_options::PricerError>(())
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Fetch market data (callers supply [`core::ChainSlice`] records)
//! - Select or filter strikes
//! - Render anything (the smile output is plain pairs)
//! - Guarantee global convergence: the Newton iteration is undamped by
//!   design, and quotes it cannot invert come back as typed errors

pub mod core;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::core::{ChainSlice, OptionType, PricerError, PricerResult, StrikeQuote};

    pub use crate::models::{
        d1,
        d2,
        implied_volatility,
        norm_cdf,
        norm_pdf,
        // Black-Scholes
        price as bs_price,
        smile_from_chain,
        SmilePoint,
        SolverConfig,
    };
}

// Re-export main types at crate root
pub use crate::core::{PricerError, PricerResult};
pub use crate::models::{implied_volatility, SolverConfig};

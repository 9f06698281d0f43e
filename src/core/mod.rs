//! Core data types for the pricing kernel
//!
//! Defines fundamental types:
//! - OptionType: call/put direction and payoff helpers
//! - StrikeQuote / ChainSlice: market record shapes fed in by a data provider
//! - PricerError: typed failures for pricing and the IV solver

pub mod error;
pub mod option;
pub mod quote;

pub use error::*;
pub use option::*;
pub use quote::*;

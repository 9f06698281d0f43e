//! Option contract fundamentals
//!
//! The kernel works on plain scalars plus the call/put direction defined here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PricerError;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricerError;

    /// Parse an exchange-style kind label. Only "call" and "put" (any case)
    /// are meaningful to the kernel; everything else is rejected so that a
    /// malformed feed never silently prices as a call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricerError::UnsupportedOptionKind(s.to_string())),
        }
    }
}

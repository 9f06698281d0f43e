//! Implied volatility solver (Newton-Raphson)
//!
//! Inverts the Black-Scholes price into a volatility estimate. The iteration
//! is deliberately unconstrained: no damping, no bracketing, no clamping of
//! intermediate vols. If an iterate wanders out of the pricing domain the
//! pricing call fails fast and the solver reports a typed convergence
//! failure carrying that cause, rather than quietly nudging the estimate
//! back in range. A misreported vol is worse than an explicit failure.

use crate::core::{OptionType, PricerError, PricerResult};
use crate::models::black_scholes::{check_domain, price, vega};

/// Vega magnitudes at or below this carry no usable Newton signal.
const MIN_VEGA: f64 = 1e-8;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Starting vol estimate (default: 0.5 = 50%).
    pub initial_guess: f64,
    /// Convergence tolerance on the price difference.
    pub tolerance: f64,
    /// Iteration budget before giving up.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.5,
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Solve for the vol that reprices `market_price` under Black-Scholes.
///
/// Newton-Raphson on vol: σ_{n+1} = σ_n - (BS(σ_n) - market_price) / vega(σ_n).
/// Converges in a handful of iterations for liquid near-the-money quotes.
///
/// Failure modes, all typed:
/// - `InvalidDomain` for non-positive spot/strike/time (checked up front)
/// - `InvalidObservedPrice` for a non-positive market price
/// - `VegaTooSmall` when the derivative is numerically unusable, typically
///   deep in/out of the money or at very short expiry
/// - `ConvergenceFailure` when the budget runs out, or when an intermediate
///   vol left the pricing domain (the domain error rides along as `source`)
#[allow(clippy::too_many_arguments)]
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    div: f64,
    time: f64,
    option_type: OptionType,
    config: &SolverConfig,
) -> PricerResult<f64> {
    // Validate the fixed inputs with the initial guess standing in for vol,
    // so a bad spot/strike/time is reported before the loop starts.
    check_domain(spot, strike, config.initial_guess, time)?;

    if market_price <= 0.0 {
        return Err(PricerError::InvalidObservedPrice(market_price));
    }

    let mut vol = config.initial_guess;

    for _ in 0..config.max_iterations {
        let bs_price = match price(spot, strike, rate, div, vol, time, option_type) {
            Ok(p) => p,
            // The iterate left the domain (vol went non-positive). Report it
            // as a convergence failure, not a raw domain error: the caller's
            // inputs were fine, the iteration is what broke down.
            Err(domain @ PricerError::InvalidDomain { .. }) => {
                return Err(PricerError::ConvergenceFailure {
                    iterations: config.max_iterations,
                    last_vol: vol,
                    source: Some(Box::new(domain)),
                });
            }
            Err(other) => return Err(other),
        };

        let diff = bs_price - market_price;
        if diff.abs() < config.tolerance {
            return Ok(vol);
        }

        let vega = vega(spot, strike, rate, div, vol, time);
        if vega.abs() <= MIN_VEGA {
            return Err(PricerError::VegaTooSmall { vega, vol });
        }

        vol -= diff / vega;
    }

    Err(PricerError::ConvergenceFailure {
        iterations: config.max_iterations,
        last_vol: vol,
        source: None,
    })
}

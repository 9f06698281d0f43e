//! Implied volatility smile
//!
//! Turns a chain slice of market quotes into (strike, implied vol) pairs,
//! the shape a presentation layer plots. Strikes whose quotes cannot be
//! inverted are skipped, not guessed at.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChainSlice;
use crate::models::implied_vol::{implied_volatility, SolverConfig};

/// One point on the smile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmilePoint {
    pub strike: f64,
    pub implied_vol: f64,
}

/// Compute the implied vol smile for one expiry slice.
///
/// Quotes without a last traded price are ignored. Quotes the solver cannot
/// invert (stale prints below intrinsic, dead vega far from the money) are
/// dropped with a debug event; the output keeps the slice's strike order.
pub fn smile_from_chain(chain: &ChainSlice, config: &SolverConfig) -> Vec<SmilePoint> {
    let mut points = Vec::with_capacity(chain.quotes.len());

    for quote in &chain.quotes {
        let Some(last_price) = quote.last_price else {
            continue;
        };

        match implied_volatility(
            last_price,
            chain.spot,
            quote.strike,
            chain.risk_free_rate,
            chain.dividend_yield,
            chain.time_to_expiry,
            chain.option_type,
            config,
        ) {
            Ok(implied_vol) => points.push(SmilePoint {
                strike: quote.strike,
                implied_vol,
            }),
            Err(err) => {
                debug!(
                    underlying = %chain.underlying,
                    strike = quote.strike,
                    last_price,
                    %err,
                    "skipping strike, implied vol unsolvable"
                );
            }
        }
    }

    points
}

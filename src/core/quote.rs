//! Market record shapes
//!
//! The kernel does not fetch data itself. A market-data provider hands it
//! per-strike records and a spot price; these types pin down that interface.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::option::OptionType;

/// One strike's worth of market data, as supplied by the provider.
///
/// The kernel only ever reads `strike` and `last_price`; the remaining fields
/// travel through untouched so callers can keep their own filtering context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrikeQuote {
    /// Strike price
    pub strike: f64,
    /// Last traded price
    pub last_price: Option<f64>,
    /// Trading volume
    pub volume: Option<u64>,
    /// Implied volatility as reported by the exchange, if any
    pub implied_vol: Option<f64>,
}

impl StrikeQuote {
    pub fn new(strike: f64) -> Self {
        Self {
            strike,
            last_price: None,
            volume: None,
            implied_vol: None,
        }
    }

    /// Record with a last traded price
    pub fn traded(strike: f64, last_price: f64) -> Self {
        Self {
            strike,
            last_price: Some(last_price),
            volume: None,
            implied_vol: None,
        }
    }
}

/// Quotes for a single expiry and option type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSlice {
    /// Underlying symbol
    pub underlying: String,
    /// Underlying spot price
    pub spot: f64,
    /// Expiry date
    pub expiry: NaiveDate,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Risk-free rate used for this slice
    pub risk_free_rate: f64,
    /// Dividend yield used for this slice
    pub dividend_yield: f64,
    /// Call or put side of the chain
    pub option_type: OptionType,
    /// Quotes sorted by strike
    pub quotes: Vec<StrikeQuote>,
    /// Timestamp when the snapshot was taken
    pub timestamp: DateTime<Utc>,
}

impl ChainSlice {
    pub fn new(
        underlying: impl Into<String>,
        spot: f64,
        expiry: NaiveDate,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            underlying: underlying.into(),
            spot,
            expiry,
            time_to_expiry,
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            option_type,
            quotes: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Add a quote, keeping strikes sorted
    pub fn add_quote(&mut self, quote: StrikeQuote) {
        self.quotes.push(quote);
        self.quotes
            .sort_by(|a, b| a.strike.partial_cmp(&b.strike).unwrap());
    }

    /// All strikes in the slice
    pub fn strikes(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.strike).collect()
    }

    /// Quote at a given strike
    pub fn quote_at(&self, strike: f64) -> Option<&StrikeQuote> {
        self.quotes.iter().find(|q| (q.strike - strike).abs() < 0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_quotes_stay_sorted() {
        let expiry = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let mut slice = ChainSlice::new("AAPL", 230.0, expiry, 0.08, OptionType::Call);

        slice.add_quote(StrikeQuote::traded(240.0, 1.2));
        slice.add_quote(StrikeQuote::traded(220.0, 11.5));
        slice.add_quote(StrikeQuote::traded(230.0, 5.1));

        assert_eq!(slice.strikes(), vec![220.0, 230.0, 240.0]);
        assert_eq!(slice.quote_at(230.0).unwrap().last_price, Some(5.1));
        assert!(slice.quote_at(250.0).is_none());
    }
}

//! Error types for the pricing kernel

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    /// A pricing input that must be strictly positive was not.
    ///
    /// Raised before any transcendental function is evaluated, so a bad
    /// spot/strike/time/vol never reaches ln or sqrt.
    #[error("{param} must be strictly positive, got {value}")]
    InvalidDomain { param: &'static str, value: f64 },

    /// Option kind string was neither "call" nor "put".
    #[error("unsupported option kind {0:?}, expected \"call\" or \"put\"")]
    UnsupportedOptionKind(String),

    /// Observed market price is not a valid quote (must be > 0).
    #[error("observed price must be positive, got {0}")]
    InvalidObservedPrice(f64),

    /// Vega at the current vol estimate carries no usable signal, so the
    /// Newton step would divide by (near) zero.
    #[error("vega {vega:e} too small at vol {vol} to continue iterating")]
    VegaTooSmall { vega: f64, vol: f64 },

    /// The solver exhausted its iteration budget, or an iterate wandered
    /// out of the pricing domain (carried in `source`).
    #[error("implied vol did not converge after {iterations} iterations, last vol {last_vol}")]
    ConvergenceFailure {
        iterations: u32,
        last_vol: f64,
        #[source]
        source: Option<Box<PricerError>>,
    },
}

pub type PricerResult<T> = Result<T, PricerError>;

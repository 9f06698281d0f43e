//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing (closed form)
//! - Vega, the price sensitivity used by the implied volatility solver
//!
//! All entry points validate their domain (spot, strike, time, vol strictly
//! positive) before touching ln or sqrt, so out-of-range inputs surface as
//! typed errors instead of NaNs.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{OptionType, PricerError, PricerResult};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// Callers must have validated spot, strike, vol and time beforehand.
pub fn d1(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate - div + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, div, vol, time) - vol * time.sqrt()
}

/// Reject non-positive values for parameters whose logarithm or square root
/// the formula takes. Rates and yields may be any sign.
pub(crate) fn check_domain(
    spot: f64,
    strike: f64,
    vol: f64,
    time: f64,
) -> PricerResult<()> {
    for (param, value) in [
        ("spot", spot),
        ("strike", strike),
        ("vol", vol),
        ("time", time),
    ] {
        if value <= 0.0 {
            return Err(PricerError::InvalidDomain { param, value });
        }
    }
    Ok(())
}

/// Black-Scholes European option price
///
/// Call: S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
/// Put:  K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    div: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricerResult<f64> {
    check_domain(spot, strike, vol, time)?;

    let d1 = d1(spot, strike, rate, div, vol, time);
    let d2 = d1 - vol * time.sqrt();
    let df = (-rate * time).exp();
    let div_factor = (-div * time).exp();

    let value = match option_type {
        OptionType::Call => spot * div_factor * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * div_factor * norm_cdf(-d1),
    };

    Ok(value)
}

/// Vega: dV/dσ = S·e^(-qT)·φ(d1)·√T
///
/// Same for calls and puts, always non-negative. Used by the Newton step in
/// the implied volatility solver; not part of the public surface.
pub(crate) fn vega(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    let d1 = d1(spot, strike, rate, div, vol, time);
    spot * (-div * time).exp() * norm_pdf(d1) * time.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
        // statrs is erf-based, within 1e-10 over the practical range
        assert!((norm_cdf(1.0) - 0.841344746068543).abs() < 1e-10);
    }

    #[test]
    fn test_norm_pdf() {
        // φ(0) = 1/√(2π)
        assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
        assert!((norm_pdf(1.0) - norm_pdf(-1.0)).abs() < 1e-15);
    }

    #[test]
    fn test_reference_scenario() {
        // S=100, K=100, r=5%, q=0, vol=50%, T=30/365
        let t = 30.0 / 365.0;
        let call = price(100.0, 100.0, 0.05, 0.0, 0.5, t, OptionType::Call).unwrap();
        let put = price(100.0, 100.0, 0.05, 0.0, 0.5, t, OptionType::Put).unwrap();

        assert!((call - 5.9094).abs() < 0.01);
        assert!((put - 5.4993).abs() < 0.01);
    }

    #[test]
    fn test_put_call_parity() {
        let (spot, strike, rate, div, vol, time) = (100.0, 105.0, 0.05, 0.02, 0.3, 0.5);

        let call = price(spot, strike, rate, div, vol, time, OptionType::Call).unwrap();
        let put = price(spot, strike, rate, div, vol, time, OptionType::Put).unwrap();

        let expected = spot * (-div * time).exp() - strike * (-rate * time).exp();
        assert!((call - put - expected).abs() < 1e-6 * spot);
    }

    #[test]
    fn test_prices_non_negative() {
        for vol in [0.05, 0.2, 0.5, 1.0, 3.0] {
            for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
                for ot in [OptionType::Call, OptionType::Put] {
                    let p = price(100.0, strike, 0.03, 0.01, vol, 0.25, ot).unwrap();
                    assert!(p >= 0.0, "negative price for K={strike} vol={vol} {ot:?}");
                }
            }
        }
    }

    #[test]
    fn test_monotone_in_vol() {
        for ot in [OptionType::Call, OptionType::Put] {
            let mut last = 0.0;
            for i in 1..=50 {
                let vol = i as f64 * 0.1; // up to 5.0
                let p = price(100.0, 110.0, 0.05, 0.0, vol, 0.25, ot).unwrap();
                assert!(p >= last - 1e-12, "price decreased at vol={vol} {ot:?}");
                last = p;
            }
        }
    }

    #[test]
    fn test_domain_violations() {
        let cases = [
            (0.0, 100.0, 0.5, 0.25, "spot"),
            (-10.0, 100.0, 0.5, 0.25, "spot"),
            (100.0, 0.0, 0.5, 0.25, "strike"),
            (100.0, 100.0, 0.0, 0.25, "vol"),
            (100.0, 100.0, 0.5, 0.0, "time"),
        ];

        for (spot, strike, vol, time, expected) in cases {
            let err = price(spot, strike, 0.05, 0.0, vol, time, OptionType::Call).unwrap_err();
            match err {
                PricerError::InvalidDomain { param, .. } => assert_eq!(param, expected),
                other => panic!("expected InvalidDomain, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_rate_and_yield_allowed() {
        // Rates and dividend yields can legitimately be negative
        let p = price(100.0, 100.0, -0.01, -0.005, 0.2, 1.0, OptionType::Call).unwrap();
        assert!(p > 0.0);
    }

    #[test]
    fn test_vega_positive() {
        let v = vega(100.0, 100.0, 0.05, 0.0, 0.25, 0.25);
        assert!(v > 0.0);

        // ATM vega ≈ S·φ(d1)·√T ≈ 19.9 here
        assert!(v > 15.0 && v < 25.0);
    }

    #[test]
    fn test_deep_otm_near_zero() {
        let p = price(50.0, 100.0, 0.0, 0.0, 0.25, 0.25, OptionType::Call).unwrap();
        assert!(p < 0.01);
    }
}

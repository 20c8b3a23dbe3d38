//! # Option Delta Pricing Module
//!
//! Black-Scholes delta for callers whose venue does not quote Greeks.
//!
//! ## Description
//! The hedge sizer consumes quoted deltas from the chain snapshot when the
//! venue publishes them. When it does not, callers can compute a
//! Black-Scholes delta here from spot, strike, time to expiry, rate, and
//! implied volatility, then attach it via `Leg::with_delta`.
//!
//! ## References
//! - Black, F., & Scholes, M. (1973). The Pricing of Options and Corporate Liabilities.
//!   Journal of Political Economy, 81(3), 637-654.
//! - Abramowitz, M., & Stegun, I. A. (1964). Handbook of Mathematical Functions.
//! - IEEE Std 1016-2009: Software Design Descriptions

/// Computes the standard normal cumulative distribution function.
///
/// # Description
/// Calculates Φ(x) = P(Z ≤ x) where Z ~ N(0,1) using the error function.
///
/// # Parameters
/// * `x` - The upper bound of integration, range: (-∞, +∞)
///
/// # Returns
/// Probability value in range [0.0, 1.0]
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / (2.0_f64).sqrt()))
}

/// Computes the error function using Abramowitz & Stegun approximation.
///
/// Maximum error < 1.5e-7 (Formula 7.1.26).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// Calculates the d₁ parameter of the Black-Scholes formula.
///
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
fn d1(spot: f64, strike: f64, time: f64, rate: f64, volatility: f64) -> f64 {
    ((spot / strike).ln() + (rate + volatility * volatility / 2.0) * time)
        / (volatility * time.sqrt())
}

/// Black-Scholes delta of a European call.
///
/// # Parameters
/// * `spot` - Current underlying price S, must be positive
/// * `strike` - Option strike price K, must be positive
/// * `time` - Time to expiration T in years (e.g., 7.0/365.0 for 7 days)
/// * `rate` - Continuously compounded risk-free rate (e.g., 0.05 = 5%)
/// * `volatility` - Annualized implied volatility (e.g., 0.50 = 50%)
///
/// # Returns
/// Delta in [0, 1]. At or past expiry (T ≤ 0) the delta collapses to a step
/// function: 1 if in the money, 0 if out, 0.5 exactly at the strike.
pub fn bs_call_delta(spot: f64, strike: f64, time: f64, rate: f64, volatility: f64) -> f64 {
    if time <= 0.0 {
        return if spot > strike {
            1.0
        } else if spot < strike {
            0.0
        } else {
            0.5
        };
    }
    norm_cdf(d1(spot, strike, time, rate, volatility))
}

/// Black-Scholes delta of a European put.
///
/// # Returns
/// Delta in [-1, 0]. At or past expiry (T ≤ 0): -1 if in the money, 0 if
/// out, -0.5 exactly at the strike.
pub fn bs_put_delta(spot: f64, strike: f64, time: f64, rate: f64, volatility: f64) -> f64 {
    if time <= 0.0 {
        return if spot < strike {
            -1.0
        } else if spot > strike {
            0.0
        } else {
            -0.5
        };
    }
    norm_cdf(d1(spot, strike, time, rate, volatility)) - 1.0
}

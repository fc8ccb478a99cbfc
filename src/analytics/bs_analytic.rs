// src/analytics/bs_analytic.rs
//! Closed-form references for the Monte Carlo estimator
//!
//! # Mathematical Foundation
//!
//! If `S_T = S_0 exp((m - σ²/2)T + σ W_T)` then
//! ```text
//! E[max(S_T - K, 0)] = S_0 e^(mT) Φ(d₁) - K Φ(d₂)
//! d₁ = [ln(S_0/K) + (m + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! With `m = r` and discounting at `r` this is the Black-Scholes call price.
//! With `m = μ ≠ r` it is what the simulation estimates when paths are
//! driven by the real-world drift but discounted at the risk-free rate.

use crate::math_utils::norm_cdf;

/// Undiscounted expected call payoff for terminal prices log-normal with drift `m`.
///
/// Falls back to the forward intrinsic value when `σ√T = 0`.
pub fn expected_call_payoff(s0: f64, k: f64, m: f64, sigma: f64, t: f64) -> f64 {
    let forward = s0 * (m * t).exp();
    let vol_sqrt_t = sigma * t.sqrt();
    if vol_sqrt_t == 0.0 {
        return (forward - k).max(0.0);
    }

    let d1 = ((s0 / k).ln() + (m + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    forward * norm_cdf(d1) - k * norm_cdf(d2)
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    (-r * t).exp() * expected_call_payoff(s, k, r, sigma, t)
}

/// Analytic value of the simulation's estimator: paths drift at `mu`,
/// payoffs are discounted at `r`.
pub fn drifted_call_value(s0: f64, k: f64, mu: f64, r: f64, sigma: f64, t: f64) -> f64 {
    (-r * t).exp() * expected_call_payoff(s0, k, mu, sigma, t)
}

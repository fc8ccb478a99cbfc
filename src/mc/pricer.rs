// src/mc/pricer.rs
//! Discounted expected payoff estimator
//!
//! ```text
//! payoff_j       = max(S_T^(j) - K, 0)
//! expected       = (1/M) Σ payoff_j
//! price          = e^(-rT) * expected
//! standard error = e^(-rT) * s / √M,   s² = Σ (payoff_j - expected)² / (M - 1)
//! ```
//!
//! `r` is only a discount rate here; the drift used to produce the terminal
//! prices is whatever the caller simulated with.

use crate::error::{McError, McResult};
use crate::mc::payoffs::EuropeanCall;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingResult {
    /// Sample mean of the undiscounted payoffs
    pub expected_payoff: f64,
    /// `exp(-r*T) * expected_payoff`
    pub option_price: f64,
    /// Standard error of `option_price`; `None` for a single path
    pub standard_error: Option<f64>,
}

impl PricingResult {
    /// Half-width of a normal confidence interval at `z` standard errors.
    pub fn confidence_half_width(&self, z: f64) -> Option<f64> {
        self.standard_error.map(|se| z * se)
    }
}

/// Price a European call from simulated terminal prices.
pub fn price_european_call(
    terminal_prices: &[f64],
    k: f64,
    r: f64,
    t: f64,
) -> McResult<PricingResult> {
    if terminal_prices.is_empty() {
        return Err(McError::EmptySample {
            reason: "at least one terminal price is required to estimate the payoff".to_string(),
        });
    }

    let call = EuropeanCall::new(k);
    let n = terminal_prices.len() as f64;
    let discount = (-r * t).exp();

    let expected_payoff = terminal_prices.iter().map(|&s| call.payoff(s)).sum::<f64>() / n;
    // a zero payoff stays zero under any discount, including an overflowing one
    let option_price = if expected_payoff > 0.0 {
        discount * expected_payoff
    } else {
        0.0
    };

    if !option_price.is_finite() {
        return Err(McError::NumericalInstability {
            method: "Monte Carlo".to_string(),
            reason: format!("Price estimate is not finite: {}", option_price),
        });
    }

    let standard_error = if terminal_prices.len() > 1 {
        let sample_variance = terminal_prices
            .iter()
            .map(|&s| (call.payoff(s) - expected_payoff).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        if sample_variance > 0.0 {
            Some(discount * (sample_variance / n).sqrt())
        } else {
            Some(0.0)
        }
    } else {
        None
    };

    Ok(PricingResult {
        expected_payoff,
        option_price,
        standard_error,
    })
}

//! # gbm-mc-pricer: Monte Carlo European Call Pricing under GBM
//!
//! Simulates Geometric Brownian Motion price paths, collects their terminal
//! prices and estimates the discounted expected payoff of a European call.
//!
//! ## Key Features
//!
//! - **Exact GBM paths**: closed-form solution evaluated on a sampled Brownian path
//! - **Reproducible**: one seeded random stream per path, reported with every result
//! - **Parallel**: Rayon execution, bit-identical to the sequential run
//! - **Validated inputs**: configuration errors surface before any simulation work
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_mc_pricer::mc::mc_engine::{simulate_and_price, McConfig};
//! use gbm_mc_pricer::models::SimulationParameters;
//!
//! let params = SimulationParameters::new(100.0, 105.0, 1.0, 0.05, 0.2, 0.05, 50, 2_000)
//!     .expect("valid parameters");
//! let cfg = McConfig {
//!     seed: Some(42),
//!     ..McConfig::new(params)
//! };
//!
//! let outcome = simulate_and_price(&cfg).expect("valid configuration");
//! println!("Option price: {:.4}", outcome.result.option_price);
//! assert_eq!(outcome.terminal_prices.len(), 2_000);
//! ```
//!
//! ## Drift and discounting
//!
//! Paths are simulated with the drift `mu`, payoffs are discounted with the
//! risk-free rate `r`. Only with `mu == r` is the estimate a risk-neutral
//! price; otherwise it is returned as is and a warning is logged.

pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod rng;

pub use error::{McError, McResult};
pub use mc::mc_engine::{simulate_and_price, McConfig, SimulationOutcome};
pub use mc::pricer::PricingResult;
pub use models::{PricePath, SimulationParameters, TimeGrid};

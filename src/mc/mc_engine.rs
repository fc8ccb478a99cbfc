// src/mc/mc_engine.rs
use crate::error::{McError, McResult};
use crate::math_utils::Timer;
use crate::mc::pricer::{price_european_call, PricingResult};
use crate::mc::statistics::{self, Histogram, TerminalSummary};
use crate::models::{Gbm, PricePath, SimulationParameters, TimeGrid};
use crate::rng::RngFactory;
use rayon::prelude::*;

/// Most full paths a run will hand back for display.
pub const MAX_RETAINED_PATHS: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct McConfig {
    pub params: SimulationParameters,
    /// Base seed; `None` draws one from entropy and reports it in the outcome
    pub seed: Option<u64>,
    /// Number of leading paths kept in full (at most [`MAX_RETAINED_PATHS`])
    pub retain_paths: usize,
    pub parallel: bool,
}

impl McConfig {
    pub fn new(params: SimulationParameters) -> Self {
        McConfig {
            params,
            ..Default::default()
        }
    }

    /// Validate the Monte Carlo configuration
    pub fn validate(&self) -> McResult<()> {
        self.params.validate()?;

        if self.retain_paths > MAX_RETAINED_PATHS {
            return Err(McError::InvalidConfiguration {
                field: "retain_paths".to_string(),
                reason: format!("must not exceed {}", MAX_RETAINED_PATHS),
            });
        }

        Ok(())
    }
}

impl Default for McConfig {
    fn default() -> Self {
        McConfig {
            params: SimulationParameters::default(),
            seed: None,
            retain_paths: MAX_RETAINED_PATHS,
            parallel: true,
        }
    }
}

impl From<SimulationParameters> for McConfig {
    fn from(params: SimulationParameters) -> Self {
        McConfig::new(params)
    }
}

/// Raw output of the simulation driver.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    pub seed: u64,
    pub grid: TimeGrid,
    /// First `min(retain_paths, M)` paths, in simulation order
    pub paths: Vec<PricePath>,
    /// One terminal price per simulated path, in simulation order
    pub terminal_prices: Vec<f64>,
}

/// Everything a presentation layer needs from one run.
#[derive(Clone, Debug)]
pub struct SimulationOutcome {
    pub seed: u64,
    pub grid: TimeGrid,
    pub paths: Vec<PricePath>,
    pub terminal_prices: Vec<f64>,
    pub result: PricingResult,
}

impl SimulationOutcome {
    pub fn terminal_summary(&self) -> McResult<TerminalSummary> {
        statistics::summarize(&self.terminal_prices)
    }

    pub fn terminal_histogram(&self, bins: usize) -> McResult<Histogram> {
        statistics::histogram(&self.terminal_prices, bins)
    }
}

/// Simulate M GBM paths and collect their terminal prices.
///
/// # Algorithm
///
/// 1. Build the time grid once; every path reads it.
/// 2. Path `i` draws from its own `StdRng` seeded from `(seed, i)`, so the
///    result does not depend on execution order.
/// 3. Only the terminal price of each path is kept, plus the first
///    `retain_paths` paths in full.
///
/// Parallel and sequential execution return identical terminal prices for
/// the same seed.
///
/// # Errors
///
/// Returns `McError` for invalid parameters before any path is generated.
pub fn simulate_paths(cfg: &McConfig) -> McResult<SimulationRun> {
    cfg.validate()?;
    let params = &cfg.params;

    let factory = match cfg.seed {
        Some(seed) => RngFactory::new(seed),
        None => RngFactory::from_entropy(),
    };
    let grid = TimeGrid::new(params.t, params.steps)?;
    let gbm = Gbm::from_params(params);
    let retain = cfg.retain_paths.min(params.paths);

    tracing::debug!(
        seed = factory.base_seed(),
        paths = params.paths,
        steps = params.steps,
        parallel = cfg.parallel,
        "starting GBM simulation"
    );
    if grid.is_degenerate() {
        tracing::warn!("zero maturity: every path collapses to the initial price");
    }

    let timer = Timer::new();
    let simulate_one = |i: usize| -> (f64, Option<PricePath>) {
        let mut rng = factory.create_std_rng(i as u64);
        let path = gbm.generate_path(&grid, &mut rng);
        let terminal = path.terminal();
        (terminal, (i < retain).then_some(path))
    };

    let simulated: Vec<(f64, Option<PricePath>)> = if cfg.parallel {
        (0..params.paths).into_par_iter().map(&simulate_one).collect()
    } else {
        (0..params.paths).map(&simulate_one).collect()
    };

    let mut terminal_prices = Vec::with_capacity(params.paths);
    let mut paths = Vec::with_capacity(retain);
    for (terminal, path) in simulated {
        terminal_prices.push(terminal);
        if let Some(path) = path {
            paths.push(path);
        }
    }

    tracing::debug!(
        elapsed_ms = timer.elapsed_ms(),
        retained = paths.len(),
        "GBM simulation finished"
    );

    Ok(SimulationRun {
        seed: factory.base_seed(),
        grid,
        paths,
        terminal_prices,
    })
}

/// Monte Carlo price of a European call under GBM
///
/// # Math Framework
///
/// Paths follow
/// ```text
/// S_t = S_0 * exp((μ - σ²/2) t + σ W_t)
/// ```
/// and the price is the discounted sample mean of `max(S_T - K, 0)`:
/// ```text
/// V ≈ e^(-rT) * (1/M) Σ max(S_T^(j) - K, 0)
/// ```
///
/// The drift μ is not replaced by r. With μ ≠ r the estimate is the
/// discounted real-world expectation, not the risk-neutral price; a warning
/// is logged and the estimate is returned unchanged.
pub fn simulate_and_price(cfg: &McConfig) -> McResult<SimulationOutcome> {
    let params = &cfg.params;
    let run = simulate_paths(cfg)?;

    if !params.is_risk_neutral() {
        tracing::warn!(
            mu = params.mu,
            r = params.r,
            "drift differs from the risk-free rate; estimate is not a risk-neutral price"
        );
    }

    let result = price_european_call(&run.terminal_prices, params.k, params.r, params.t)?;

    tracing::info!(
        option_price = result.option_price,
        expected_payoff = result.expected_payoff,
        standard_error = result.standard_error.unwrap_or(f64::NAN),
        paths = params.paths,
        "European call priced"
    );

    Ok(SimulationOutcome {
        seed: run.seed,
        grid: run.grid,
        paths: run.paths,
        terminal_prices: run.terminal_prices,
        result,
    })
}

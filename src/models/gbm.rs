// src/models/gbm.rs
//! Geometric Brownian Motion path generation
//!
//! # Mathematical Framework
//!
//! ```text
//! dS_t = μ S_t dt + σ S_t dW_t
//! ```
//!
//! Itô's lemma gives the closed form
//! ```text
//! S_t = S_0 * exp((μ - σ²/2) t + σ W_t)
//! ```
//!
//! Paths are produced by sampling the Brownian motion on the time grid,
//! `W_0 = 0`, `W_i = W_{i-1} + √dt * Z_i` with `Z_i ~ N(0,1)`, and evaluating
//! the closed form at every grid point. There is no Euler step: the only
//! approximation is observing W at finitely many times.

use super::params::SimulationParameters;
use super::path::PricePath;
use super::time_grid::TimeGrid;
use crate::rng;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    pub fn from_params(params: &SimulationParameters) -> Self {
        Gbm::new(params.s0, params.mu, params.sigma)
    }

    /// Closed-form price at time `t` given the Brownian value `w` = W_t.
    pub fn value_at(&self, t: f64, w: f64) -> f64 {
        self.s0 * ((self.mu - 0.5 * self.sigma * self.sigma) * t + self.sigma * w).exp()
    }

    /// Sample a Brownian motion on `grid`: W_0 = 0 plus N cumulative N(0, dt) increments.
    pub fn brownian_path<R: Rng + ?Sized>(grid: &TimeGrid, rng: &mut R) -> Vec<f64> {
        let sqrt_dt = grid.dt().sqrt();
        let mut w = Vec::with_capacity(grid.len());
        w.push(0.0);

        let mut current_w = 0.0;
        for _ in 0..grid.len() - 1 {
            current_w += sqrt_dt * rng::get_normal_draw(rng);
            w.push(current_w);
        }
        w
    }

    /// Generate one price path over `grid`.
    ///
    /// The first point is `s0` exactly; no randomness enters at t = 0.
    pub fn generate_path<R: Rng + ?Sized>(&self, grid: &TimeGrid, rng: &mut R) -> PricePath {
        let w = Self::brownian_path(grid, rng);

        let mut prices = Vec::with_capacity(grid.len());
        prices.push(self.s0);
        prices.extend(
            grid.points()
                .iter()
                .zip(w.iter())
                .skip(1)
                .map(|(&t, &w_t)| self.value_at(t, w_t)),
        );

        PricePath::new(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng_from_u64;

    #[test]
    fn test_path_starts_at_spot() {
        let gbm = Gbm::new(100.0, 0.1, 0.2);
        let grid = TimeGrid::new(1.0, 50).unwrap();

        for seed in 0..20 {
            let mut rng = seed_rng_from_u64(seed);
            let path = gbm.generate_path(&grid, &mut rng);
            assert_eq!(path.len(), 51);
            assert_eq!(path.initial(), 100.0);
            assert!(path.prices().iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn test_brownian_path_shape() {
        let grid = TimeGrid::new(1.0, 100).unwrap();
        let mut rng = seed_rng_from_u64(7);
        let w = Gbm::brownian_path(&grid, &mut rng);

        assert_eq!(w.len(), 101);
        assert_eq!(w[0], 0.0);
    }

    #[test]
    fn test_path_is_closed_form_of_brownian_path() {
        let gbm = Gbm::new(50.0, 0.03, 0.4);
        let grid = TimeGrid::new(2.0, 40).unwrap();

        let w = Gbm::brownian_path(&grid, &mut seed_rng_from_u64(11));
        let path = gbm.generate_path(&grid, &mut seed_rng_from_u64(11));

        for (i, (&t, &w_t)) in grid.points().iter().zip(w.iter()).enumerate() {
            let expected = 50.0 * ((0.03 - 0.5 * 0.16) * t + 0.4 * w_t).exp();
            assert!(
                (path.prices()[i] - expected).abs() < 1e-12 * expected,
                "mismatch at index {}",
                i
            );
        }
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let gbm = Gbm::new(100.0, 0.08, 0.0);
        let grid = TimeGrid::new(1.0, 10).unwrap();

        let a = gbm.generate_path(&grid, &mut seed_rng_from_u64(1));
        let b = gbm.generate_path(&grid, &mut seed_rng_from_u64(2));
        assert_eq!(a, b);

        for (&t, &s) in grid.points().iter().zip(a.prices()) {
            let expected = 100.0 * (0.08 * t).exp();
            assert!((s - expected).abs() < 1e-12 * expected);
        }
    }

    #[test]
    fn test_degenerate_grid_gives_single_point() {
        let gbm = Gbm::new(100.0, 0.1, 0.2);
        let grid = TimeGrid::new(0.0, 1000).unwrap();
        let path = gbm.generate_path(&grid, &mut seed_rng_from_u64(3));

        assert_eq!(path.prices(), &[100.0]);
        assert_eq!(path.terminal(), 100.0);
    }

    #[test]
    fn test_terminal_log_moments() {
        // ln(S_T / S_0) ~ N((μ - σ²/2)T, σ²T)
        let gbm = Gbm::new(100.0, 0.05, 0.3);
        let grid = TimeGrid::new(1.0, 20).unwrap();
        let n = 20_000;

        let logs: Vec<f64> = (0..n)
            .map(|i| {
                let path = gbm.generate_path(&grid, &mut seed_rng_from_u64(1000 + i));
                (path.terminal() / 100.0).ln()
            })
            .collect();

        let mean = logs.iter().sum::<f64>() / n as f64;
        let var = logs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);

        assert!((mean - (0.05 - 0.045)).abs() < 0.01, "log mean {}", mean);
        assert!((var - 0.09).abs() < 0.005, "log variance {}", var);
    }
}

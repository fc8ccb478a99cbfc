// src/models/path.rs

/// One simulated trajectory, indexed like the [`TimeGrid`](super::time_grid::TimeGrid)
/// that produced it. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PricePath(Vec<f64>);

impl PricePath {
    pub(crate) fn new(prices: Vec<f64>) -> Self {
        debug_assert!(!prices.is_empty());
        PricePath(prices)
    }

    pub fn prices(&self) -> &[f64] {
        &self.0
    }

    pub fn initial(&self) -> f64 {
        self.0[0]
    }

    pub fn terminal(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

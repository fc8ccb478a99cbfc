// src/mc/statistics.rs
//! Distributional summaries of the terminal price set, for display.

use crate::error::{McError, McResult};
use statrs::statistics::Statistics;

pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (0 for a single value)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

pub fn summarize(values: &[f64]) -> McResult<TerminalSummary> {
    if values.is_empty() {
        return Err(McError::EmptySample {
            reason: "cannot summarize an empty terminal price set".to_string(),
        });
    }

    let std_dev = if values.len() > 1 {
        Statistics::std_dev(values.iter())
    } else {
        0.0
    };

    Ok(TerminalSummary {
        count: values.len(),
        mean: Statistics::mean(values.iter()),
        std_dev,
        min: Statistics::min(values.iter()),
        max: Statistics::max(values.iter()),
    })
}

/// Equal-width bins over `[lower, upper]`; the last bin includes `upper`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub lower: f64,
    pub upper: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// `(left, right)` edges of bin `i`.
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        let width = self.bin_width();
        (self.lower + i as f64 * width, self.lower + (i + 1) as f64 * width)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

pub fn histogram(values: &[f64], bins: usize) -> McResult<Histogram> {
    if bins == 0 {
        return Err(McError::InvalidConfiguration {
            field: "bins".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    if values.is_empty() {
        return Err(McError::EmptySample {
            reason: "cannot bin an empty terminal price set".to_string(),
        });
    }

    let mut lower = Statistics::min(values.iter());
    let mut upper = Statistics::max(values.iter());
    // identical values (zero volatility, zero maturity): centre a unit-wide range on them
    if lower == upper {
        lower -= 0.5;
        upper += 0.5;
    }

    let width = (upper - lower) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lower) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram {
        lower,
        upper,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let s = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert!((s.mean - 2.5).abs() < 1e-12);
        assert!((s.std_dev - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn test_single_value_summary() {
        let s = summarize(&[42.0]).unwrap();
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let h = histogram(&values, 10).unwrap();

        assert_eq!(h.counts.len(), 10);
        assert_eq!(h.total(), 100);
        assert_eq!(h.counts, vec![10; 10]);
        assert_eq!(h.bin_edges(0).0, 0.0);
        assert!((h.bin_edges(9).1 - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_constant_values() {
        let h = histogram(&[100.0; 5], 30).unwrap();
        assert_eq!(h.total(), 5);
        assert_eq!(h.lower, 99.5);
        assert_eq!(h.upper, 100.5);
        assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
        assert_eq!(h.counts.iter().max(), Some(&5));
    }

    #[test]
    fn test_histogram_rejects_bad_input() {
        assert!(histogram(&[], 10).is_err());
        assert!(histogram(&[1.0], 0).is_err());
    }
}

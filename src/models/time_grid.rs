// src/models/time_grid.rs
use crate::error::{validation::*, McResult};

/// Equally spaced observation times `0 = t_0 < t_1 < ... < t_N = T`.
///
/// Built once per run and shared read-only by every path. A zero maturity
/// collapses the grid to the single point `[0.0]` with `dt = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
    dt: f64,
}

impl TimeGrid {
    pub fn new(t: f64, steps: usize) -> McResult<Self> {
        validate_non_negative("t", t)?;
        validate_steps(steps)?;

        if t == 0.0 {
            return Ok(TimeGrid {
                points: vec![0.0],
                dt: 0.0,
            });
        }

        let n = steps as f64;
        // i / n * t keeps the last point at exactly t
        let points = (0..=steps).map(|i| t * (i as f64 / n)).collect();

        Ok(TimeGrid { points, dt: t / n })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    pub fn maturity(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_endpoints_and_spacing() {
        let grid = TimeGrid::new(1.5, 300).unwrap();

        assert_eq!(grid.len(), 301);
        assert_eq!(grid.steps(), 300);
        assert_eq!(grid.points()[0], 0.0);
        assert_eq!(grid.maturity(), 1.5);
        assert!((grid.dt() - 0.005).abs() < 1e-15);

        for pair in grid.points().windows(2) {
            assert!((pair[1] - pair[0] - grid.dt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fine_grid_accepted() {
        let grid = TimeGrid::new(1.0, 200_000).unwrap();
        assert_eq!(grid.len(), 200_001);
        assert_eq!(grid.maturity(), 1.0);
        assert!((grid.dt() - 5e-6).abs() < 1e-18);
    }

    #[test]
    fn test_single_step_grid() {
        let grid = TimeGrid::new(2.0, 1).unwrap();
        assert_eq!(grid.points(), &[0.0, 2.0]);
    }

    #[test]
    fn test_zero_maturity_collapses() {
        let grid = TimeGrid::new(0.0, 1000).unwrap();
        assert_eq!(grid.points(), &[0.0]);
        assert_eq!(grid.dt(), 0.0);
        assert!(grid.is_degenerate());
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(TimeGrid::new(-1.0, 10).is_err());
        assert!(TimeGrid::new(1.0, 0).is_err());
        assert!(TimeGrid::new(f64::NAN, 10).is_err());
    }
}

// src/models/params.rs
use crate::error::{validation::*, McResult};

/// Inputs of one simulation run.
///
/// `mu` is the real-world drift used to simulate paths, `r` the risk-free
/// rate used only for discounting. The two are deliberately kept apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub s0: f64,       // Initial stock price
    pub k: f64,        // Strike
    pub t: f64,        // Maturity in years
    pub mu: f64,       // Drift
    pub sigma: f64,    // Volatility
    pub r: f64,        // Risk-free rate
    pub steps: usize,  // Time steps (N)
    pub paths: usize,  // Simulated paths (M)
}

impl SimulationParameters {
    /// Validated construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        s0: f64,
        k: f64,
        t: f64,
        mu: f64,
        sigma: f64,
        r: f64,
        steps: usize,
        paths: usize,
    ) -> McResult<Self> {
        let params = SimulationParameters {
            s0,
            k,
            t,
            mu,
            sigma,
            r,
            steps,
            paths,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject anything the engine cannot simulate.
    ///
    /// `t == 0` is accepted: the grid collapses to a single point.
    pub fn validate(&self) -> McResult<()> {
        validate_steps(self.steps)?;
        validate_paths(self.paths)?;
        validate_positive("s0", self.s0)?;
        validate_positive("k", self.k)?;
        validate_non_negative("t", self.t)?;
        validate_finite("mu", self.mu)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_finite("r", self.r)?;
        Ok(())
    }

    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    pub fn is_risk_neutral(&self) -> bool {
        self.mu == self.r
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            s0: 100.0,
            k: 105.0,
            t: 1.0,
            mu: 0.1,
            sigma: 0.2,
            r: 0.05,
            steps: 1000,
            paths: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::McError;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_scalars() {
        let base = SimulationParameters::default();

        let cases = [
            ("s0", SimulationParameters { s0: 0.0, ..base }),
            ("k", SimulationParameters { k: -5.0, ..base }),
            ("t", SimulationParameters { t: -1.0, ..base }),
            ("sigma", SimulationParameters { sigma: -0.2, ..base }),
            ("mu", SimulationParameters { mu: f64::NAN, ..base }),
            ("r", SimulationParameters { r: f64::INFINITY, ..base }),
        ];

        for (name, params) in cases {
            match params.validate() {
                Err(McError::InvalidParameters { parameter, .. }) => assert_eq!(parameter, name),
                other => panic!("expected InvalidParameters for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_rejects_zero_counts() {
        let err = SimulationParameters::new(100.0, 105.0, 1.0, 0.1, 0.2, 0.05, 0, 10).unwrap_err();
        assert!(matches!(err, McError::InvalidConfiguration { ref field, .. } if field == "steps"));

        let err = SimulationParameters::new(100.0, 105.0, 1.0, 0.1, 0.2, 0.05, 10, 0).unwrap_err();
        assert!(matches!(err, McError::InvalidConfiguration { ref field, .. } if field == "paths"));
    }

    #[test]
    fn test_accepts_degenerate_maturity_and_zero_vol() {
        assert!(SimulationParameters::new(100.0, 105.0, 0.0, 0.1, 0.0, 0.05, 1, 1).is_ok());
    }

    #[test]
    fn test_accepts_large_step_count() {
        let params = SimulationParameters::new(100.0, 105.0, 1.0, 0.1, 0.2, 0.05, 200_000, 1);
        assert_eq!(params.map(|p| p.steps), Ok(200_000));
    }
}

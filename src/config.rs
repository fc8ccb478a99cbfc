// src/config.rs
//! Environment-driven configuration for the command-line tools.
//!
//! | Variable           | Default |
//! |--------------------|---------|
//! | `MC_S0`            | 100     |
//! | `MC_STRIKE`        | 105     |
//! | `MC_MATURITY`      | 1       |
//! | `MC_MU`            | 0.1     |
//! | `MC_SIGMA`         | 0.2     |
//! | `MC_RATE`          | 0.05    |
//! | `MC_STEPS`         | 1000    |
//! | `MC_PATHS`         | 1000    |
//! | `MC_SEED`          | entropy |
//! | `MC_RETAIN_PATHS`  | 100     |
//! | `MC_PARALLEL`      | true    |

use crate::error::{McError, McResult};
use crate::mc::mc_engine::{McConfig, MAX_RETAINED_PATHS};
use crate::models::SimulationParameters;
use std::str::FromStr;

/// Load a `.env` file if present, then read `MC_*` variables.
pub fn from_env() -> McResult<McConfig> {
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Build and validate a config from any key lookup.
pub fn from_lookup<F>(lookup: F) -> McResult<McConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = SimulationParameters::default();

    let params = SimulationParameters {
        s0: parse_or(&lookup, "MC_S0", defaults.s0)?,
        k: parse_or(&lookup, "MC_STRIKE", defaults.k)?,
        t: parse_or(&lookup, "MC_MATURITY", defaults.t)?,
        mu: parse_or(&lookup, "MC_MU", defaults.mu)?,
        sigma: parse_or(&lookup, "MC_SIGMA", defaults.sigma)?,
        r: parse_or(&lookup, "MC_RATE", defaults.r)?,
        steps: parse_or(&lookup, "MC_STEPS", defaults.steps)?,
        paths: parse_or(&lookup, "MC_PATHS", defaults.paths)?,
    };

    let seed = match lookup("MC_SEED") {
        Some(raw) => Some(parse_value::<u64>("MC_SEED", &raw)?),
        None => None,
    };

    let cfg = McConfig {
        params,
        seed,
        retain_paths: parse_or(&lookup, "MC_RETAIN_PATHS", MAX_RETAINED_PATHS)?,
        parallel: parse_or(&lookup, "MC_PARALLEL", true)?,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> McResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> McResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| McError::InvalidConfiguration {
            field: key.to_string(),
            reason: format!("cannot parse {:?}: {}", raw, e),
        })
}

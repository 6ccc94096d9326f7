//! Environment-variable configuration helpers. The library never reads
//! configuration itself (there is no ambient "run the sampler" entry
//! point) — these exist for driver binaries built on top of it, so every
//! one of them parses `u64`/`f64` knobs (seed, bin count, sweep length,
//! modification-factor floor) the same way and reports the same error
//! type, rather than each hand-rolling its own `env::var` + `parse`.

use crate::error::ConfigError;
use std::env;

/// Reads `var` from the environment and parses it as a `u64`.
pub fn require_u64(var: &str) -> Result<u64, ConfigError> {
    let value = env::var(var).map_err(|_| ConfigError::MissingVar(var.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        value,
    })
}

/// Reads `var` from the environment and parses it as an `f64`.
pub fn require_f64(var: &str) -> Result<f64, ConfigError> {
    let value = env::var(var).map_err(|_| ConfigError::MissingVar(var.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        value,
    })
}

/// Like [`require_u64`], but falls back to `default` when the variable is
/// unset — still an error if it is set to something unparsable.
pub fn u64_or(var: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            value,
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: "<non-unicode>".to_string(),
        }),
    }
}

//! Environment-driven configuration

use super::{Config, Level};
use crate::core::{ConfigError, ConfigResult};

/// Header name override
pub const ENV_NAME: &str = "NEBULA_PERF_NAME";
/// Report level, by name or number
pub const ENV_LEVEL: &str = "NEBULA_PERF_LEVEL";
/// `0`, `false`, `off` or `no` disables counting
pub const ENV_ENABLED: &str = "NEBULA_PERF_ENABLED";

impl Config {
    /// Create configuration from environment variables
    ///
    /// Unset variables keep their defaults. The result is not validated yet;
    /// the factory does that.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_NAME) {
            config.name = name;
        }

        if let Some(level) = lookup(ENV_LEVEL) {
            config.level = level
                .parse::<Level>()
                .map_err(|e| ConfigError::env(ENV_LEVEL, &e))?;
        }

        if let Some(enabled) = lookup(ENV_ENABLED) {
            config.enabled = parse_switch(&enabled).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_ENABLED,
                reason: format!("expected a boolean, got '{enabled}'"),
            })?;
        }

        Ok(config)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

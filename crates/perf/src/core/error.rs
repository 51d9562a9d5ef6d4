//! Error handling for nebula-perf
//!
//! Only configuration can fail. Failures raised by the steps a counter wraps
//! are never converted into this type; they reach the caller untouched.

use thiserror::Error;

/// Type alias for Result with [`ConfigError`]
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error returned by validation and raw-value conversions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Counter name is empty or whitespace-only
    #[error("Performance counter name cannot be empty or whitespace")]
    BlankName,

    /// Numeric level outside `0..=6`
    #[error("Log level {0} is out of the available range")]
    LevelOutOfRange(i64),

    /// Level name that matches no category
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),

    /// Environment variable with an unusable value
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Wrap a conversion failure with the environment variable it came from
    pub(crate) fn env(var: &'static str, source: &Self) -> Self {
        Self::InvalidEnv {
            var,
            reason: source.to_string(),
        }
    }
}

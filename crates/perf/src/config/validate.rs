//! Config validation

use super::Config;
use crate::core::{ConfigError, ConfigResult};

/// Check the invariants of a [`Config`]
///
/// The name must contain something other than whitespace. [`Level`](super::Level) is a
/// closed enum, so out-of-range levels are rejected earlier, where raw values
/// are converted (`TryFrom<i64>`, `FromStr`, deserialization, environment).
/// The config is never modified.
pub fn validate(config: &Config) -> ConfigResult<()> {
    if config.name.trim().is_empty() {
        return Err(ConfigError::BlankName);
    }

    Ok(())
}

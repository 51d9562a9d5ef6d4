//! Core configuration types

use serde::{Deserialize, Serialize};

use super::Level;

/// Name used when none is configured
pub const DEFAULT_NAME: &str = "PerformanceTest";

/// Performance counter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header name included in every report
    pub name: String,

    /// Level reports are emitted at
    pub level: Level,

    /// Enable or disable counting, e.g. behind a feature switch
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: Level::Information,
            enabled: true,
        }
    }
}

impl Config {
    /// Default configuration with a custom header name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Configuration that always yields a no-op counter
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the report level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable counting
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether a counter built from this config records anything
    pub fn is_active(&self) -> bool {
        self.enabled && !self.level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.name, "PerformanceTest");
        assert_eq!(config.level, Level::Information);
        assert!(config.enabled);
        assert!(config.is_active());
    }

    #[test]
    fn test_builder_helpers() {
        let config = Config::new("checkout")
            .with_level(Level::Debug)
            .with_enabled(false);

        assert_eq!(
            config,
            Config {
                name: "checkout".into(),
                level: Level::Debug,
                enabled: false,
            }
        );
        assert!(!config.is_active());
        assert!(!Config::default().with_level(Level::None).is_active());
        assert!(!Config::disabled().is_active());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"level": "warning"}"#).unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.level, Level::Warning);
        assert!(config.enabled);

        let config: Config =
            serde_json::from_str(r#"{"name": "import", "level": 1, "enabled": false}"#).unwrap();
        assert_eq!(config.level, Level::Debug);
        assert!(!config.enabled);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_level() {
        let error = serde_json::from_str::<Config>(r#"{"level": 10}"#).unwrap_err();
        assert!(error.to_string().contains("out of the available range"));
    }
}

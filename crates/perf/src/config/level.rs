//! Report level categories

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Level a counter reports at
///
/// Ordered from most to least verbose. [`Level::None`] suppresses reporting
/// entirely and makes the factory hand out a no-op counter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "LevelRepr")]
pub enum Level {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Information level
    #[default]
    Information,
    /// Warning level
    Warning,
    /// Error level
    Error,
    /// Critical level
    Critical,
    /// Reporting disabled
    None,
}

impl Level {
    /// Every defined category, in order
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::None,
    ];

    /// Lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::None => "none",
        }
    }

    /// Whether this level suppresses reporting
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for Level {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, ConfigError> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(ConfigError::LevelOutOfRange(value))
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::try_from(value);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "none" | "off" => Ok(Self::None),
            _ => Err(ConfigError::UnknownLevel(trimmed.to_string())),
        }
    }
}

/// Wire shape accepted when deserializing a [`Level`]
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Value(i64),
    Name(String),
}

impl TryFrom<LevelRepr> for Level {
    type Error = ConfigError;

    fn try_from(repr: LevelRepr) -> Result<Self, ConfigError> {
        match repr {
            LevelRepr::Value(value) => Self::try_from(value),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}

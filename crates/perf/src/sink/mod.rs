//! Report destinations
//!
//! A [`Sink`] receives the level, the message template and the ordered
//! arguments of a report as separate values, so structured backends can index
//! each field instead of parsing a pre-rendered string.
//!
//! - [`TracingSink`]: forwards reports to the `tracing` dispatcher
//! - [`MemorySink`]: keeps reports in memory, mainly for tests

mod memory;
mod tracing_sink;

use std::fmt;

use serde::Serialize;

use crate::config::Level;

pub use memory::{Emission, MemorySink};
pub use tracing_sink::{REPORT_TARGET, TracingSink};

/// Destination for performance reports
///
/// Implementations are shared between counters and must be thread-safe. The
/// sink decides on its own whether an emission is rendered or persisted.
pub trait Sink: Send + Sync {
    /// Submit one structured record
    fn emit(
        &self,
        level: Level,
        template: &str,
        args: &[Arg],
        error: Option<&(dyn std::error::Error + 'static)>,
    );

    /// Whether emissions at `level` would be kept
    fn is_enabled(&self, level: Level) -> bool {
        !level.is_none()
    }
}

/// One positional template argument
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    /// Counter or step name
    Text(String),
    /// Elapsed time in milliseconds
    Millis(f64),
}

impl Arg {
    /// Text value, if this is a name
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Millis(_) => None,
        }
    }

    /// Milliseconds, if this is a duration
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Millis(ms) => write!(f, "{ms}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_accessors() {
        let name = Arg::from("parse");
        let ms = Arg::Millis(3.25);

        assert_eq!(name.as_text(), Some("parse"));
        assert_eq!(name.as_millis(), None);
        assert_eq!(ms.as_millis(), Some(3.25));
        assert_eq!(ms.to_string(), "3.25");
    }

    #[test]
    fn test_args_serialize_flat() {
        let args = vec![Arg::from("Test"), Arg::from("A"), Arg::Millis(10.5)];
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"["Test","A",10.5]"#
        );
    }
}

//! Counter construction
//!
//! [`start`] is the validated entry point. The two legacy constructors skip
//! validation and always hand out an active counter.

use std::sync::Arc;

use crate::config::{Config, Level, validate};
use crate::core::ConfigResult;
use crate::counter::{ActiveCounter, Counter, NoopCounter};
use crate::sink::Sink;

/// Validate `config` and start a counter reporting to `sink`
///
/// Returns a [`NoopCounter`] when `config.enabled` is `false` or the level is
/// [`Level::None`], and a running [`ActiveCounter`] otherwise.
///
/// # Errors
///
/// Returns [`ConfigError`](crate::ConfigError) when the config is invalid. No
/// counter is created in that case.
pub fn start(sink: Arc<dyn Sink>, config: Config) -> ConfigResult<Counter> {
    validate(&config)?;

    if !config.is_active() {
        tracing::debug!(
            target: "nebula_perf",
            counter = %config.name,
            enabled = config.enabled,
            level = %config.level,
            "performance counter disabled, using no-op"
        );
        return Ok(Counter::Noop(NoopCounter));
    }

    Ok(Counter::Active(ActiveCounter::new(
        sink,
        config.name,
        config.level,
    )))
}

/// Start a counter configured from `NEBULA_PERF_*` environment variables
///
/// # Errors
///
/// Returns [`ConfigError`](crate::ConfigError) when a variable holds an
/// unusable value or the resulting config is invalid.
pub fn start_from_env(sink: Arc<dyn Sink>) -> ConfigResult<Counter> {
    start_from_lookup(sink, |key| std::env::var(key).ok())
}

pub(crate) fn start_from_lookup<F>(sink: Arc<dyn Sink>, lookup: F) -> ConfigResult<Counter>
where
    F: Fn(&str) -> Option<String>,
{
    start(sink, Config::from_lookup(lookup)?)
}

/// Start an active counter that reports at [`Level::Information`]
#[deprecated(since = "0.1.0", note = "use `start` with a `Config` instead")]
pub fn start_default(sink: Arc<dyn Sink>, name: impl Into<String>) -> Counter {
    Counter::Active(ActiveCounter::new(sink, name, Level::Information))
}

/// Start an active counter that reports at `level`
#[deprecated(since = "0.1.0", note = "use `start` with a `Config` instead")]
pub fn start_with_log_level(level: Level, sink: Arc<dyn Sink>, name: impl Into<String>) -> Counter {
    Counter::Active(ActiveCounter::new(sink, name, level))
}

//! Sink that forwards reports to `tracing`

use super::{Arg, Sink};
use crate::config::Level;
use crate::format::render;

/// Target used for every report event
pub const REPORT_TARGET: &str = "nebula_perf::report";

/// Forwards reports to whatever `tracing` subscriber is installed
///
/// The event message is the rendered template. The raw `template` and a JSON
/// array of `args` are attached as fields for structured subscribers.
/// [`Level::Critical`] maps to `ERROR`; [`Level::None`] never emits.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink
    pub const fn new() -> Self {
        Self
    }
}

macro_rules! report_event {
    ($lvl:ident, $template:expr, $args:expr, $error:expr, $message:expr) => {
        tracing::event!(
            target: REPORT_TARGET,
            tracing::Level::$lvl,
            template = $template,
            args = %$args,
            error = $error,
            "{}",
            $message
        )
    };
}

impl Sink for TracingSink {
    fn emit(
        &self,
        level: Level,
        template: &str,
        args: &[Arg],
        error: Option<&(dyn std::error::Error + 'static)>,
    ) {
        let message = render(template, args);
        let fields = serde_json::to_string(args).unwrap_or_default();
        let error = error.map(tracing::field::display);

        match level {
            Level::Trace => report_event!(TRACE, template, fields, error, message),
            Level::Debug => report_event!(DEBUG, template, fields, error, message),
            Level::Information => report_event!(INFO, template, fields, error, message),
            Level::Warning => report_event!(WARN, template, fields, error, message),
            Level::Error | Level::Critical => {
                report_event!(ERROR, template, fields, error, message);
            }
            Level::None => {}
        }
    }

    fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Trace => tracing::enabled!(target: REPORT_TARGET, tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: REPORT_TARGET, tracing::Level::DEBUG),
            Level::Information => tracing::enabled!(target: REPORT_TARGET, tracing::Level::INFO),
            Level::Warning => tracing::enabled!(target: REPORT_TARGET, tracing::Level::WARN),
            Level::Error | Level::Critical => {
                tracing::enabled!(target: REPORT_TARGET, tracing::Level::ERROR)
            }
            Level::None => false,
        }
    }
}

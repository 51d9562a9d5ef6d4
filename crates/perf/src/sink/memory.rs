//! In-memory sink

use parking_lot::Mutex;

use super::{Arg, Sink};
use crate::config::Level;
use crate::format::render;

/// One captured report
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    /// Level the report was emitted at
    pub level: Level,
    /// Message template
    pub template: String,
    /// Ordered template arguments
    pub args: Vec<Arg>,
    /// Rendered error, if one was attached
    pub error: Option<String>,
}

impl Emission {
    /// Template with arguments substituted
    pub fn rendered(&self) -> String {
        render(&self.template, &self.args)
    }
}

/// Sink that keeps every emission in memory
///
/// Emissions below `min_level` are still accepted by [`Sink::emit`] but
/// [`Sink::is_enabled`] reports them as disabled, the same way a filtering
/// logger would.
#[derive(Debug)]
pub struct MemorySink {
    min_level: Level,
    emissions: Mutex<Vec<Emission>>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Sink that accepts every level except [`Level::None`]
    pub fn new() -> Self {
        Self::with_min_level(Level::Trace)
    }

    /// Sink that only reports `min_level` and above as enabled
    pub fn with_min_level(min_level: Level) -> Self {
        Self {
            min_level,
            emissions: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far
    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.lock().clone()
    }

    /// Most recent emission
    pub fn last(&self) -> Option<Emission> {
        self.emissions.lock().last().cloned()
    }

    /// Number of emissions
    pub fn len(&self) -> usize {
        self.emissions.lock().len()
    }

    /// Whether nothing was emitted
    pub fn is_empty(&self) -> bool {
        self.emissions.lock().is_empty()
    }

    /// Drop all captured emissions
    pub fn clear(&self) {
        self.emissions.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(
        &self,
        level: Level,
        template: &str,
        args: &[Arg],
        error: Option<&(dyn std::error::Error + 'static)>,
    ) {
        self.emissions.lock().push(Emission {
            level,
            template: template.to_string(),
            args: args.to_vec(),
            error: error.map(ToString::to_string),
        });
    }

    fn is_enabled(&self, level: Level) -> bool {
        !level.is_none() && level >= self.min_level
    }
}

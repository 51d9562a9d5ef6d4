//! # Nebula Perf - step-level performance counters
//!
//! Time the named steps of one unit of work and get a single structured
//! report with every step and the total.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use nebula_perf::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let sink = Arc::new(TracingSink::new());
//!     let mut counter = nebula_perf::start(sink, Config::new("checkout"))?;
//!
//!     let price = counter.record_step("price", || 40 + 2);
//!     let saved: Result<(), std::io::Error> = counter.try_record_step("save", || Ok(()));
//!
//!     counter.stop_and_report();
//!     assert_eq!(price, 42);
//!     assert!(saved.is_ok());
//!     Ok(())
//! }
//! ```
//!
//! Reports are handed to a [`Sink`] as a template plus ordered arguments, e.g.
//! `Reporting performance counter {CounterName}` with `["checkout", ...]`.
//! Disabled configs (or [`Level::None`]) yield a no-op counter that runs the
//! steps and nothing else.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod core;
mod counter;
mod factory;
mod format;
mod report;
mod sink;
mod timing;

// Public API
pub use config::{Config, DEFAULT_NAME, ENV_ENABLED, ENV_LEVEL, ENV_NAME, Level, validate};
pub use crate::core::{ConfigError, ConfigResult};
pub use counter::{ActiveCounter, Counter, NoopCounter, PerformanceCounter};
#[allow(deprecated)]
pub use factory::{start, start_default, start_from_env, start_with_log_level};
pub use format::render;
pub use report::{ReportMessage, StepRecord};
pub use sink::{Arg, Emission, MemorySink, REPORT_TARGET, Sink, TracingSink};
pub use timing::{Measured, MeasuredFuture, measure};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, ConfigError, Counter, Level, MemorySink, PerformanceCounter, Sink, TracingSink,
        start,
    };
}

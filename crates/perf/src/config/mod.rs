//! Configuration types
//!
//! This module is organized into:
//! - `base`: the [`Config`] struct and its presets
//! - `level`: report [`Level`] categories and their conversions
//! - `env`: loading from `NEBULA_PERF_*` variables
//! - `validate`: invariant checks run by the factory

mod base;
mod env;
mod level;
mod validate;

pub use base::{Config, DEFAULT_NAME};
pub use env::{ENV_ENABLED, ENV_LEVEL, ENV_NAME};
pub use level::Level;
pub use validate::validate;

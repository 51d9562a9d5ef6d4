//! Core components shared by the rest of the crate.
//!
//! ### [`error`] - Error handling
//! [`ConfigError`] and the [`ConfigResult`] alias used by configuration,
//! validation and the factory.

pub mod error;

pub use error::{ConfigError, ConfigResult};

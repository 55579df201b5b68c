//! Configuration model for cleansweep.
//!
//! This module defines the Config struct that represents an optional YAML
//! settings file passed with `--config`. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values. Command-line flags override file values.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_DISPLAY_LIMIT};

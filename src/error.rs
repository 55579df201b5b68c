//! Error types for the cleansweep CLI.
//!
//! The scan, remove, and autostart engines never fail for expected conditions
//! (missing files, permission limits); they swallow and count those. This type
//! covers what the command layer owns: resolving the scan root, loading the
//! config file, and reporting autostart toggles that did not take effect.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cleansweep commands.
#[derive(Error, Debug)]
pub enum CleanSweepError {
    /// User provided invalid arguments or the environment cannot be resolved.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// An autostart entry could not be toggled.
    #[error("Autostart update failed: {0}")]
    AutostartError(String),
}

impl CleanSweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CleanSweepError::UserError(_) => exit_codes::USER_ERROR,
            CleanSweepError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            CleanSweepError::AutostartError(_) => exit_codes::AUTOSTART_FAILURE,
        }
    }
}

/// Result type alias for cleansweep operations.
pub type Result<T> = std::result::Result<T, CleanSweepError>;

//! Environment resolution for cleansweep commands.
//!
//! Every command that touches the filesystem needs two paths: the user's home
//! directory (for `~` abbreviations in output) and the scan root. This module
//! resolves both once, so commands never consult the environment themselves.

use crate::config::Config;
use crate::error::{CleanSweepError, Result};
use std::path::{Path, PathBuf};

/// Resolved paths for one command run. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    /// The user's home directory.
    pub home: PathBuf,

    /// Directory the scan starts from (the home directory unless overridden).
    pub root: PathBuf,
}

impl ScanContext {
    /// Resolve the context for the current user.
    ///
    /// # Returns
    ///
    /// * `Ok(ScanContext)` - Home found and root made absolute
    /// * `Err(CleanSweepError::UserError)` - No home directory, or the root
    ///   cannot be made absolute (exit code 1)
    pub fn resolve(config: &Config) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            CleanSweepError::UserError("could not determine the home directory".to_string())
        })?;

        Self::resolve_with_home(home, config.root.as_deref())
    }

    /// Resolve against a known home directory.
    ///
    /// This is useful for testing or when the home directory is known.
    pub fn resolve_with_home(home: PathBuf, root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => std::path::absolute(root).map_err(|e| {
                CleanSweepError::UserError(format!(
                    "failed to resolve scan root '{}': {}",
                    root.display(),
                    e
                ))
            })?,
            None => home.clone(),
        };

        if !root.is_dir() {
            tracing::warn!(root = %root.display(), "scan root is not a directory");
        }

        Ok(Self { home, root })
    }

    /// Whether the scan root is the home directory.
    pub fn is_home_scan(&self) -> bool {
        self.root == self.home
    }
}

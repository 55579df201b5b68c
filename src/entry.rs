//! Filesystem entries reported by a scan.
//!
//! An [`Entry`] is nothing more than a path. Its name, directory flag, and
//! display form are derived on demand so that a stale entry (deleted or
//! replaced since the scan) never carries outdated metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Risk tier assigned to a classified entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Disposable: caches, logs, OS metadata files, empty directories.
    Safe,
    /// Looks like source code or project configuration; costly if wrongly deleted.
    Risky,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Safe => write!(f, "safe"),
            Tier::Risky => write!(f, "risky"),
        }
    }
}

/// A filesystem path found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry {
    path: PathBuf,
}

impl Entry {
    /// Wrap a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path segment, or the whole path when it has none (e.g. `/`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Whether the path currently resolves to a directory (symlinks followed).
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// Parent directory for display, with `home` abbreviated to `~`.
    pub fn parent_display_path(&self, home: &Path) -> String {
        match self.path.parent() {
            Some(parent) => abbreviate_home(parent, home),
            None => String::new(),
        }
    }
}

impl From<PathBuf> for Entry {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Render `path` with a leading `home` replaced by `~`.
pub fn abbreviate_home(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~{}{}", std::path::MAIN_SEPARATOR, rest.display()),
        Err(_) => path.display().to_string(),
    }
}

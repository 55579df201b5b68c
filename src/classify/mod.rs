//! Name-based classification of filesystem entries.
//!
//! Classification never touches the filesystem. It looks at the entry name and
//! whether the caller says it is a directory:
//!
//! - Directories are Safe only when their name is in the Safe-directory set.
//!   They are never Risky.
//! - Files are tested against the Safe globs first, then the Risky globs.
//!   Safe wins when both match.
//! - Anything else is unclassified (`None`) and the caller skips it.
//!
//! Globs follow the host's filename semantics: case-insensitive on Windows,
//! case-sensitive elsewhere.

pub mod patterns;

#[cfg(test)]
mod tests;

use crate::entry::Tier;
use crate::error::{CleanSweepError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::sync::LazyLock;

/// Pattern tables a [`Classifier`] is compiled from.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierRules<'a> {
    /// Exact directory names classified Safe.
    pub safe_dirs: &'a [&'a str],
    /// File globs classified Safe.
    pub safe_files: &'a [&'a str],
    /// File globs classified Risky.
    pub risky_files: &'a [&'a str],
}

impl ClassifierRules<'static> {
    /// The built-in tables from [`patterns`].
    pub const STANDARD: ClassifierRules<'static> = ClassifierRules {
        safe_dirs: patterns::SAFE_DIRS,
        safe_files: patterns::SAFE_FILE_PATTERNS,
        risky_files: patterns::RISKY_FILE_PATTERNS,
    };
}

static STANDARD: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::from_rules(&ClassifierRules::STANDARD)
        .expect("built-in classifier patterns are valid globs")
});

/// Compiled classification rules.
#[derive(Debug, Clone)]
pub struct Classifier {
    safe_dirs: Vec<String>,
    safe_files: GlobSet,
    risky_files: GlobSet,
    case_insensitive: bool,
}

impl Classifier {
    /// Compile a classifier from pattern tables, using the host's case rules.
    pub fn from_rules(rules: &ClassifierRules<'_>) -> Result<Self> {
        Self::with_case_rules(rules, cfg!(windows))
    }

    /// Compile a classifier with explicit case sensitivity.
    pub fn with_case_rules(rules: &ClassifierRules<'_>, case_insensitive: bool) -> Result<Self> {
        Ok(Self {
            safe_dirs: rules.safe_dirs.iter().map(|s| s.to_string()).collect(),
            safe_files: build_globset(rules.safe_files, "safe_files", case_insensitive)?,
            risky_files: build_globset(rules.risky_files, "risky_files", case_insensitive)?,
            case_insensitive,
        })
    }

    /// The process-wide classifier built from [`ClassifierRules::STANDARD`].
    ///
    /// # Panics
    /// Panics on first use if the built-in tables fail to compile, which the
    /// unit tests rule out.
    pub fn standard() -> &'static Classifier {
        &STANDARD
    }

    /// Classify an entry by name.
    pub fn classify(&self, name: &str, is_dir: bool) -> Option<Tier> {
        if is_dir {
            return self.is_safe_dir(name).then_some(Tier::Safe);
        }

        if self.safe_files.is_match(name) {
            Some(Tier::Safe)
        } else if self.risky_files.is_match(name) {
            Some(Tier::Risky)
        } else {
            None
        }
    }

    /// Whether `name` is one of the Safe-directory names.
    pub fn is_safe_dir(&self, name: &str) -> bool {
        self.safe_dirs.iter().any(|dir| {
            if self.case_insensitive {
                dir.eq_ignore_ascii_case(name)
            } else {
                dir == name
            }
        })
    }
}

/// Classify with the built-in rules.
pub fn classify(name: &str, is_dir: bool) -> Option<Tier> {
    Classifier::standard().classify(name, is_dir)
}

/// Build a GlobSet from a list of glob patterns.
fn build_globset(patterns: &[&str], field_name: &str, case_insensitive: bool) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                CleanSweepError::UserError(format!(
                    "invalid glob pattern in {}: '{}' - {}",
                    field_name, pattern, e
                ))
            })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        CleanSweepError::UserError(format!("failed to compile {} globs: {}", field_name, e))
    })
}

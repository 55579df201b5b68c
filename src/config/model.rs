//! Config struct definition and default implementation.

use crate::scan::DEFAULT_MAX_ITEMS;
use serde::Deserialize;
use std::path::PathBuf;

/// Default number of entries printed per tier.
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

/// Settings for a cleansweep run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum total entries one scan collects.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Maximum entries printed per tier.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Scan root. `None` means the home directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            display_limit: default_display_limit(),
            root: None,
        }
    }
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{CleanSweepError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CleanSweepError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CleanSweepError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Load `path` when given, otherwise use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                CleanSweepError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `max_items` must be positive
    /// - `display_limit` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(CleanSweepError::ConfigError(
                "max_items must be greater than 0".to_string(),
            ));
        }

        if self.display_limit == 0 {
            return Err(CleanSweepError::ConfigError(
                "display_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, root: Option<PathBuf>, max_items: Option<usize>) -> Result<Self> {
        if let Some(root) = root {
            self.root = Some(root);
        }
        if let Some(max_items) = max_items {
            self.max_items = max_items;
        }
        self.validate()?;
        Ok(self)
    }
}

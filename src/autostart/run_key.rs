//! Registry `Run`-key login items.

use super::{AutostartEntry, AutostartKind};
use std::io;

/// Path of the per-user `Run` key below `HKEY_CURRENT_USER`.
pub const RUN_KEY_PATH: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// A flat set of named string values, such as a registry key.
pub trait ValueStore {
    /// Human-readable location of the store, e.g. the full registry key path.
    fn location(&self) -> String;

    /// Every string value as `(name, data)`, in store order.
    fn read_values(&self) -> io::Result<Vec<(String, String)>>;

    /// Create or overwrite a string value.
    fn write_value(&self, name: &str, data: &str) -> io::Result<()>;

    /// Delete a value. Fails with `ErrorKind::NotFound` when it is absent.
    fn delete_value(&self, name: &str) -> io::Result<()>;
}

/// Login items stored as values of a `Run` key.
#[derive(Debug)]
pub struct RunKey<V> {
    values: V,
}

impl<V: ValueStore> RunKey<V> {
    /// Wrap a value store.
    pub fn new(values: V) -> Self {
        Self { values }
    }

    /// Every value as an enabled entry. An unreadable key lists nothing.
    pub fn list(&self) -> Vec<AutostartEntry> {
        let key = self.values.location();
        match self.values.read_values() {
            Ok(values) => values
                .into_iter()
                .map(|(name, data)| AutostartEntry {
                    name,
                    path: data,
                    enabled: true,
                    kind: AutostartKind::RegistryValue { key: key.clone() },
                })
                .collect(),
            Err(e) => {
                tracing::debug!(%key, error = %e, "run key unreadable");
                Vec::new()
            }
        }
    }

    /// Write (`enabled`) or delete the value `name`.
    ///
    /// Deleting a value that is already gone counts as success.
    pub fn set_enabled(&self, name: &str, command: &str, enabled: bool) -> bool {
        let result = if enabled {
            self.values.write_value(name, command)
        } else {
            match self.values.delete_value(name) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            }
        };

        match result {
            Ok(()) => {
                tracing::debug!(%name, enabled, "run key updated");
                true
            }
            Err(e) => {
                tracing::debug!(%name, enabled, error = %e, "run key update failed");
                false
            }
        }
    }
}

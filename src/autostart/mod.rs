//! Programs configured to start at login.
//!
//! On Windows, login items live in two places:
//!
//! - string values under the current user's `Run` registry key, and
//! - executable-like files in the user's Startup folder.
//!
//! A registry value is either present (enabled) or absent; disabling deletes
//! it. A Startup-folder file is disabled by renaming it with the
//! [`DISABLED_SUFFIX`], and enabled again by stripping the suffix.
//!
//! Listings are snapshots. Nothing is cached: every [`AutostartStore::list`]
//! re-reads the store, and callers should re-list after each toggle.
//!
//! On every other platform [`platform_store`] returns [`Unsupported`], which
//! lists nothing and refuses every toggle.

mod run_key;
mod startup_folder;

#[cfg(windows)]
mod registry;


pub use run_key::{RUN_KEY_PATH, RunKey, ValueStore};
pub use startup_folder::{DISABLED_SUFFIX, STARTUP_EXTENSIONS, StartupFolder};

#[cfg(windows)]
pub use registry::CurrentUserRunKey;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where an autostart entry is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AutostartKind {
    /// A named string value in a registry key.
    RegistryValue {
        /// Full registry path of the key holding the value.
        key: String,
    },
    /// A file in the Startup folder.
    ShortcutFile {
        /// Current on-disk location, including any disabling suffix.
        file: PathBuf,
    },
}

impl fmt::Display for AutostartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutostartKind::RegistryValue { .. } => write!(f, "registry"),
            AutostartKind::ShortcutFile { .. } => write!(f, "startup folder"),
        }
    }
}

/// Snapshot of one login item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutostartEntry {
    /// Display label (registry value name, or file name without extension).
    pub name: String,
    /// Command line or file the entry launches.
    pub path: String,
    /// Whether the entry runs at login.
    pub enabled: bool,
    /// Backing store.
    #[serde(flatten)]
    pub kind: AutostartKind,
}

/// Read and toggle access to a set of login items.
pub trait AutostartStore {
    /// Whether this platform supports autostart management at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Fresh listing of every entry. Never fails; unreadable sources are skipped.
    fn list(&self) -> Vec<AutostartEntry>;

    /// Enable or disable `entry`. Returns whether the store is now in the requested state.
    fn set_enabled(&self, entry: &AutostartEntry, enabled: bool) -> bool;
}

/// The Windows login-item store: a `Run` key plus an optional Startup folder.
#[derive(Debug)]
pub struct LoginItems<V> {
    run_key: RunKey<V>,
    startup: Option<StartupFolder>,
}

impl<V: ValueStore> LoginItems<V> {
    /// Combine a `Run` key and a Startup folder.
    pub fn new(run_key: RunKey<V>, startup: Option<StartupFolder>) -> Self {
        Self { run_key, startup }
    }
}

impl<V: ValueStore> AutostartStore for LoginItems<V> {
    fn list(&self) -> Vec<AutostartEntry> {
        let mut entries = self.run_key.list();
        if let Some(startup) = &self.startup {
            entries.extend(startup.list());
        }
        entries
    }

    fn set_enabled(&self, entry: &AutostartEntry, enabled: bool) -> bool {
        match &entry.kind {
            AutostartKind::RegistryValue { .. } => {
                self.run_key.set_enabled(&entry.name, &entry.path, enabled)
            }
            AutostartKind::ShortcutFile { file } => self
                .startup
                .as_ref()
                .is_some_and(|startup| startup.set_enabled(file, enabled)),
        }
    }
}

/// Store for platforms without autostart management.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl AutostartStore for Unsupported {
    fn is_supported(&self) -> bool {
        false
    }

    fn list(&self) -> Vec<AutostartEntry> {
        Vec::new()
    }

    fn set_enabled(&self, entry: &AutostartEntry, _enabled: bool) -> bool {
        tracing::debug!(name = %entry.name, "autostart is not supported on this platform");
        false
    }
}

/// The login-item store for the current user on this platform.
#[cfg(windows)]
pub fn platform_store() -> Box<dyn AutostartStore> {
    Box::new(LoginItems::new(
        RunKey::new(CurrentUserRunKey),
        StartupFolder::for_current_user(),
    ))
}

/// The login-item store for the current user on this platform.
#[cfg(not(windows))]
pub fn platform_store() -> Box<dyn AutostartStore> {
    Box::new(Unsupported)
}

/// List the current user's login items (empty on unsupported platforms).
pub fn list_autostart() -> Vec<AutostartEntry> {
    platform_store().list()
}

/// Enable or disable one login item (always `false` on unsupported platforms).
pub fn set_autostart_enabled(entry: &AutostartEntry, enabled: bool) -> bool {
    platform_store().set_enabled(entry, enabled)
}

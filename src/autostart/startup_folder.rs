//! Startup-folder login items.

use super::{AutostartEntry, AutostartKind};
use crate::fs::rename_no_clobber;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to a Startup-folder file name to disable it.
pub const DISABLED_SUFFIX: &str = ".disabled";

/// File extensions (lowercase, with dot) that count as login items.
pub const STARTUP_EXTENSIONS: &[&str] = &[".lnk", ".exe", ".bat", ".cmd"];

/// A folder whose files are launched at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupFolder {
    dir: PathBuf,
}

impl StartupFolder {
    /// Use `dir` as the Startup folder.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `%APPDATA%\Microsoft\Windows\Start Menu\Programs\Startup`, when the
    /// roaming app-data directory can be resolved.
    pub fn for_current_user() -> Option<Self> {
        dirs::config_dir().map(|appdata| {
            Self::new(
                appdata
                    .join("Microsoft")
                    .join("Windows")
                    .join("Start Menu")
                    .join("Programs")
                    .join("Startup"),
            )
        })
    }

    /// Every eligible file in the folder, enabled or not.
    pub fn list(&self) -> Vec<AutostartEntry> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                tracing::debug!(dir = %self.dir.display(), error = %e, "startup folder unreadable");
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for dir_entry in read_dir.flatten() {
            if !dir_entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let file_name = dir_entry.file_name().to_string_lossy().into_owned();
            let Some((name, enabled)) = parse_startup_name(&file_name) else {
                continue;
            };
            let file = dir_entry.path();
            entries.push(AutostartEntry {
                name,
                path: file.display().to_string(),
                enabled,
                kind: AutostartKind::ShortcutFile { file },
            });
        }
        entries
    }

    /// Rename `file` into the requested state.
    ///
    /// Refuses files outside this folder and never overwrites an existing
    /// file. A file already in the requested state is left as is.
    pub fn set_enabled(&self, file: &Path, enabled: bool) -> bool {
        if file.parent() != Some(self.dir.as_path()) {
            tracing::debug!(file = %file.display(), "refusing to rename file outside startup folder");
            return false;
        }
        let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        let target = match (enabled, has_disabled_suffix(file_name)) {
            (true, true) => {
                file.with_file_name(&file_name[..file_name.len() - DISABLED_SUFFIX.len()])
            }
            (false, false) => file.with_file_name(format!("{file_name}{DISABLED_SUFFIX}")),
            _ => return file.is_file(),
        };

        match rename_no_clobber(file, &target) {
            Ok(()) => {
                tracing::debug!(from = %file.display(), to = %target.display(), "renamed startup item");
                true
            }
            Err(e) => {
                tracing::debug!(file = %file.display(), error = %e, "startup item rename failed");
                false
            }
        }
    }
}

fn has_disabled_suffix(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    lower.len() > DISABLED_SUFFIX.len() && lower.ends_with(DISABLED_SUFFIX)
}

/// Display name and enabled flag for an eligible file name, `None` otherwise.
fn parse_startup_name(file_name: &str) -> Option<(String, bool)> {
    let enabled = !has_disabled_suffix(file_name);
    let active_name = if enabled {
        file_name
    } else {
        &file_name[..file_name.len() - DISABLED_SUFFIX.len()]
    };

    let lower = active_name.to_ascii_lowercase();
    let extension = STARTUP_EXTENSIONS
        .iter()
        .find(|ext| lower.len() > ext.len() && lower.ends_with(**ext))?;

    let display = &active_name[..active_name.len() - extension.len()];
    Some((display.to_string(), enabled))
}

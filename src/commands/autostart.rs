//! Implementation of the `cleansweep autostart` subcommands.
//!
//! Every action works from a fresh listing: the entry is looked up by name,
//! toggled, and nothing is cached between runs.

use crate::cli::{AutostartDisableArgs, AutostartEnableArgs, AutostartListArgs};
use cleansweep::autostart::{AutostartEntry, AutostartKind, AutostartStore, RUN_KEY_PATH};
use cleansweep::error::{CleanSweepError, Result};
use std::fmt::Write;

/// Execute `cleansweep autostart list`.
pub fn cmd_list(store: &dyn AutostartStore, args: AutostartListArgs) -> Result<()> {
    if !store.is_supported() {
        println!("Autostart management is not available on this platform.");
        return Ok(());
    }

    let entries = store.list();

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(|e| {
            CleanSweepError::UserError(format!("failed to serialize autostart entries: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", render_entries(&entries));
    Ok(())
}

/// Execute `cleansweep autostart enable`.
pub fn cmd_enable(store: &dyn AutostartStore, args: AutostartEnableArgs) -> Result<()> {
    require_supported(store)?;

    let entry = match find_entry(&store.list(), &args.name, true) {
        Some(entry) => entry,
        // A disabled registry value no longer exists, so it can only be
        // re-created from a command line.
        None => match args.command {
            Some(command) => registry_entry(&args.name, command),
            None => {
                return Err(CleanSweepError::UserError(format!(
                    "no autostart entry named '{}'.\n\n\
                     Registry entries are deleted when disabled; re-create one with:\n  \
                     cleansweep autostart enable {} --command <CMD>",
                    args.name, args.name
                )));
            }
        },
    };

    toggle(store, &entry, true)?;
    println!("Enabled: {} ({})", entry.name, entry.kind);
    Ok(())
}

/// Execute `cleansweep autostart disable`.
pub fn cmd_disable(store: &dyn AutostartStore, args: AutostartDisableArgs) -> Result<()> {
    require_supported(store)?;

    let entry = find_entry(&store.list(), &args.name, false).ok_or_else(|| {
        CleanSweepError::UserError(format!("no autostart entry named '{}'", args.name))
    })?;

    toggle(store, &entry, false)?;
    println!("Disabled: {} ({})", entry.name, entry.kind);
    Ok(())
}

fn require_supported(store: &dyn AutostartStore) -> Result<()> {
    if store.is_supported() {
        Ok(())
    } else {
        Err(CleanSweepError::UserError(
            "autostart management is not available on this platform".to_string(),
        ))
    }
}

fn toggle(store: &dyn AutostartStore, entry: &AutostartEntry, enabled: bool) -> Result<()> {
    if store.set_enabled(entry, enabled) {
        Ok(())
    } else {
        Err(CleanSweepError::AutostartError(format!(
            "'{}' was not {}",
            entry.name,
            if enabled { "enabled" } else { "disabled" }
        )))
    }
}

/// Find an entry by exact name. When several share the name, prefer one not
/// yet in the `wanted` state.
fn find_entry(entries: &[AutostartEntry], name: &str, wanted: bool) -> Option<AutostartEntry> {
    let mut matches = entries.iter().filter(|e| e.name == name);
    let first = matches.clone().next()?;
    Some(matches.find(|e| e.enabled != wanted).unwrap_or(first).clone())
}

fn registry_entry(name: &str, command: String) -> AutostartEntry {
    AutostartEntry {
        name: name.to_string(),
        path: command,
        enabled: false,
        kind: AutostartKind::RegistryValue {
            key: format!(r"HKEY_CURRENT_USER\{}", RUN_KEY_PATH),
        },
    }
}

fn render_entries(entries: &[AutostartEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        out.push_str("No autostart entries found.\n");
        return out;
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let _ = writeln!(out, "Autostart entries ({}):", entries.len());
    for entry in entries {
        let _ = writeln!(
            out,
            "  [{}] {:<width$}  {:<14}  {}",
            if entry.enabled { "on " } else { "off" },
            entry.name,
            entry.kind.to_string(),
            entry.path,
            width = width
        );
    }
    out
}

//! Command implementations for cleansweep.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler receives the loaded [`Config`] and its own
//! arguments; flags override config values inside the handler.

mod autostart;
mod clean;
mod scan;

use crate::cli::{AutostartAction, AutostartCommand, Cli, Command};
use cleansweep::config::Config;
use cleansweep::error::Result;

/// Dispatch a command to its implementation.
///
/// The config file is loaded once here, so a bad `--config` fails every
/// command the same way before any work starts.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load_optional(cli.config.as_deref())?;

    match cli.command {
        Command::Scan(args) => scan::cmd_scan(&config, args),
        Command::Clean(args) => clean::cmd_clean(&config, args),
        Command::Autostart(cmd) => dispatch_autostart(cmd),
    }
}

/// Dispatch autostart subcommands.
fn dispatch_autostart(cmd: AutostartCommand) -> Result<()> {
    let store = cleansweep::autostart::platform_store();
    match cmd.action {
        AutostartAction::List(args) => autostart::cmd_list(store.as_ref(), args),
        AutostartAction::Enable(args) => autostart::cmd_enable(store.as_ref(), args),
        AutostartAction::Disable(args) => autostart::cmd_disable(store.as_ref(), args),
    }
}

//! CLI argument parsing for cleansweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cleansweep: find disposable files under your home directory and manage
/// programs that start at login.
///
/// Scans are bounded: at most `--max-items` entries are reported, and nothing
/// is deleted without `clean --yes`.
#[derive(Parser, Debug)]
#[command(name = "cleansweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Load settings from a YAML config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for cleansweep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan for disposable (safe) and risky entries.
    ///
    /// Lists what was found without changing anything.
    Scan(ScanArgs),

    /// Delete scanned entries.
    ///
    /// Dry-run by default; pass --yes to delete. Risky entries are only
    /// included with --include-risky.
    Clean(CleanArgs),

    /// Login autostart management (Windows).
    ///
    /// List, enable, or disable programs that start at login.
    Autostart(AutostartCommand),
}

/// Which tiers `scan` prints.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TierFilter {
    /// Only safe entries.
    Safe,
    /// Only risky entries.
    Risky,
    /// Both tiers.
    #[default]
    All,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to scan (default: home directory).
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Maximum number of entries to collect.
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,

    /// Which tier(s) to print.
    #[arg(long, value_enum, default_value_t = TierFilter::All)]
    pub tier: TierFilter,

    /// Print the scan result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Directory to scan (default: home directory).
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Maximum number of entries to collect.
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,

    /// Also delete risky entries (source, config, notebooks).
    #[arg(long)]
    pub include_risky: bool,

    /// Actually perform the deletion (default is dry-run).
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for autostart subcommands.
#[derive(Parser, Debug)]
pub struct AutostartCommand {
    #[command(subcommand)]
    pub action: AutostartAction,
}

/// Available autostart actions.
#[derive(Subcommand, Debug)]
pub enum AutostartAction {
    /// List login items with their state.
    List(AutostartListArgs),

    /// Enable a login item.
    ///
    /// A disabled registry item no longer exists in the registry; pass
    /// --command to re-create it.
    Enable(AutostartEnableArgs),

    /// Disable a login item.
    Disable(AutostartDisableArgs),
}

/// Arguments for the `autostart list` command.
#[derive(Parser, Debug)]
pub struct AutostartListArgs {
    /// Print entries as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `autostart enable` command.
#[derive(Parser, Debug)]
pub struct AutostartEnableArgs {
    /// Entry name as shown by `autostart list`.
    pub name: String,

    /// Command line to register when the entry is not listed.
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,
}

/// Arguments for the `autostart disable` command.
#[derive(Parser, Debug)]
pub struct AutostartDisableArgs {
    /// Entry name as shown by `autostart list`.
    pub name: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

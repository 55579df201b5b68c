//! Cleansweep: find disposable files under a directory tree and manage login
//! autostart entries.
//!
//! The library is the engine behind the `cleansweep` CLI:
//!
//! - [`scan`] walks a tree within a fixed item budget and sorts what it finds
//!   into Safe and Risky [`Tier`]s.
//! - [`delete_entries`] removes selected entries non-recursively and reports
//!   how many went away.
//! - [`list_autostart`] and [`set_autostart_enabled`] read and toggle the
//!   current user's login items (Windows only; empty elsewhere).

pub mod autostart;
pub mod classify;
pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod remove;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_support;

pub use autostart::{AutostartEntry, AutostartKind, list_autostart, set_autostart_enabled};
pub use classify::classify;
pub use entry::{Entry, Tier};
pub use error::{CleanSweepError, Result};
pub use remove::delete_entries;
pub use scan::{ScanResult, scan};

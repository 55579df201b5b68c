//! Exit code constants for the cleansweep CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unresolvable home directory, unknown entry)
//! - 2: Config file could not be read or failed validation
//! - 3: Autostart toggle failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unresolvable home directory, or unknown autostart entry.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: unreadable, unparsable, or invalid config file.
pub const CONFIG_ERROR: i32 = 2;

/// Autostart failure: the store refused to enable or disable an entry.
pub const AUTOSTART_FAILURE: i32 = 3;

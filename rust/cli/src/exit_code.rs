//! Process exit codes shared by every subcommand handler.

/// Command completed normally.
pub const SUCCESS: i32 = 0;

/// Command failed: bad input, configuration, or I/O.
pub const ERROR: i32 = 2;

/// Run was cut short (128 + SIGINT).
pub const INTERRUPTED: i32 = 130;

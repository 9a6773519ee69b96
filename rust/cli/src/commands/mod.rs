//! Command handler modules for the ecard CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) and, where
//!   interactive, stdin (`&mut dyn BufRead`) passed as parameters
//! - Error propagation via the `CliError` enum

mod cfg;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

//! # ecard CLI Library
//!
//! Command-line shell for the E-Card engine. The engine core is
//! presentation-free; this crate is the "renderer" collaborator: it shows
//! state, schedules the two-phase reveal, and feeds player intents back in.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["ecard", "sim", "--sessions", "10", "--seed", "42"];
//! let code = ecard_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive sessions against the computer
//! - `sim`: Autoplay sessions with uniform-random play on both sides
//! - `stats`: Aggregate statistics from JSONL transcript files
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, EcardCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_sim_command, handle_stats_command,
};

pub use cli::RoleArg;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler, reading interactive input from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```no_run
/// use std::io;
/// let args = vec!["ecard", "cfg"];
/// let code = ecard_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Like [`run`], but with an injected input stream so interactive commands
/// can be driven by scripted input in tests.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = EcardCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first, then a short command index
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "");
                    write_or_exit!(err, "E-Card CLI");
                    write_or_exit!(err, "Usage: ecard <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: ecard --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Play { role, seed, log } => {
                match handle_play_command(role, seed, log, out, err, stdin) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Sim {
                sessions,
                seed,
                role,
                output,
            } => match handle_sim_command(sessions, seed, role, output, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Stats { input } => match handle_stats_command(input, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_every_subcommand() {
        assert!(EcardCli::try_parse_from(["ecard", "cfg"]).is_ok());
        assert!(EcardCli::try_parse_from(["ecard", "play", "--role", "emperor"]).is_ok());
        assert!(EcardCli::try_parse_from([
            "ecard", "sim", "--sessions", "5", "--seed", "42", "--role", "slave"
        ])
        .is_ok());
        assert!(EcardCli::try_parse_from(["ecard", "stats", "--input", "x.jsonl"]).is_ok());
    }

    #[test]
    fn cli_rejects_unknown_role_values() {
        assert!(EcardCli::try_parse_from(["ecard", "play", "--role", "citizen"]).is_err());
        assert!(EcardCli::try_parse_from(["ecard", "sim", "--role", "king"]).is_err());
    }

    #[test]
    fn stats_requires_an_input_path() {
        assert!(EcardCli::try_parse_from(["ecard", "stats"]).is_err());
    }

    #[test]
    fn role_arg_maps_to_engine_roles() {
        use ecard_engine::cards::Role;
        assert_eq!(RoleArg::Emperor.to_role(), Role::Emperor);
        assert_eq!(RoleArg::Slave.to_role(), Role::Slave);
        assert_eq!(RoleArg::Slave.as_str(), "slave");
    }

    #[test]
    fn sim_dispatch_runs_to_completion() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(3, Some(7), None, None, &mut out, &mut err);
        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("sessions: 3"));
    }
}

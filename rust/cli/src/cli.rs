//! clap parser definitions for the `ecard` binary.

use clap::{Parser, Subcommand, ValueEnum};
use ecard_engine::cards::Role;

#[derive(Debug, Parser)]
#[command(
    name = "ecard",
    version,
    about = "E-Card: the Emperor/Citizen/Slave card game in the terminal"
)]
pub struct EcardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactive sessions against the computer
    Play {
        /// Side to play; prompts interactively when omitted
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        /// RNG seed for the computer's draws (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Append session transcripts to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Autoplay sessions with uniform-random play on both sides
    Sim {
        /// Number of sessions to run (must be >= 1)
        #[arg(long, default_value_t = 1)]
        sessions: u32,
        /// Base RNG seed; per-session seeds are derived from it
        #[arg(long)]
        seed: Option<u64>,
        /// Side the simulated player takes (default: emperor)
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        /// Write session transcripts to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a JSONL transcript file
    Stats {
        /// Transcript file produced by `play --log` or `sim --output`
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Role flag for `play` and `sim`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Hand of one Emperor plus four Citizens
    Emperor,
    /// Hand of one Slave plus four Citizens
    Slave,
}

impl RoleArg {
    pub fn to_role(self) -> Role {
        match self {
            RoleArg::Emperor => Role::Emperor,
            RoleArg::Slave => Role::Slave,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleArg::Emperor => "emperor",
            RoleArg::Slave => "slave",
        }
    }
}

//! # Sim Command
//!
//! Unattended E-Card sessions with uniform-random play on both sides,
//! optionally writing a JSONL transcript for `stats` to consume. Per-session
//! seeds are derived from the base seed, so a run is reproducible from its
//! header line.

use crate::cli::RoleArg;
use crate::error::CliError;
use crate::ui;
use ecard_engine::cards::Role;
use ecard_engine::record::{SessionLogger, SessionRecord};
use ecard_engine::rules::Outcome;
use ecard_engine::session::GameSession;
use ecard_engine::strategy::{CpuStrategy, UniformRandom};
use std::io::Write;

/// Offset between the player-side and cpu-side RNG streams of one session.
const PLAYER_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Handle the sim command: autoplay `sessions` sessions and report a tally.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when `sessions` is zero and propagates
/// I/O and engine errors.
pub fn handle_sim_command(
    sessions: u32,
    seed: Option<u64>,
    role: Option<RoleArg>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if sessions == 0 {
        ui::write_error(err, "sessions must be >= 1")?;
        return Err(CliError::InvalidInput("sessions must be >= 1".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let role = role.map(RoleArg::to_role).unwrap_or(Role::Emperor);

    let mut logger = match &output {
        Some(path) => Some(SessionLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: sessions={} role={} seed={}",
        sessions,
        role.as_str(),
        seed
    )?;

    let mut player_wins = 0u32;
    let mut cpu_wins = 0u32;
    let mut exhausted = 0u32;
    let mut total_rounds = 0usize;

    for i in 0..sessions {
        let session_seed = seed.wrapping_add(u64::from(i));
        let cpu = Box::new(UniformRandom::new_with_seed(session_seed));
        let mut player = UniformRandom::new_with_seed(session_seed ^ PLAYER_STREAM_OFFSET);
        let mut session = GameSession::new(role, cpu);

        while !session.is_over() {
            let card = player.choose_card(session.player_hand());
            session.play_round(card)?;
            session.resolve_round()?;
            if session.check_session_end() {
                break;
            }
        }
        total_rounds += session.history().len();

        let result = match session.last_round().map(|r| r.outcome) {
            Some(Outcome::PlayerWin) => {
                player_wins += 1;
                "player"
            }
            Some(Outcome::CpuWin) => {
                cpu_wins += 1;
                "cpu"
            }
            _ => {
                exhausted += 1;
                "exhausted"
            }
        };

        if let Some(logger) = logger.as_mut() {
            let record = SessionRecord {
                session_id: logger.next_id(),
                role,
                seed: Some(session_seed),
                rounds: session.history().to_vec(),
                score: session.score(),
                result: Some(result.to_string()),
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "sessions: {}", sessions)?;
    writeln!(out, "player wins: {}", player_wins)?;
    writeln!(out, "cpu wins: {}", cpu_wins)?;
    writeln!(out, "exhausted draws: {}", exhausted)?;
    writeln!(out, "total rounds: {}", total_rounds)?;
    if let Some(path) = &output {
        writeln!(out, "transcript: {}", path)?;
    }
    Ok(())
}

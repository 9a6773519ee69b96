//! # Play Command
//!
//! Interactive E-Card gameplay against the computer.
//!
//! The loop follows the two-phase round protocol: a card play mutates the
//! session, the face-down/flip text covers the reveal beat, and only then is
//! the round resolved. After a session the player may play again with the
//! same role (score carries over), change role (score resets), or quit.

use crate::cli::RoleArg;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_history_line, format_score};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_card_choice, parse_role, ParseResult};
use ecard_engine::cards::Role;
use ecard_engine::record::{SessionLogger, SessionRecord};
use ecard_engine::rules::Outcome;
use ecard_engine::session::{GameSession, Score};
use ecard_engine::strategy::UniformRandom;
use std::io::{BufRead, Write};

/// What the player picked from the end-of-session menu.
enum AfterSession {
    Again,
    ChangeRole,
    Quit,
}

/// Handle the play command: interactive E-Card sessions.
///
/// # Arguments
///
/// * `role` - Side to play; when `None`, falls back to configuration and
///   then to an interactive role-selection prompt
/// * `seed` - RNG seed for the computer's draws (default: configuration,
///   then random)
/// * `log` - Optional JSONL transcript path (default: configuration)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player choices
///
/// # Returns
///
/// * `Ok(())` on a normal quit or EOF
/// * `Err(CliError)` on configuration or I/O failures
pub fn handle_play_command(
    role: Option<RoleArg>,
    seed: Option<u64>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let cfg = resolved.config;

    let role = role
        .map(RoleArg::to_role)
        .or_else(|| cfg.role.as_deref().and_then(parse_role));
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let log = log.or(cfg.log);

    execute_play_command(role, seed, log, stdin, out, err)
}

fn execute_play_command(
    initial_role: Option<Role>,
    seed: u64,
    log: Option<String>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut logger = match &log {
        Some(path) => Some(SessionLogger::create(path)?),
        None => None,
    };

    writeln!(out, "play: seed={}", seed)?;

    let mut current_role = initial_role;
    let mut carried = Score::default();
    let mut session_index: u64 = 0;

    loop {
        let role = match current_role {
            Some(r) => r,
            None => match prompt_role(stdin, out, err)? {
                Some(r) => r,
                None => return Ok(()),
            },
        };

        // each session gets its own derived seed so transcripts replay
        let session_seed = seed.wrapping_add(session_index);
        session_index += 1;
        let strategy = Box::new(UniformRandom::new_with_seed(session_seed));
        let mut session = GameSession::with_score(role, carried, strategy);

        writeln!(out, "You are playing as: {}", role)?;
        writeln!(out, "CPU is playing as: {}", session.cpu_role())?;

        if !run_session(&mut session, stdin, out, err)? {
            return Ok(());
        }

        let result = session_result(&session);
        match result {
            "player" => writeln!(out, "You win the game!")?,
            "cpu" => writeln!(out, "CPU wins the game!")?,
            _ => {}
        }
        if session.player_hand().is_empty() || session.cpu_hand().is_empty() {
            writeln!(out, "All cards used. It's a draw.")?;
        }
        writeln!(out, "Score: {}", format_score(session.score()))?;

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

        match prompt_after_session(stdin, out, err)? {
            AfterSession::Again => {
                carried = session.score();
                current_role = Some(role);
            }
            AfterSession::ChangeRole => {
                carried = Score::default();
                current_role = None;
            }
            AfterSession::Quit => return Ok(()),
        }
    }
}

/// Runs one session to completion. Returns false when the player quit (or
/// stdin hit EOF) mid-session.
fn run_session(
    session: &mut GameSession,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    while !session.is_over() {
        writeln!(out, "Your hand: {}", format_hand(session.player_hand()))?;
        writeln!(out, "CPU cards remaining: {}", session.cpu_hand().len())?;
        ui::write_prompt(out, "Play a card [e/c/s] (history, score, reset, clear, q): ")?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(false);
        };

        match parse_card_choice(&line) {
            ParseResult::Card(card) => {
                if let Err(e) = session.play_round(card) {
                    ui::write_error(err, &e.to_string())?;
                    continue;
                }
                // reveal timing is presentation only; the engine has no clock
                writeln!(out, "Cards placed face down... flipping!")?;
                let outcome = session.resolve_round()?;
                if let Some(round) = session.last_round() {
                    writeln!(
                        out,
                        "You played: {} | CPU played: {}",
                        format_card(round.player_card),
                        format_card(round.cpu_card)
                    )?;
                }
                match outcome {
                    Outcome::PlayerWin => writeln!(out, "You win the round!")?,
                    Outcome::CpuWin => writeln!(out, "CPU wins the round!")?,
                    Outcome::Draw => writeln!(out, "Draw! Continue to next round...")?,
                }
                if session.check_session_end() {
                    break;
                }
            }
            ParseResult::History => {
                if session.history().is_empty() {
                    writeln!(out, "(no rounds yet)")?;
                }
                for (i, round) in session.history().iter().enumerate() {
                    writeln!(out, "{}", format_history_line(i + 1, round))?;
                }
            }
            ParseResult::Score => writeln!(out, "{}", format_score(session.score()))?,
            ParseResult::ResetScore => {
                session.reset_score();
                writeln!(out, "Score reset.")?;
            }
            ParseResult::ClearHistory => {
                session.clear_history();
                writeln!(out, "History cleared.")?;
            }
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(true)
}

fn prompt_role(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<Role>, CliError> {
    loop {
        ui::write_prompt(out, "Choose your role, [e]mperor or [s]lave (q to quit): ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        let lowered = line.to_lowercase();
        if lowered == "q" || lowered == "quit" {
            return Ok(None);
        }
        match parse_role(&line) {
            Some(role) => return Ok(Some(role)),
            None => ui::write_error(err, "Enter e, s, or q.")?,
        }
    }
}

fn prompt_after_session(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<AfterSession, CliError> {
    loop {
        ui::write_prompt(
            out,
            "Play [a]gain (keep score), change [r]ole (reset score), or [q]uit: ",
        )?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(AfterSession::Quit);
        };
        match line.to_lowercase().as_str() {
            "a" | "again" => return Ok(AfterSession::Again),
            "r" | "role" => return Ok(AfterSession::ChangeRole),
            "q" | "quit" => return Ok(AfterSession::Quit),
            other => ui::write_error(err, &format!("Unrecognized input '{}'.", other))?,
        }
    }
}

fn session_result(session: &GameSession) -> &'static str {
    match session.last_round().map(|r| r.outcome) {
        Some(Outcome::PlayerWin) => "player",
        Some(Outcome::CpuWin) => "cpu",
        _ => "exhausted",
    }
}

//! # Stats Command
//!
//! Aggregates a JSONL transcript file into a summary: session counts by
//! result, round totals, and how often each card kind was played. Malformed
//! lines are reported to stderr and skipped.

use crate::error::CliError;
use crate::parse_json_or_continue;
use crate::ui;
use ecard_engine::cards::{all_kinds, CardKind};
use ecard_engine::record::SessionRecord;
use std::fs;
use std::io::Write;

/// Handle the stats command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the file cannot be read or contains
/// no valid session records.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = fs::read_to_string(&input).map_err(|e| {
        let _ = ui::write_error(err, &format!("Cannot read {}: {}", input, e));
        CliError::InvalidInput(format!("Cannot read {}: {}", input, e))
    })?;

    let mut sessions = 0u32;
    let mut player_wins = 0u32;
    let mut cpu_wins = 0u32;
    let mut exhausted = 0u32;
    let mut total_rounds = 0usize;
    let mut card_plays: [(CardKind, usize); 3] = [
        (CardKind::Emperor, 0),
        (CardKind::Citizen, 0),
        (CardKind::Slave, 0),
    ];

    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: SessionRecord =
            parse_json_or_continue!(line, err, format!("line {}", line_no + 1));

        sessions += 1;
        total_rounds += record.rounds.len();
        match record.result.as_deref() {
            Some("player") => player_wins += 1,
            Some("cpu") => cpu_wins += 1,
            _ => exhausted += 1,
        }
        for round in &record.rounds {
            for entry in card_plays.iter_mut() {
                if entry.0 == round.player_card {
                    entry.1 += 1;
                }
            }
        }
    }

    if sessions == 0 {
        ui::write_error(err, "no valid session records found")?;
        return Err(CliError::InvalidInput(
            "no valid session records found".to_string(),
        ));
    }

    writeln!(out, "sessions: {}", sessions)?;
    writeln!(out, "player wins: {}", player_wins)?;
    writeln!(out, "cpu wins: {}", cpu_wins)?;
    writeln!(out, "exhausted draws: {}", exhausted)?;
    writeln!(out, "total rounds: {}", total_rounds)?;
    writeln!(out, "player card usage:")?;
    for kind in all_kinds() {
        let count = card_plays
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0);
        writeln!(out, "  {}: {}", kind, count)?;
    }
    Ok(())
}

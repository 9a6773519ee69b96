//! Text formatting for hands, rounds, and scores.
//!
//! Plain-text renderings of engine state, shared by the play and sim
//! commands.

use ecard_engine::cards::CardKind;
use ecard_engine::hand::Hand;
use ecard_engine::rules::Outcome;
use ecard_engine::session::{Round, Score};

pub fn format_card(card: CardKind) -> &'static str {
    match card {
        CardKind::Emperor => "Emperor",
        CardKind::Citizen => "Citizen",
        CardKind::Slave => "Slave",
    }
}

/// Outcome tag from the player's point of view, used in history lines.
pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "win",
        Outcome::CpuWin => "loss",
        Outcome::Draw => "draw",
    }
}

/// Renders a hand as a compact multiset, e.g. `Emperor x1, Citizen x4`.
pub fn format_hand(hand: &Hand) -> String {
    let mut parts = Vec::new();
    for kind in ecard_engine::cards::all_kinds() {
        let n = hand.count(kind);
        if n > 0 {
            parts.push(format!("{} x{}", format_card(kind), n));
        }
    }
    if parts.is_empty() {
        "(empty)".to_string()
    } else {
        parts.join(", ")
    }
}

/// One sidebar-style history line, 1-based round numbering.
pub fn format_history_line(index: usize, round: &Round) -> String {
    format!(
        "Round {}: You -> {:<8} | CPU -> {:<8} ({})",
        index,
        format_card(round.player_card),
        format_card(round.cpu_card),
        format_outcome(round.outcome)
    )
}

pub fn format_score(score: Score) -> String {
    format!("You {} : {} CPU", score.player_wins, score.cpu_wins)
}

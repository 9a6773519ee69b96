use crate::cards::CardKind;
use serde::{Deserialize, Serialize};

/// Result of one round from the human player's perspective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's card dominated the computer's card
    PlayerWin,
    /// The computer's card dominated the player's card
    CpuWin,
    /// Equal cards, or no dominance rule matched
    Draw,
}

/// The fixed dominance pairs: the first kind of each pair beats the second.
const DOMINANCE: [(CardKind, CardKind); 3] = [
    (CardKind::Emperor, CardKind::Citizen),
    (CardKind::Citizen, CardKind::Slave),
    (CardKind::Slave, CardKind::Emperor),
];

/// Returns true when `a` beats `b` under the dominance triangle.
pub fn beats(a: CardKind, b: CardKind) -> bool {
    DOMINANCE.contains(&(a, b))
}

/// Resolves an ordered pair of played cards into an [`Outcome`].
///
/// Pure and deterministic: equal kinds draw, a dominance pair in either
/// ordering decides the round. The final Draw arm is the defined fallback
/// for pairings no rule covers; with three kinds the three rules span all
/// six ordered distinct pairs, so it is unreachable in correct play, but it
/// is behavior, not an error.
///
/// # Examples
///
/// ```
/// use ecard_engine::cards::CardKind;
/// use ecard_engine::rules::{resolve, Outcome};
///
/// assert_eq!(resolve(CardKind::Emperor, CardKind::Citizen), Outcome::PlayerWin);
/// assert_eq!(resolve(CardKind::Emperor, CardKind::Slave), Outcome::CpuWin);
/// assert_eq!(resolve(CardKind::Citizen, CardKind::Citizen), Outcome::Draw);
/// ```
pub fn resolve(player: CardKind, cpu: CardKind) -> Outcome {
    if player == cpu {
        Outcome::Draw
    } else if beats(player, cpu) {
        Outcome::PlayerWin
    } else if beats(cpu, player) {
        Outcome::CpuWin
    } else {
        Outcome::Draw
    }
}

//! Input parsing and validation for interactive commands.
//!
//! Parses what the user types at the play prompt: a card to play, one of the
//! sidebar commands (history, score, reset, clear), or quit. Validation
//! returns structured results so the command loop never has to second-guess
//! raw strings.

use ecard_engine::cards::{CardKind, Role};

/// Result of parsing one line of play-prompt input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A card to play this round
    Card(CardKind),
    /// Show the round history
    History,
    /// Show the current score
    Score,
    /// Reset the score to zero
    ResetScore,
    /// Clear the round history
    ClearHistory,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a card choice or a session command.
///
/// Accepts the following input formats (case-insensitive):
/// - "e" or "emperor" -> Emperor
/// - "c" or "citizen" -> Citizen
/// - "s" or "slave" -> Slave
/// - "history", "score", "reset", "clear" -> the matching command
/// - "q" or "quit" -> Quit
///
/// # Example
///
/// ```rust
/// # use ecard_cli::validation::{parse_card_choice, ParseResult};
/// use ecard_engine::cards::CardKind;
///
/// assert_eq!(
///     parse_card_choice("emperor"),
///     ParseResult::Card(CardKind::Emperor)
/// );
/// assert_eq!(parse_card_choice("q"), ParseResult::Quit);
///
/// match parse_card_choice("banana") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_card_choice(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match input.as_str() {
        "e" | "emperor" => ParseResult::Card(CardKind::Emperor),
        "c" | "citizen" => ParseResult::Card(CardKind::Citizen),
        "s" | "slave" => ParseResult::Card(CardKind::Slave),
        "history" | "hist" => ParseResult::History,
        "score" => ParseResult::Score,
        "reset" => ParseResult::ResetScore,
        "clear" => ParseResult::ClearHistory,
        "q" | "quit" => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Use e/c/s, history, score, reset, clear, or q.",
            other
        )),
    }
}

/// Parse a role choice from the selection prompt or configuration.
///
/// Accepts "e"/"emperor" and "s"/"slave", case-insensitive.
pub fn parse_role(input: &str) -> Option<Role> {
    match input.trim().to_lowercase().as_str() {
        "e" | "emperor" => Some(Role::Emperor),
        "s" | "slave" => Some(Role::Slave),
        _ => None,
    }
}

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, Role};
use crate::errors::InvalidMove;
use crate::hand::Hand;
use crate::rules::{resolve, Outcome};
use crate::strategy::CpuStrategy;

/// Where a session sits between caller-issued commands.
///
/// `play_round` is accepted only in `AwaitingPlay`, `resolve_round` only in
/// `Resolving`, and `check_session_end` moves `RoundComplete` on to either
/// `AwaitingPlay` or `SessionOver`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for the player to pick a card
    AwaitingPlay,
    /// Both cards are face down; the shell resolves when its reveal is done
    Resolving,
    /// Outcome recorded; end-of-session check still pending
    RoundComplete,
    /// No further plays are accepted
    SessionOver,
}

/// One completed exchange: the two played cards and the resolved outcome.
/// Appended to history and never mutated; only `clear_history` removes it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub player_card: CardKind,
    pub cpu_card: CardKind,
    pub outcome: Outcome,
}

/// Decisive-round tally, carried by value into the next session when the
/// player continues with the same role.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub player_wins: u32,
    pub cpu_wins: u32,
}

/// One play-through of E-Card: both hands, the round history, the score, and
/// the turn state machine. The session owns its hands and history for its
/// whole lifetime; the shell discards it to "change role" and builds a new
/// one (carrying the score by value) to "play again".
///
/// # Examples
///
/// ```
/// use ecard_engine::cards::{CardKind, Role};
/// use ecard_engine::session::GameSession;
/// use ecard_engine::strategy::UniformRandom;
///
/// let strategy = Box::new(UniformRandom::new_with_seed(7));
/// let mut session = GameSession::new(Role::Emperor, strategy);
///
/// session.play_round(CardKind::Citizen).unwrap();
/// let outcome = session.resolve_round().unwrap();
/// let over = session.check_session_end();
/// assert_eq!(session.history().len(), 1);
/// assert_eq!(session.player_hand().len(), 4);
/// println!("outcome {:?}, over {}", outcome, over);
/// ```
#[derive(Debug)]
pub struct GameSession {
    /// The human player's side
    role: Role,
    /// The computer's side (always the counterpart of `role`)
    cpu_role: Role,
    player_hand: Hand,
    cpu_hand: Hand,
    /// Ordered record of resolved rounds
    history: Vec<Round>,
    score: Score,
    phase: Phase,
    /// Cards played but not yet resolved (set while `Resolving`)
    pending: Option<(CardKind, CardKind)>,
    strategy: Box<dyn CpuStrategy>,
}

impl GameSession {
    /// Starts a session with a fresh score.
    pub fn new(role: Role, strategy: Box<dyn CpuStrategy>) -> Self {
        Self::with_score(role, Score::default(), strategy)
    }

    /// Starts a session continuing an earlier score (same-role "play again").
    pub fn with_score(role: Role, score: Score, strategy: Box<dyn CpuStrategy>) -> Self {
        let cpu_role = role.counterpart();
        Self {
            role,
            cpu_role,
            player_hand: Hand::for_role(role),
            cpu_hand: Hand::for_role(cpu_role),
            history: Vec::new(),
            score,
            phase: Phase::AwaitingPlay,
            pending: None,
            strategy,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
    pub fn cpu_role(&self) -> Role {
        self.cpu_role
    }
    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }
    pub fn cpu_hand(&self) -> &Hand {
        &self.cpu_hand
    }
    pub fn history(&self) -> &[Round] {
        &self.history
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_over(&self) -> bool {
        self.phase == Phase::SessionOver
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.history.last()
    }

    /// Plays `card` from the player's hand and draws the computer's answer.
    ///
    /// Removes one instance of the card from each hand and stashes the pair
    /// for [`resolve_round`](Self::resolve_round). The whole step is atomic
    /// from the caller's perspective: on any error nothing has changed.
    ///
    /// # Errors
    ///
    /// [`InvalidMove::SessionOver`] when the session is terminal,
    /// [`InvalidMove::RoundPending`] when an earlier play has not been
    /// resolved and cleared, and [`InvalidMove::CardNotInHand`] when the
    /// player no longer holds `card`.
    pub fn play_round(&mut self, card: CardKind) -> Result<(), InvalidMove> {
        match self.phase {
            Phase::AwaitingPlay => {}
            Phase::SessionOver => return Err(InvalidMove::SessionOver),
            Phase::Resolving | Phase::RoundComplete => return Err(InvalidMove::RoundPending),
        }
        if !self.player_hand.contains(card) {
            return Err(InvalidMove::CardNotInHand(card));
        }

        // invariant: the session ends before the cpu hand can be exhausted
        // while a draw is still needed
        assert!(!self.cpu_hand.is_empty(), "cpu hand empty before draw");
        let removed = self.player_hand.remove(card);
        debug_assert!(removed);
        let cpu_card = self.strategy.choose_card(&self.cpu_hand);
        assert!(
            self.cpu_hand.remove(cpu_card),
            "strategy chose a card outside the cpu hand"
        );

        self.pending = Some((card, cpu_card));
        self.phase = Phase::Resolving;
        Ok(())
    }

    /// Resolves the pending pair, records the round, and updates the score.
    ///
    /// The engine keeps no clock: the shell calls this after whatever reveal
    /// delay it wants, and only then does the outcome exist.
    ///
    /// # Errors
    ///
    /// [`InvalidMove::SessionOver`] on a terminal session and
    /// [`InvalidMove::NothingToResolve`] when no play is pending.
    pub fn resolve_round(&mut self) -> Result<Outcome, InvalidMove> {
        if self.phase == Phase::SessionOver {
            return Err(InvalidMove::SessionOver);
        }
        let (player_card, cpu_card) = match (self.phase, self.pending) {
            (Phase::Resolving, Some(pair)) => pair,
            _ => return Err(InvalidMove::NothingToResolve),
        };

        let outcome = resolve(player_card, cpu_card);
        match outcome {
            Outcome::PlayerWin => self.score.player_wins += 1,
            Outcome::CpuWin => self.score.cpu_wins += 1,
            Outcome::Draw => {}
        }
        self.history.push(Round {
            player_card,
            cpu_card,
            outcome,
        });
        self.pending = None;
        self.phase = Phase::RoundComplete;
        Ok(outcome)
    }

    /// Ends the session when the last round was decisive or either hand is
    /// exhausted; otherwise returns to `AwaitingPlay`.
    ///
    /// When both hands empty out on a decisive round, that round's outcome
    /// has already been applied to the score and the session ends as well.
    /// Outside `RoundComplete` this transitions nothing and simply reports
    /// whether the session is over.
    pub fn check_session_end(&mut self) -> bool {
        if self.phase != Phase::RoundComplete {
            return self.phase == Phase::SessionOver;
        }
        let decisive = matches!(
            self.last_round().map(|r| r.outcome),
            Some(Outcome::PlayerWin) | Some(Outcome::CpuWin)
        );
        let exhausted = self.player_hand.is_empty() || self.cpu_hand.is_empty();
        if decisive || exhausted {
            self.phase = Phase::SessionOver;
            true
        } else {
            self.phase = Phase::AwaitingPlay;
            false
        }
    }

    /// Zeroes the score. Usable in any phase; independent of the turn state.
    pub fn reset_score(&mut self) {
        self.score = Score::default();
    }

    /// Empties the round history without touching the score.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

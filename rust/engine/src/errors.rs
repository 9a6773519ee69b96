use crate::cards::CardKind;
use thiserror::Error;

/// The single error kind the engine reports. Every variant leaves the
/// session untouched; a failed command is a no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("card {0} is not in the player's hand")]
    CardNotInHand(CardKind),
    #[error("session is already over")]
    SessionOver,
    #[error("the previous round has not been resolved and cleared")]
    RoundPending,
    #[error("no played round awaiting resolution")]
    NothingToResolve,
}

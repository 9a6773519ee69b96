//! # ecard-engine: E-Card Game Core
//!
//! A presentation-independent engine for the two-player E-Card game: a
//! rock-paper-scissors-style dominance triangle (Emperor beats Citizen,
//! Citizen beats Slave, Slave beats Emperor) played from five-card hands.
//! Provides session state management, round resolution, history and score
//! tracking, and reproducible RNG for the computer opponent.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card kinds and player roles
//! - [`hand`] - Hand composition and consume-only card removal
//! - [`rules`] - Pure round resolution over the dominance triangle
//! - [`session`] - Session state machine, history, and score
//! - [`strategy`] - Pluggable computer card selection (seeded uniform random)
//! - [`record`] - Session transcript serialization (JSONL)
//! - [`errors`] - The `InvalidMove` error type
//!
//! ## Quick Start
//!
//! ```rust
//! use ecard_engine::cards::{CardKind, Role};
//! use ecard_engine::session::GameSession;
//! use ecard_engine::strategy::UniformRandom;
//!
//! let strategy = Box::new(UniformRandom::new_with_seed(42));
//! let mut session = GameSession::new(Role::Emperor, strategy);
//!
//! // Two-phase round: play, then resolve once any reveal delay has passed.
//! session.play_round(CardKind::Emperor).unwrap();
//! let outcome = session.resolve_round().unwrap();
//! let over = session.check_session_end();
//! println!("outcome: {:?}, session over: {}", outcome, over);
//! ```
//!
//! ## Determinism
//!
//! The engine holds no clock and spawns nothing; it mutates only in response
//! to caller commands. The computer's draws are the sole source of
//! randomness, and they are reproducible from a seed:
//!
//! ```rust
//! use ecard_engine::strategy::UniformRandom;
//!
//! // Same seed produces the same sequence of draws
//! let a = UniformRandom::new_with_seed(7);
//! let b = UniformRandom::new_with_seed(7);
//! ```
//!
//! ## Error Handling
//!
//! Rejected commands fail with [`errors::InvalidMove`] and leave the session
//! exactly as it was:
//!
//! ```rust
//! use ecard_engine::cards::{CardKind, Role};
//! use ecard_engine::errors::InvalidMove;
//! use ecard_engine::session::GameSession;
//! use ecard_engine::strategy::UniformRandom;
//!
//! let mut session = GameSession::new(Role::Slave, Box::new(UniformRandom::new_with_seed(1)));
//! let err = session.play_round(CardKind::Emperor).unwrap_err();
//! assert_eq!(err, InvalidMove::CardNotInHand(CardKind::Emperor));
//! assert_eq!(session.player_hand().len(), 5);
//! ```

pub mod cards;
pub mod errors;
pub mod hand;
pub mod record;
pub mod rules;
pub mod session;
pub mod strategy;

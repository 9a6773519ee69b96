use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fmt;

use crate::cards::CardKind;
use crate::hand::Hand;

/// Card-selection policy for the computer opponent.
///
/// Implementations must return a card that is present in `hand`; the session
/// asserts this when it consumes the choice. The trait exists so a future
/// deterministic or adaptive opponent can slot in without touching the
/// session's control flow.
pub trait CpuStrategy: fmt::Debug {
    /// Choose the next card to play from the computer's remaining hand.
    /// `hand` is never empty when the session calls this.
    fn choose_card(&mut self, hand: &Hand) -> CardKind;

    fn name(&self) -> &str;
}

/// Uniform-random selection over the remaining hand, driven by a seeded
/// ChaCha20 RNG so sessions are reproducible given the same seed.
#[derive(Debug)]
pub struct UniformRandom {
    rng: ChaCha20Rng,
}

impl UniformRandom {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl CpuStrategy for UniformRandom {
    fn choose_card(&mut self, hand: &Hand) -> CardKind {
        debug_assert!(!hand.is_empty());
        *hand
            .cards()
            .choose(&mut self.rng)
            .unwrap_or(&CardKind::Citizen)
    }

    fn name(&self) -> &str {
        "uniform-random"
    }
}

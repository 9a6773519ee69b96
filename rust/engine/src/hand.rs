use crate::cards::{CardKind, Role};
use serde::{Deserialize, Serialize};

/// Number of cards dealt to each side at session start.
pub const HAND_SIZE: usize = 5;

/// A participant's remaining cards: an unordered multiset of [`CardKind`].
///
/// Hands only ever shrink. A card leaves the hand exactly once, when it is
/// played; nothing is ever added after [`Hand::for_role`] deals the initial
/// five cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<CardKind>,
}

impl Hand {
    /// Deals the starting hand for a role: the signature card plus four
    /// Citizens. Deterministic; no randomness is involved.
    pub fn for_role(role: Role) -> Self {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        cards.push(role.signature_card());
        cards.resize(HAND_SIZE, CardKind::Citizen);
        Self { cards }
    }

    pub fn contains(&self, kind: CardKind) -> bool {
        self.cards.contains(&kind)
    }

    /// Number of copies of `kind` still held.
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&c| c == kind).count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    /// Removes one instance of `kind`. Returns false (and leaves the hand
    /// unchanged) when no copy is held.
    pub(crate) fn remove(&mut self, kind: CardKind) -> bool {
        match self.cards.iter().position(|&c| c == kind) {
            Some(idx) => {
                self.cards.swap_remove(idx);
                true
            }
            None => false,
        }
    }
}

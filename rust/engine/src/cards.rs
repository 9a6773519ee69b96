use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one of the three card kinds in the E-Card dominance triangle.
/// Emperor beats Citizen, Citizen beats Slave, Slave beats Emperor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CardKind {
    /// The Emperor card (one per Emperor-side hand)
    Emperor,
    /// The Citizen card (four per hand on either side)
    Citizen,
    /// The Slave card (one per Slave-side hand)
    Slave,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CardKind::Emperor => "Emperor",
            CardKind::Citizen => "Citizen",
            CardKind::Slave => "Slave",
        };
        f.write_str(s)
    }
}

/// The side a player commits to for a session. The role determines the
/// single signature card dealt alongside four Citizens.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Emperor side: hand of one Emperor plus four Citizens
    Emperor,
    /// Slave side: hand of one Slave plus four Citizens
    Slave,
}

impl Role {
    /// Returns the opposing role, i.e. the side the computer plays.
    pub fn counterpart(self) -> Role {
        match self {
            Role::Emperor => Role::Slave,
            Role::Slave => Role::Emperor,
        }
    }

    /// Returns the role-specific card that replaces the fifth Citizen.
    pub fn signature_card(self) -> CardKind {
        match self {
            Role::Emperor => CardKind::Emperor,
            Role::Slave => CardKind::Slave,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Emperor => "emperor",
            Role::Slave => "slave",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Emperor => "Emperor",
            Role::Slave => "Slave",
        };
        f.write_str(s)
    }
}

pub fn all_kinds() -> [CardKind; 3] {
    [CardKind::Emperor, CardKind::Citizen, CardKind::Slave]
}

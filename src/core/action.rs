//! Decisions and turn records.
//!
//! A turn is a sequence of `Decision::Roll` calls ending in either a hold
//! or a bust. `TurnRecord` captures the faces rolled and how the turn ended.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A player's call between rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// End the turn and bank the unbanked points.
    Hold,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Player held; `points` were banked.
    Held { points: u32 },
    /// Player rolled a 1; `forfeited` unbanked points were lost.
    Busted { forfeited: u32 },
}

impl TurnOutcome {
    /// Points credited to the player by this turn.
    #[must_use]
    pub fn banked(self) -> u32 {
        match self {
            TurnOutcome::Held { points } => points,
            TurnOutcome::Busted { .. } => 0,
        }
    }

    #[must_use]
    pub fn is_bust(self) -> bool {
        matches!(self, TurnOutcome::Busted { .. })
    }
}

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Player who took the turn.
    pub player: PlayerId,

    /// Faces rolled, in order. A bust ends with the 1.
    /// SmallVec keeps typical turns off the heap.
    pub rolls: SmallVec<[u8; 8]>,

    pub outcome: TurnOutcome,
}

impl TurnRecord {
    /// Sum of the faces rolled before the turn ended.
    #[must_use]
    pub fn rolled_total(&self) -> u32 {
        self.rolls
            .iter()
            .take_while(|&&face| face != 1)
            .map(|&face| u32::from(face))
            .sum()
    }
}

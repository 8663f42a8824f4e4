//! Turn ownership.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// Tracks whose turn it is and how many turns have started.
///
/// Turn numbers are global: turn 1 belongs to the first player, turn 2 to
/// the second, and so on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    active: PlayerId,
    turn_number: u32,
    sequence: u32,
}

impl TurnController {
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            active: first,
            turn_number: 1,
            sequence: 0,
        }
    }

    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Reject commands from the player who is not active.
    pub fn require_active(&self, player: PlayerId) -> Result<(), GameError> {
        if player == self.active {
            Ok(())
        } else {
            Err(GameError::NotYourTurn {
                player,
                active: self.active,
            })
        }
    }

    /// Hand the turn to the other player. Returns the new active player.
    pub fn advance(&mut self) -> PlayerId {
        self.active = self.active.opponent();
        self.turn_number += 1;
        self.sequence = 0;
        self.active
    }

    /// Position of the next accepted command within this turn.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }
}

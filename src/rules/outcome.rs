//! How a match ended.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player won.
    Winner(PlayerId),
    /// Both players lost at the same moment.
    Draw,
}

/// What ended the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A player's life reached zero or below.
    LifeDepleted,
    /// A player had to draw at turn start from an empty deck.
    DeckOut,
}

/// Result plus reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub reason: GameOverReason,
}

impl GameOutcome {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self.result {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

//! Serializable match snapshots.
//!
//! A snapshot holds everything needed to resume a match except the card
//! catalog, which is static data the host already has. Undrained events
//! are not part of it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::outcome::GameOutcome;
use super::turn::TurnController;
use crate::core::{CommandRecord, GameRngState, InstanceId, MatchConfig, PlayerMap};
use crate::player::PlayerState;

/// Frozen copy of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: MatchConfig,
    pub players: PlayerMap<PlayerState>,
    pub turn: TurnController,
    pub outcome: Option<GameOutcome>,
    pub rng: GameRngState,
    pub next_instance: InstanceId,
    pub history: Vector<CommandRecord>,
}

impl MatchSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

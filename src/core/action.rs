//! Command representation.
//!
//! A `Command` is what an input adapter or AI policy submits to the match:
//! the verb plus the instance ids it points at. `GameState::apply` routes a
//! command to the matching method, so recorded commands replay exactly.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;

/// What an attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackTarget {
    /// A card on the opponent's board.
    Card(InstanceId),
    /// The opponent's life total.
    OpponentPlayer,
}

/// A complete player command.
///
/// ## Example
///
/// ```
/// use fueros_engine::core::{AttackTarget, Command, InstanceId, PlayerId};
///
/// let play = Command::PlayCard { player: PlayerId::FIRST, card: InstanceId(4) };
/// let swing = Command::Attack {
///     player: PlayerId::FIRST,
///     attacker: InstanceId(4),
///     target: AttackTarget::OpponentPlayer,
/// };
///
/// assert_eq!(play.player(), swing.player());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Play a card from hand (to the board, or resolve its effect).
    PlayCard { player: PlayerId, card: InstanceId },
    /// Attack with a board card.
    Attack {
        player: PlayerId,
        attacker: InstanceId,
        target: AttackTarget,
    },
    /// Pass the turn to the opponent.
    EndTurn { player: PlayerId },
    /// Draw a card outside of any effect.
    DrawCard { player: PlayerId },
}

impl Command {
    /// The player issuing the command.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Command::PlayCard { player, .. }
            | Command::Attack { player, .. }
            | Command::EndTurn { player }
            | Command::DrawCard { player } => player,
        }
    }

    /// Short verb used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::PlayCard { .. } => "play_card",
            Command::Attack { target: AttackTarget::OpponentPlayer, .. } => "attack_player",
            Command::Attack { .. } => "attack",
            Command::EndTurn { .. } => "end_turn",
            Command::DrawCard { .. } => "draw_card",
        }
    }
}

/// An accepted command with its position in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command as submitted.
    pub command: Command,

    /// Turn number when it was accepted.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            command,
            turn,
            sequence,
        }
    }

    /// The player who issued the command.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.command.player()
    }
}

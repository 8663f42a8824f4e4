//! Game events.
//!
//! Every observable state change a command makes is reported as a
//! `GameEvent`, in the order it happened. Presentation layers drain the
//! log after each command and animate from it; the engine never reads it
//! back.

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, PlayerId};
use crate::effects::{AffectedCards, EffectKind};
use crate::rules::GameOverReason;
use crate::zones::ZoneKind;

/// Numbers and cards an applied effect touched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectPayload {
    /// The effect's printed amount (damage, heal, draw count or duration).
    pub amount: i32,
    /// Cards drawn, discounted or blocked.
    pub affected: AffectedCards,
}

/// A state change reported to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card changed zone.
    CardMoved {
        card: InstanceId,
        owner: PlayerId,
        from: ZoneKind,
        to: ZoneKind,
    },

    /// A board card lost resistance.
    CardDamaged {
        card: InstanceId,
        amount: i32,
        new_health: i32,
    },

    /// A board card started its death sequence.
    CardDied { card: InstanceId, owner: PlayerId },

    /// A player lost life.
    PlayerDamaged {
        player: PlayerId,
        amount: i32,
        new_life: i32,
    },

    /// A player regained life.
    PlayerHealed {
        player: PlayerId,
        amount: i32,
        new_life: i32,
    },

    /// An action or event card's effect resolved.
    EffectApplied {
        kind: EffectKind,
        caster: PlayerId,
        payload: EffectPayload,
    },

    /// A timed effect ran out and was reverted.
    EffectExpired {
        player: PlayerId,
        kind: EffectKind,
        affected: AffectedCards,
    },

    /// The active player changed.
    TurnEnded { new_active: PlayerId, turn: u32 },

    /// The match ended. `winner` is `None` for a draw.
    GameOver {
        winner: Option<PlayerId>,
        reason: GameOverReason,
    },
}

impl GameEvent {
    /// Whether this event ends the match.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}

//! Card instances - runtime card state.
//!
//! A card takes one of two shapes depending on where it is:
//!
//! - `HandCard`: deck, hand and discard. Just the instance id and the
//!   definition it points at; nothing about it can change.
//! - `BoardCard`: on the board. Carries current influence and resistance,
//!   which start at the printed values and then move independently, plus
//!   the flags combat and effects read.
//!
//! Moving between shapes is explicit (`BoardCard::enter`,
//! `BoardCard::into_hand`) and keeps the instance id.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardKind};
use crate::core::InstanceId;

/// A card outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandCard {
    /// Unique instance id.
    pub id: InstanceId,

    /// Definition this instance is a copy of.
    pub card: CardId,
}

impl HandCard {
    /// Create a hand-shaped instance.
    #[must_use]
    pub const fn new(id: InstanceId, card: CardId) -> Self {
        Self { id, card }
    }
}

/// Damage applied to a board card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Amount subtracted from resistance.
    pub amount: i32,
    /// Resistance after the hit (may be negative).
    pub new_health: i32,
    /// This hit started the death sequence.
    pub lethal: bool,
}

/// A card on the board.
///
/// `kind` and `immune` are copied from the definition on entry so combat
/// checks do not need the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCard {
    /// Unique instance id.
    pub id: InstanceId,

    /// Definition this instance is a copy of.
    pub card: CardId,

    /// Card kind.
    pub kind: CardKind,

    /// Fueros immunity.
    pub immune: bool,

    /// Current influence.
    pub attack: i32,

    /// Current resistance.
    pub health: i32,

    /// Already attacked during its controller's current turn.
    pub has_acted_this_turn: bool,

    /// Entered this turn without immediate action.
    pub on_cooldown: bool,

    /// Cleared by attack-block effects.
    pub can_attack: bool,

    /// Resistance dropped to zero; awaiting removal.
    pub is_dying: bool,
}

impl BoardCard {
    /// Convert a hand instance into its board shape.
    #[must_use]
    pub fn enter(hand: HandCard, definition: &CardDefinition) -> Self {
        Self {
            id: hand.id,
            card: hand.card,
            kind: definition.kind,
            immune: definition.immune,
            attack: definition.influence,
            health: definition.resistance,
            has_acted_this_turn: false,
            on_cooldown: !definition.immediate_action,
            can_attack: true,
            is_dying: false,
        }
    }

    /// Drop the runtime state, keeping the identity.
    #[must_use]
    pub fn into_hand(self) -> HandCard {
        HandCard::new(self.id, self.card)
    }

    /// Positive resistance and not already dying.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0 && !self.is_dying
    }

    /// Resistance clamped at zero, for display.
    #[must_use]
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }

    /// Subtract `amount` from resistance.
    ///
    /// Returns `None` (and changes nothing) for non-positive amounts or a
    /// card that is already dying. The report's `lethal` flag is set only on
    /// the hit that crosses zero, so the death sequence starts exactly once.
    pub fn take_damage(&mut self, amount: i32) -> Option<DamageReport> {
        if self.is_dying || amount <= 0 {
            return None;
        }

        self.health -= amount;
        let lethal = self.health <= 0;
        if lethal {
            self.is_dying = true;
        }

        Some(DamageReport {
            amount,
            new_health: self.health,
            lethal,
        })
    }

    /// Clear per-turn flags at the start of the controller's turn.
    pub fn refresh(&mut self) {
        if !self.is_dying {
            self.on_cooldown = false;
            self.has_acted_this_turn = false;
        }
    }
}

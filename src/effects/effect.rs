//! Effect definitions.
//!
//! `EffectDescriptor` is the effect printed on an action or event card:
//! the kind plus its numeric parameters. `DurationEffect` is what a
//! multi-turn effect leaves behind on the affected player until it runs out.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::InstanceId;

/// Instance ids touched by one effect. Rarely more than a handful.
pub type AffectedCards = SmallVec<[InstanceId; 4]>;

/// Effect tag without parameters, used in events and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    None,
    DamageBothPlayers,
    DamageTargetPlayer,
    HealCasterPlayer,
    HealTargetPlayer,
    DrawCards,
    DrawAndReduceCost,
    BlockEnemyPoliticians,
}

/// The effect an action or event card resolves when played.
///
/// "Caster" is the player who played the card, "target" the opponent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectDescriptor {
    /// Card with no rules text.
    None,

    /// Both players lose `amount` life.
    DamageBothPlayers { amount: i32 },

    /// The opponent loses `amount` life.
    DamageTargetPlayer { amount: i32 },

    /// The caster gains `amount` life, up to the life cap.
    HealCasterPlayer { amount: i32 },

    /// The opponent gains `amount` life, up to the life cap.
    HealTargetPlayer { amount: i32 },

    /// The caster draws up to `count` cards.
    DrawCards { count: u32 },

    /// The caster draws up to `count` cards; each card drawn costs
    /// `reduction` less for `duration` of the caster's turns.
    DrawAndReduceCost {
        count: u32,
        reduction: i32,
        duration: u32,
    },

    /// The opponent's living politicians cannot attack for `duration`
    /// of the opponent's turns.
    BlockEnemyPoliticians { duration: u32 },
}

impl EffectDescriptor {
    /// Create a damage-opponent effect.
    pub fn damage(amount: i32) -> Self {
        Self::DamageTargetPlayer { amount }
    }

    /// Create a heal-caster effect.
    pub fn heal(amount: i32) -> Self {
        Self::HealCasterPlayer { amount }
    }

    /// Create a draw effect.
    pub fn draw(count: u32) -> Self {
        Self::DrawCards { count }
    }

    /// The parameterless tag.
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::None => EffectKind::None,
            Self::DamageBothPlayers { .. } => EffectKind::DamageBothPlayers,
            Self::DamageTargetPlayer { .. } => EffectKind::DamageTargetPlayer,
            Self::HealCasterPlayer { .. } => EffectKind::HealCasterPlayer,
            Self::HealTargetPlayer { .. } => EffectKind::HealTargetPlayer,
            Self::DrawCards { .. } => EffectKind::DrawCards,
            Self::DrawAndReduceCost { .. } => EffectKind::DrawAndReduceCost,
            Self::BlockEnemyPoliticians { .. } => EffectKind::BlockEnemyPoliticians,
        }
    }
}

/// The state change a duration record holds in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    /// Adds `delta` to the cost of each listed hand card.
    CostModifier { targets: AffectedCards, delta: i32 },
    /// Keeps `can_attack` cleared on one board card.
    AttackBlock { target: InstanceId },
}

/// A multi-turn modification scoped to the player it affects.
///
/// Ticked at the end of each of that player's turns that started after
/// `registered_turn`. Reaching zero reverts the modification and drops the
/// record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationEffect {
    pub kind: DurationKind,
    pub remaining_turns: u32,
    pub registered_turn: u32,
}

impl DurationEffect {
    #[must_use]
    pub fn cost_modifier(
        targets: AffectedCards,
        delta: i32,
        remaining_turns: u32,
        registered_turn: u32,
    ) -> Self {
        Self {
            kind: DurationKind::CostModifier { targets, delta },
            remaining_turns,
            registered_turn,
        }
    }

    #[must_use]
    pub fn attack_block(target: InstanceId, remaining_turns: u32, registered_turn: u32) -> Self {
        Self {
            kind: DurationKind::AttackBlock { target },
            remaining_turns,
            registered_turn,
        }
    }

    /// Cost delta this record applies to `card`, zero if it does not apply.
    #[must_use]
    pub fn cost_delta_for(&self, card: InstanceId) -> i32 {
        match &self.kind {
            DurationKind::CostModifier { targets, delta } if targets.contains(&card) => *delta,
            _ => 0,
        }
    }

    /// Whether this record blocks `card` from attacking.
    #[must_use]
    pub fn blocks(&self, card: InstanceId) -> bool {
        matches!(self.kind, DurationKind::AttackBlock { target } if target == card)
    }

    /// The effect that created this record.
    #[must_use]
    pub fn source(&self) -> EffectKind {
        match self.kind {
            DurationKind::CostModifier { .. } => EffectKind::DrawAndReduceCost,
            DurationKind::AttackBlock { .. } => EffectKind::BlockEnemyPoliticians,
        }
    }

    /// Instance ids the record touches.
    #[must_use]
    pub fn affected(&self) -> AffectedCards {
        match &self.kind {
            DurationKind::CostModifier { targets, .. } => targets.clone(),
            DurationKind::AttackBlock { target } => smallvec::smallvec![*target],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_descriptor_kind() {
        assert_eq!(EffectDescriptor::damage(3).kind(), EffectKind::DamageTargetPlayer);
        assert_eq!(EffectDescriptor::heal(2).kind(), EffectKind::HealCasterPlayer);
        assert_eq!(EffectDescriptor::draw(1).kind(), EffectKind::DrawCards);
        assert_eq!(
            EffectDescriptor::BlockEnemyPoliticians { duration: 2 }.kind(),
            EffectKind::BlockEnemyPoliticians
        );
    }

    #[test]
    fn test_cost_delta_for() {
        let record = DurationEffect::cost_modifier(smallvec![InstanceId(3), InstanceId(4)], -1, 1, 5);

        assert_eq!(record.cost_delta_for(InstanceId(3)), -1);
        assert_eq!(record.cost_delta_for(InstanceId(9)), 0);
        assert!(!record.blocks(InstanceId(3)));
        assert_eq!(record.source(), EffectKind::DrawAndReduceCost);
    }

    #[test]
    fn test_attack_block() {
        let record = DurationEffect::attack_block(InstanceId(7), 2, 1);

        assert!(record.blocks(InstanceId(7)));
        assert!(!record.blocks(InstanceId(8)));
        assert_eq!(record.cost_delta_for(InstanceId(7)), 0);
        assert_eq!(record.affected().as_slice(), &[InstanceId(7)]);
    }

    #[test]
    fn test_descriptor_serialization() {
        let effect = EffectDescriptor::DrawAndReduceCost {
            count: 2,
            reduction: 1,
            duration: 1,
        };
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: EffectDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}

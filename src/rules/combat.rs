//! Combat resolution between board cards and against players.
//!
//! Combat changes health and flags only. Cards whose resistance crosses
//! zero are marked dying here; `GameState` moves them to the discard pile
//! before the attack command returns.

use tracing::trace;

use crate::cards::{BoardCard, CardKind};
use crate::core::{GameError, InstanceId, PlayerId};
use crate::events::{EventLog, GameEvent};
use crate::player::PlayerState;
use crate::zones::{Zone, ZoneCard};

/// What one attack did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatReport {
    pub attacker: InstanceId,
    /// `None` when the opponent player was attacked.
    pub defender: Option<InstanceId>,
    pub damage_dealt: i32,
    pub counter_damage: i32,
    pub attacker_died: bool,
    pub defender_died: bool,
}

/// Stateless combat rules.
pub struct CombatResolver;

impl CombatResolver {
    /// Whether a board card may declare an attack right now.
    #[must_use]
    pub fn can_initiate_attack(card: &BoardCard) -> bool {
        card.can_attack
            && !card.on_cooldown
            && !card.has_acted_this_turn
            && !card.is_dying
            && card.attack > 0
    }

    /// Eligibility to strike back. Same as attacking, except that having
    /// acted during its own turn does not matter.
    #[must_use]
    pub fn can_counter(card: &BoardCard) -> bool {
        card.can_attack && !card.on_cooldown && !card.is_dying && card.attack > 0
    }

    /// Target legality for an attack.
    ///
    /// `target` is `None` for an attack on the opponent player. While the
    /// defending board holds a living immune politician, only immune cards
    /// may be attacked. Politicians cannot attack supports.
    pub fn check_target(
        attacker: &BoardCard,
        target: Option<&BoardCard>,
        defender: &PlayerState,
    ) -> Result<(), GameError> {
        if let Some(card) = target {
            if card.is_dying {
                return Err(GameError::InvalidTarget("target is already dying"));
            }
        }

        if defender.has_fueros() && !target.map_or(false, |c| c.immune) {
            return Err(GameError::MustTargetImmuneCardFirst);
        }

        if attacker.kind == CardKind::Politician
            && target.map_or(false, |c| c.kind == CardKind::Support)
        {
            return Err(GameError::InvalidTarget("politicians cannot attack supports"));
        }

        Ok(())
    }

    /// Resolve an attack between two board cards.
    ///
    /// The defender strikes back when it survives, is itself able to
    /// attack and the attacker is still standing. A counter never triggers
    /// another counter.
    pub fn resolve_card_vs_card(
        attacker: &mut BoardCard,
        defender: &mut BoardCard,
        owners: (PlayerId, PlayerId),
        events: &mut EventLog,
    ) -> Result<CombatReport, GameError> {
        if defender.is_dying {
            return Err(GameError::InvalidTarget("target is already dying"));
        }
        if !Self::can_initiate_attack(attacker) {
            return Err(GameError::CardNotEligibleToAttack);
        }

        attacker.has_acted_this_turn = true;
        let (attacker_owner, defender_owner) = owners;

        let mut report = CombatReport {
            attacker: attacker.id,
            defender: Some(defender.id),
            damage_dealt: 0,
            counter_damage: 0,
            attacker_died: false,
            defender_died: false,
        };

        if let Some(hit) = defender.take_damage(attacker.attack) {
            report.damage_dealt = hit.amount;
            report.defender_died = hit.lethal;
            Self::record_hit(defender, defender_owner, hit.amount, hit.new_health, hit.lethal, events);
        }

        if defender.is_alive() && Self::can_counter(defender) && attacker.is_alive() {
            if let Some(hit) = attacker.take_damage(defender.attack) {
                report.counter_damage = hit.amount;
                report.attacker_died = hit.lethal;
                Self::record_hit(attacker, attacker_owner, hit.amount, hit.new_health, hit.lethal, events);
            }
        }

        trace!(
            attacker = %report.attacker,
            defender = %defender.id,
            dealt = report.damage_dealt,
            countered = report.counter_damage,
            "Card combat resolved"
        );
        Ok(report)
    }

    /// Resolve an attack on the opponent's life total. Players never
    /// strike back.
    pub fn resolve_card_vs_player(
        attacker: &mut BoardCard,
        target: &mut PlayerState,
        events: &mut EventLog,
    ) -> Result<CombatReport, GameError> {
        if !Self::can_initiate_attack(attacker) {
            return Err(GameError::CardNotEligibleToAttack);
        }

        attacker.has_acted_this_turn = true;
        let amount = attacker.attack;
        let new_life = target.lose_life(amount);
        events.push(GameEvent::PlayerDamaged {
            player: target.id(),
            amount,
            new_life,
        });

        Ok(CombatReport {
            attacker: attacker.id,
            defender: None,
            damage_dealt: amount,
            counter_damage: 0,
            attacker_died: false,
            defender_died: false,
        })
    }

    /// Clear per-turn flags on every card of the player whose turn begins.
    pub fn reset_for_new_turn(board: &mut Zone<BoardCard>) {
        for card in board.iter_mut() {
            card.refresh();
        }
    }

    fn record_hit(
        card: &BoardCard,
        owner: PlayerId,
        amount: i32,
        new_health: i32,
        lethal: bool,
        events: &mut EventLog,
    ) {
        events.push(GameEvent::CardDamaged {
            card: card.instance_id(),
            amount,
            new_health,
        });
        if lethal {
            events.push(GameEvent::CardDied {
                card: card.instance_id(),
                owner,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, HandCard};
    use crate::core::MatchConfig;

    fn ready(id: u32, kind: CardKind, attack: i32, health: i32) -> BoardCard {
        let def = CardDefinition::new(CardId::new(id), "Card", kind)
            .with_stats(attack, health)
            .with_immediate_action();
        BoardCard::enter(HandCard::new(InstanceId(id), def.id), &def)
    }

    const OWNERS: (PlayerId, PlayerId) = (PlayerId::FIRST, PlayerId::SECOND);

    #[test]
    fn test_counter_damage() {
        let mut attacker = ready(1, CardKind::Character, 3, 4);
        let mut defender = ready(2, CardKind::Character, 2, 5);
        let mut events = EventLog::new();

        let report =
            CombatResolver::resolve_card_vs_card(&mut attacker, &mut defender, OWNERS, &mut events).unwrap();

        assert_eq!(defender.health, 2);
        assert_eq!(attacker.health, 2);
        assert_eq!(report.counter_damage, 2);
        assert!(attacker.has_acted_this_turn);
    }

    #[test]
    fn test_counter_kills_fragile_attacker() {
        let mut attacker = ready(1, CardKind::Character, 3, 1);
        let mut defender = ready(2, CardKind::Character, 2, 5);
        let mut events = EventLog::new();

        let report =
            CombatResolver::resolve_card_vs_card(&mut attacker, &mut defender, OWNERS, &mut events).unwrap();

        assert!(report.attacker_died);
        assert!(attacker.is_dying);
        assert_eq!(defender.health, 2);
        assert!(events.iter().any(|e| matches!(e, GameEvent::CardDied { card, .. } if *card == InstanceId(1))));
    }

    #[test]
    fn test_dead_defender_does_not_counter() {
        let mut attacker = ready(1, CardKind::Character, 5, 2);
        let mut defender = ready(2, CardKind::Character, 4, 3);
        let mut events = EventLog::new();

        let report =
            CombatResolver::resolve_card_vs_card(&mut attacker, &mut defender, OWNERS, &mut events).unwrap();

        assert!(report.defender_died);
        assert_eq!(attacker.health, 2);
        assert_eq!(report.counter_damage, 0);
    }

    #[test]
    fn test_cooling_defender_does_not_counter() {
        let mut attacker = ready(1, CardKind::Character, 1, 2);
        let mut defender = ready(2, CardKind::Character, 4, 3);
        defender.on_cooldown = true;
        let mut events = EventLog::new();

        CombatResolver::resolve_card_vs_card(&mut attacker, &mut defender, OWNERS, &mut events).unwrap();
        assert_eq!(attacker.health, 2);
    }

    #[test]
    fn test_defender_that_acted_still_counters() {
        let mut attacker = ready(1, CardKind::Character, 1, 5);
        let mut defender = ready(2, CardKind::Character, 2, 3);
        defender.has_acted_this_turn = true;
        let mut events = EventLog::new();

        CombatResolver::resolve_card_vs_card(&mut attacker, &mut defender, OWNERS, &mut events).unwrap();
        assert_eq!(attacker.health, 3);
    }

    #[test]
    fn test_ineligible_attacker_changes_nothing() {
        let mut attacker = ready(1, CardKind::Character, 3, 3);
        attacker.can_attack = false;
        let mut defender = ready(2, CardKind::Character, 2, 5);
        let mut events = EventLog::new();

        let result = CombatResolver::resolve_card_vs_card(&mut attacker, &mut defender, OWNERS, &mut events);

        assert_eq!(result, Err(GameError::CardNotEligibleToAttack));
        assert_eq!(defender.health, 5);
        assert!(!attacker.has_acted_this_turn);
        assert!(events.is_empty());
    }

    #[test]
    fn test_zero_attack_cannot_attack() {
        let card = ready(1, CardKind::Character, 0, 3);
        assert!(!CombatResolver::can_initiate_attack(&card));
    }

    #[test]
    fn test_attack_player() {
        let mut attacker = ready(1, CardKind::Politician, 4, 3);
        let mut target = PlayerState::new(PlayerId::SECOND, &MatchConfig::default());
        let mut events = EventLog::new();

        let report = CombatResolver::resolve_card_vs_player(&mut attacker, &mut target, &mut events).unwrap();

        assert_eq!(report.damage_dealt, 4);
        assert_eq!(target.life(), 16);
        assert_eq!(attacker.health, 3);
    }

    #[test]
    fn test_politician_cannot_attack_support() {
        let attacker = ready(1, CardKind::Politician, 2, 2);
        let support = ready(2, CardKind::Support, 0, 2);
        let defender = PlayerState::new(PlayerId::SECOND, &MatchConfig::default());

        assert!(matches!(
            CombatResolver::check_target(&attacker, Some(&support), &defender),
            Err(GameError::InvalidTarget(_))
        ));

        let character = ready(3, CardKind::Character, 2, 2);
        assert!(CombatResolver::check_target(&character, Some(&support), &defender).is_ok());
    }

    #[test]
    fn test_reset_keeps_block() {
        let mut board = Zone::bounded(crate::zones::ZoneKind::Board, 4);
        let mut card = ready(1, CardKind::Politician, 2, 2);
        card.on_cooldown = true;
        card.has_acted_this_turn = true;
        card.can_attack = false;
        board.add(card).unwrap();

        CombatResolver::reset_for_new_turn(&mut board);

        let card = board.get(InstanceId(1)).unwrap();
        assert!(!card.on_cooldown);
        assert!(!card.has_acted_this_turn);
        assert!(!card.can_attack);
    }
}

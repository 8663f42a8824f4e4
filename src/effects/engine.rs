//! Effect resolution and duration ticking.
//!
//! `EffectEngine` holds no state of its own. Immediate effects change life
//! totals or hands on the spot; timed effects also leave a
//! `DurationEffect` on the affected player, which `tick_durations` counts
//! down and reverts.

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::effect::{AffectedCards, DurationEffect, DurationKind, EffectDescriptor};
use crate::cards::CardKind;
use crate::core::{GameError, InstanceId};
use crate::events::{EffectPayload, EventLog, GameEvent};
use crate::player::PlayerState;
use crate::zones::ZoneKind;

/// Everything an effect may touch while it resolves.
pub struct EffectContext<'a> {
    /// The player who played the card.
    pub caster: &'a mut PlayerState,
    /// The caster's opponent.
    pub target: &'a mut PlayerState,
    /// Current turn number, stamped on new duration records.
    pub turn: u32,
    /// Sink for the events the effect produces.
    pub events: &'a mut EventLog,
}

/// Applies effect descriptors and maintains duration records.
pub struct EffectEngine;

impl EffectEngine {
    /// Apply `effect` for the caster.
    ///
    /// Effects with a non-positive amount change nothing but still report
    /// `EffectApplied`, so the card is treated as played.
    pub fn resolve(effect: &EffectDescriptor, ctx: &mut EffectContext<'_>) -> Result<(), GameError> {
        let caster = ctx.caster.id;
        debug!(%caster, kind = ?effect.kind(), turn = ctx.turn, "Resolving effect");

        let payload = match *effect {
            EffectDescriptor::None => return Ok(()),

            EffectDescriptor::DamageBothPlayers { amount } => {
                if amount > 0 {
                    Self::damage_player(ctx.caster, amount, ctx.events);
                    Self::damage_player(ctx.target, amount, ctx.events);
                }
                EffectPayload { amount, ..Default::default() }
            }

            EffectDescriptor::DamageTargetPlayer { amount } => {
                if amount > 0 {
                    Self::damage_player(ctx.target, amount, ctx.events);
                }
                EffectPayload { amount, ..Default::default() }
            }

            EffectDescriptor::HealCasterPlayer { amount } => {
                if amount > 0 {
                    Self::heal_player(ctx.caster, amount, ctx.events);
                }
                EffectPayload { amount, ..Default::default() }
            }

            EffectDescriptor::HealTargetPlayer { amount } => {
                if amount > 0 {
                    Self::heal_player(ctx.target, amount, ctx.events);
                }
                EffectPayload { amount, ..Default::default() }
            }

            EffectDescriptor::DrawCards { count } => {
                let drawn = Self::draw_up_to(ctx.caster, count, ctx.events)?;
                EffectPayload {
                    amount: i32::try_from(count).unwrap_or(i32::MAX),
                    affected: drawn,
                }
            }

            EffectDescriptor::DrawAndReduceCost {
                count,
                reduction,
                duration,
            } => {
                let before: FxHashSet<InstanceId> = ctx.caster.hand.ids().collect();
                Self::draw_up_to(ctx.caster, count, ctx.events)?;
                let new_cards: AffectedCards = ctx
                    .caster
                    .hand
                    .ids()
                    .filter(|id| !before.contains(id))
                    .collect();

                if reduction != 0 && duration > 0 && !new_cards.is_empty() {
                    trace!(cards = new_cards.len(), reduction, duration, "Registering cost modifier");
                    ctx.caster.durations.push_back(DurationEffect::cost_modifier(
                        new_cards.clone(),
                        -reduction,
                        duration,
                        ctx.turn,
                    ));
                }
                EffectPayload {
                    amount: reduction,
                    affected: new_cards,
                }
            }

            EffectDescriptor::BlockEnemyPoliticians { duration } => {
                let mut blocked = AffectedCards::new();
                if duration > 0 {
                    for card in ctx.target.board.iter_mut() {
                        if card.kind == CardKind::Politician && card.is_alive() {
                            card.can_attack = false;
                            blocked.push(card.id);
                        }
                    }
                    for &id in &blocked {
                        ctx.target
                            .durations
                            .push_back(DurationEffect::attack_block(id, duration, ctx.turn));
                    }
                }
                trace!(blocked = blocked.len(), duration, "Blocked politicians");
                EffectPayload {
                    amount: i32::try_from(duration).unwrap_or(i32::MAX),
                    affected: blocked,
                }
            }
        };

        ctx.events.push(GameEvent::EffectApplied {
            kind: effect.kind(),
            caster,
            payload,
        });
        Ok(())
    }

    /// Count down the records affecting `player` at the end of `turn`,
    /// which must be one of that player's turns.
    ///
    /// Records registered during `turn` itself are left alone: their first
    /// full turn has not happened yet. Records that reach zero are
    /// reverted and dropped.
    pub fn tick_durations(player: &mut PlayerState, turn: u32, events: &mut EventLog) {
        if player.durations.is_empty() {
            return;
        }

        let mut kept = im::Vector::new();
        let mut expired = Vec::new();
        for mut record in player.durations.iter().cloned() {
            if record.registered_turn < turn {
                record.remaining_turns = record.remaining_turns.saturating_sub(1);
            }
            if record.remaining_turns == 0 {
                expired.push(record);
            } else {
                kept.push_back(record);
            }
        }
        player.durations = kept;

        for record in expired {
            Self::revert(player, &record);
            events.push(GameEvent::EffectExpired {
                player: player.id,
                kind: record.source(),
                affected: record.affected(),
            });
        }
    }

    /// Undo what an expired record held in place. Cards that have left the
    /// board are skipped.
    fn revert(player: &mut PlayerState, record: &DurationEffect) {
        match record.kind {
            // Effective cost is computed from live records only.
            DurationKind::CostModifier { .. } => {}
            DurationKind::AttackBlock { target } => {
                if player.durations.iter().any(|d| d.blocks(target)) {
                    return;
                }
                if let Some(card) = player.board.get_mut(target) {
                    card.can_attack = true;
                    trace!(card = %target, "Attack block lifted");
                }
            }
        }
    }

    fn damage_player(player: &mut PlayerState, amount: i32, events: &mut EventLog) {
        let new_life = player.lose_life(amount);
        events.push(GameEvent::PlayerDamaged {
            player: player.id,
            amount,
            new_life,
        });
    }

    /// Heal up to the cap. Nothing is reported when life was already full.
    fn heal_player(player: &mut PlayerState, amount: i32, events: &mut EventLog) {
        let before = player.life;
        let new_life = player.heal(amount);
        if new_life > before {
            events.push(GameEvent::PlayerHealed {
                player: player.id,
                amount: new_life - before,
                new_life,
            });
        }
    }

    /// Draw up to `count` cards, stopping quietly at an empty deck or full
    /// hand.
    fn draw_up_to(
        player: &mut PlayerState,
        count: u32,
        events: &mut EventLog,
    ) -> Result<AffectedCards, GameError> {
        let mut drawn = AffectedCards::new();
        for _ in 0..count {
            match player.draw() {
                Ok(card) => {
                    events.push(GameEvent::CardMoved {
                        card: card.id,
                        owner: player.id,
                        from: ZoneKind::Deck,
                        to: ZoneKind::Hand,
                    });
                    drawn.push(card.id);
                }
                Err(GameError::DeckEmpty) | Err(GameError::HandFull) => {
                    warn!(
                        player = %player.id,
                        requested = count,
                        drawn = drawn.len(),
                        "Effect draw stopped early"
                    );
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(drawn)
    }
}

//! Per-player match state.
//!
//! A `PlayerState` owns the four zones, the life and power totals and the
//! timed effects currently affecting that player. It enforces the rules
//! that concern one player alone (paying, drawing, life bounds); anything
//! involving both players goes through `GameState`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{BoardCard, CardDefinition, CardKind, HandCard};
use crate::core::{GameError, GameRng, InstanceId, MatchConfig, PlayerId};
use crate::effects::DurationEffect;
use crate::zones::{Zone, ZoneKind};

/// One player's side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub(crate) id: PlayerId,
    pub(crate) life: i32,
    pub(crate) power: i32,
    pub(crate) max_life: i32,
    pub(crate) max_power: i32,
    pub(crate) deck: Zone<HandCard>,
    pub(crate) hand: Zone<HandCard>,
    pub(crate) board: Zone<BoardCard>,
    pub(crate) discard: Zone<HandCard>,
    pub(crate) durations: Vector<DurationEffect>,
}

impl PlayerState {
    /// Empty zones, starting life and starting power.
    #[must_use]
    pub fn new(id: PlayerId, config: &MatchConfig) -> Self {
        Self {
            id,
            life: config.starting_life,
            power: config.starting_power,
            max_life: config.max_life,
            max_power: config.max_power,
            deck: Zone::new(ZoneKind::Deck),
            hand: Zone::bounded(ZoneKind::Hand, config.max_hand_size),
            board: Zone::bounded(ZoneKind::Board, config.board_slots),
            discard: Zone::new(ZoneKind::Discard),
            durations: Vector::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn life(&self) -> i32 {
        self.life
    }

    #[must_use]
    pub fn power(&self) -> i32 {
        self.power
    }

    #[must_use]
    pub fn deck(&self) -> &Zone<HandCard> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Zone<HandCard> {
        &self.hand
    }

    #[must_use]
    pub fn board(&self) -> &Zone<BoardCard> {
        &self.board
    }

    #[must_use]
    pub fn discard(&self) -> &Zone<HandCard> {
        &self.discard
    }

    /// Timed effects currently affecting this player.
    pub fn durations(&self) -> impl Iterator<Item = &DurationEffect> {
        self.durations.iter()
    }

    /// Life at or below zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.life <= 0
    }

    /// Printed cost plus every active cost modifier targeting this
    /// instance, floored at zero.
    #[must_use]
    pub fn effective_cost(&self, card: &HandCard, definition: &CardDefinition) -> i32 {
        let delta: i32 = self
            .durations
            .iter()
            .map(|d| d.cost_delta_for(card.id))
            .sum();
        (definition.cost + delta).max(0)
    }

    #[must_use]
    pub fn can_afford(&self, card: &HandCard, definition: &CardDefinition) -> bool {
        self.effective_cost(card, definition) <= self.power
    }

    /// Spend the card's effective cost. Returns the amount paid.
    pub fn pay(&mut self, card: &HandCard, definition: &CardDefinition) -> Result<i32, GameError> {
        let needed = self.effective_cost(card, definition);
        if needed > self.power {
            return Err(GameError::InsufficientPower {
                needed,
                available: self.power,
            });
        }
        self.power -= needed;
        Ok(needed)
    }

    /// Add turn-start power, capped at the configured maximum.
    pub fn gain_power(&mut self, amount: i32) {
        self.power = (self.power + amount).min(self.max_power);
    }

    /// Move the top deck card into the hand.
    ///
    /// A full hand is reported before the deck is looked at, and nothing
    /// moves on failure.
    pub fn draw(&mut self) -> Result<HandCard, GameError> {
        if self.hand.is_full() {
            return Err(GameError::HandFull);
        }
        let card = self.deck.pop_front().map_err(|_| GameError::DeckEmpty)?;
        if let Err(err) = self.hand.add(card) {
            self.deck.push_front(card);
            return Err(err);
        }
        Ok(card)
    }

    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        self.deck.shuffle(rng);
    }

    /// Lose life. Returns the new total, which may go negative.
    pub fn lose_life(&mut self, amount: i32) -> i32 {
        self.life -= amount;
        self.life
    }

    /// Gain life up to the cap. Returns the new total.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.life < self.max_life {
            self.life = (self.life + amount).min(self.max_life);
        }
        self.life
    }

    /// A living immune politician is on this board, so attacks against
    /// this player must go through one of them.
    #[must_use]
    pub fn has_fueros(&self) -> bool {
        self.board
            .iter()
            .any(|c| c.kind == CardKind::Politician && c.immune && c.is_alive())
    }

    /// Every instance id this player owns, in zone order.
    pub fn instance_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.deck
            .ids()
            .chain(self.hand.ids())
            .chain(self.board.ids())
            .chain(self.discard.ids())
    }

    /// Number of instances across all four zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.count() + self.hand.count() + self.board.count() + self.discard.count()
    }
}

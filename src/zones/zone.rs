//! Zones: ordered card containers with an optional capacity.
//!
//! Every player owns four zones. Deck, hand and discard hold `HandCard`s;
//! the board holds `BoardCard`s. Storage is an `im::Vector`, so cloning a
//! whole match for AI lookahead or a snapshot is cheap.
//!
//! Capacity counts only cards that occupy a slot. On the board that
//! excludes supports, so a full board still accepts a support card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{BoardCard, HandCard};
use crate::core::{GameError, GameRng, InstanceId};

/// Which of a player's zones a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Deck,
    Hand,
    Board,
    Discard,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "Deck",
            ZoneKind::Hand => "Hand",
            ZoneKind::Board => "Board",
            ZoneKind::Discard => "Discard",
        };
        f.write_str(name)
    }
}

/// Something a zone can hold.
pub trait ZoneCard: Clone {
    /// Identity used for lookup and the uniqueness check.
    fn instance_id(&self) -> InstanceId;

    /// Whether this card counts against the zone's capacity.
    fn occupies_slot(&self) -> bool {
        true
    }
}

impl ZoneCard for HandCard {
    fn instance_id(&self) -> InstanceId {
        self.id
    }
}

impl ZoneCard for BoardCard {
    fn instance_id(&self) -> InstanceId {
        self.id
    }

    fn occupies_slot(&self) -> bool {
        self.kind.occupies_slot()
    }
}

/// An ordered sequence of cards. Index 0 is the front (top of a deck).
///
/// ```
/// use fueros_engine::cards::{CardId, HandCard};
/// use fueros_engine::core::InstanceId;
/// use fueros_engine::zones::{Zone, ZoneKind};
///
/// let mut hand = Zone::bounded(ZoneKind::Hand, 2);
/// hand.add(HandCard::new(InstanceId(1), CardId::new(1))).unwrap();
/// hand.add(HandCard::new(InstanceId(2), CardId::new(1))).unwrap();
///
/// assert!(hand.is_full());
/// assert!(hand.add(HandCard::new(InstanceId(3), CardId::new(1))).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone<T: ZoneCard> {
    kind: ZoneKind,
    cards: Vector<T>,
    capacity: Option<usize>,
}

impl<T: ZoneCard> Zone<T> {
    /// Create an empty zone without a size limit.
    #[must_use]
    pub fn new(kind: ZoneKind) -> Self {
        Self {
            kind,
            cards: Vector::new(),
            capacity: None,
        }
    }

    /// Create an empty zone holding at most `max_slots` slot-occupying cards.
    #[must_use]
    pub fn bounded(kind: ZoneKind, max_slots: usize) -> Self {
        Self {
            kind,
            cards: Vector::new(),
            capacity: Some(max_slots),
        }
    }

    /// Which zone this is.
    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Append a card at the back.
    ///
    /// Fails with `ZoneFull` when the card needs a slot and none is free.
    /// A card id already present is a contract failure.
    pub fn add(&mut self, card: T) -> Result<(), GameError> {
        let id = card.instance_id();
        if self.contains(id) {
            return Err(GameError::InvariantViolation(format!(
                "{} already in {}",
                id, self.kind
            )));
        }
        if card.occupies_slot() && self.is_full() {
            return Err(GameError::ZoneFull);
        }
        self.cards.push_back(card);
        Ok(())
    }

    /// Remove a card by id.
    pub fn remove(&mut self, id: InstanceId) -> Result<T, GameError> {
        let index = self
            .position(id)
            .ok_or(GameError::CardNotFound(id))?;
        Ok(self.cards.remove(index))
    }

    /// The front card, if any.
    #[must_use]
    pub fn peek_front(&self) -> Option<&T> {
        self.cards.front()
    }

    /// Remove and return the front card.
    pub fn pop_front(&mut self) -> Result<T, GameError> {
        self.cards.pop_front().ok_or(GameError::ZoneEmpty)
    }

    /// Put a card back on top. Only used to undo a `pop_front`.
    pub(crate) fn push_front(&mut self, card: T) {
        self.cards.push_front(card);
    }

    /// Remove every card matching `pred`, keeping the order of the rest.
    pub fn take_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        let (taken, kept): (Vec<T>, Vec<T>) = self.cards.iter().cloned().partition(|c| pred(c));
        if !taken.is_empty() {
            self.cards = kept.into_iter().collect();
        }
        taken
    }

    /// Total number of cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards counting against capacity.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.cards.iter().filter(|c| c.occupies_slot()).count()
    }

    /// No free slot left. Always false for unbounded zones.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity
            .map_or(false, |max| self.slot_count() >= max)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&T> {
        self.cards.iter().find(|c| c.instance_id() == id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut T> {
        self.cards.iter_mut().find(|c| c.instance_id() == id)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cards.iter()
    }

    /// Mutable iteration front to back.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cards.iter_mut()
    }

    /// Instance ids front to back.
    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.cards.iter().map(ZoneCard::instance_id)
    }

    /// Replace the order with a uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut order: Vec<T> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut order);
        self.cards = order.into_iter().collect();
    }

    fn position(&self, id: InstanceId) -> Option<usize> {
        self.cards.iter().position(|c| c.instance_id() == id)
    }
}

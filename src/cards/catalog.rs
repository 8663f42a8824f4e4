//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition a match can reference.
//! It is built once before the match and shared read-only afterwards.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};
use crate::core::GameError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use fueros_engine::cards::{CardCatalog, CardDefinition, CardId, CardKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::new(CardId::new(1), "Mayor", CardKind::Character))
///     .unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Mayor");
/// assert!(catalog.register(CardDefinition::new(CardId::new(1), "Dup", CardKind::Event)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of definitions.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, GameError> {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Register a card definition. Ids must be unique.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), GameError> {
        if self.cards.contains_key(&card.id) {
            return Err(GameError::InvariantViolation(format!(
                "{} already registered",
                card.id
            )));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition that must exist.
    ///
    /// A missing definition means an instance points outside the catalog,
    /// which is a contract failure rather than a rules rejection.
    pub fn require(&self, id: CardId) -> Result<&CardDefinition, GameError> {
        self.cards
            .get(&id)
            .ok_or_else(|| GameError::InvariantViolation(format!("{} missing from catalog", id)))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(CardDefinition::new(CardId::new(1), "Test Card", CardKind::Support))
            .unwrap();

        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Test Card");
        assert!(catalog.get(CardId::new(99)).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(CardDefinition::new(CardId::new(1), "A", CardKind::Event))
            .unwrap();

        let result = catalog.register(CardDefinition::new(CardId::new(1), "B", CardKind::Event));
        assert!(matches!(result, Err(GameError::InvariantViolation(_))));
        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "A");
    }

    #[test]
    fn test_require_missing() {
        let catalog = CardCatalog::new();
        assert!(matches!(
            catalog.require(CardId::new(5)),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_find_by_kind() {
        let catalog = CardCatalog::from_definitions([
            CardDefinition::new(CardId::new(1), "Senator", CardKind::Politician),
            CardDefinition::new(CardId::new(2), "Scandal", CardKind::Event),
            CardDefinition::new(CardId::new(3), "Deputy", CardKind::Politician),
        ])
        .unwrap();

        assert_eq!(catalog.find_by_kind(CardKind::Politician).count(), 2);
        assert_eq!(catalog.find_by_kind(CardKind::Event).count(), 1);
        assert_eq!(catalog.find_by_kind(CardKind::Support).count(), 0);
    }
}

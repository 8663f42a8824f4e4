//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable printed properties of a card: its
//! kind, cost, influence (attack), resistance (health), the Fueros immunity
//! flag, the immediate-action flag and, for actions and events, the effect
//! it resolves. Runtime state lives in the instance types.

use serde::{Deserialize, Serialize};

use crate::effects::EffectDescriptor;

/// Unique identifier for a card definition.
///
/// This identifies the printed card, not a copy of it in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The closed set of card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Board card; may carry Fueros immunity. Occupies a slot.
    Politician,
    /// Board card without immunity rules. Occupies a slot.
    Character,
    /// Board card that does not occupy a slot.
    Support,
    /// Resolves its effect and goes to the discard.
    Action,
    /// Resolves its effect and goes to the discard.
    Event,
}

impl CardKind {
    /// Kinds that stay on the board once played.
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        matches!(self, CardKind::Politician | CardKind::Character | CardKind::Support)
    }

    /// Kinds that resolve an effect when played.
    #[must_use]
    pub const fn has_effect(self) -> bool {
        matches!(self, CardKind::Action | CardKind::Event)
    }

    /// Kinds that count against the board slot limit.
    #[must_use]
    pub const fn occupies_slot(self) -> bool {
        matches!(self, CardKind::Politician | CardKind::Character)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Politician => "Politician",
            CardKind::Character => "Character",
            CardKind::Support => "Support",
            CardKind::Action => "Action",
            CardKind::Event => "Event",
        };
        f.write_str(name)
    }
}

/// Error returned when a kind label from card data is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCardKind(pub String);

impl std::fmt::Display for UnknownCardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown card kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownCardKind {}

impl std::str::FromStr for CardKind {
    type Err = UnknownCardKind;

    /// Parse the kind labels used by card data files.
    ///
    /// Case and surrounding whitespace are ignored. English names and the
    /// Spanish labels (accented or not) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        match label.as_str() {
            "politician" | "político" | "politico" => Ok(CardKind::Politician),
            "character" | "personaje" => Ok(CardKind::Character),
            "support" | "apoyo" => Ok(CardKind::Support),
            "action" | "acción" | "accion" => Ok(CardKind::Action),
            "event" | "evento" => Ok(CardKind::Event),
            _ => Err(UnknownCardKind(s.to_string())),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use fueros_engine::cards::{CardDefinition, CardId, CardKind};
///
/// let senator = CardDefinition::new(CardId::new(1), "Senator", CardKind::Politician)
///     .with_cost(3)
///     .with_stats(2, 4)
///     .with_immunity();
///
/// assert_eq!(senator.influence, 2);
/// assert_eq!(senator.resistance, 4);
/// assert!(senator.immune);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Card kind.
    pub kind: CardKind,

    /// Base power cost.
    pub cost: i32,

    /// Base attack.
    pub influence: i32,

    /// Base health.
    pub resistance: i32,

    /// Fueros: attacks must target this card before anything else.
    pub immune: bool,

    /// Can attack on the turn it is played.
    pub immediate_action: bool,

    /// Effect resolved when an action or event is played.
    pub effect: EffectDescriptor,
}

impl CardDefinition {
    /// Create a new card definition with zero cost and stats and no effect.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            cost: 0,
            influence: 0,
            resistance: 0,
            immune: false,
            immediate_action: false,
            effect: EffectDescriptor::None,
        }
    }

    /// Set the base cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    /// Set influence and resistance (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, influence: i32, resistance: i32) -> Self {
        self.influence = influence;
        self.resistance = resistance;
        self
    }

    /// Give the card Fueros (builder pattern).
    #[must_use]
    pub fn with_immunity(mut self) -> Self {
        self.immune = true;
        self
    }

    /// Let the card attack the turn it enters (builder pattern).
    #[must_use]
    pub fn with_immediate_action(mut self) -> Self {
        self.immediate_action = true;
        self
    }

    /// Attach an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectDescriptor) -> Self {
        self.effect = effect;
        self
    }
}

//! Card instance identification.
//!
//! Every physical card in a match gets a unique `InstanceId` when the decks
//! are built. The id follows the card through every zone it visits (deck,
//! hand, board, discard), so presentation layers can track a card across
//! `CardMoved` events.
//!
//! ## Usage
//!
//! ```
//! use fueros_engine::core::InstanceId;
//!
//! let first = InstanceId::new(0);
//! assert_eq!(first.next(), InstanceId::new(1));
//! assert_eq!(format!("{}", first), "Instance(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one match.
///
/// Distinct from `CardId`, which names the card definition. Two copies of
/// the same definition in a deck share a `CardId` but never an `InstanceId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

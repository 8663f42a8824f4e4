//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Deck, hand, board or discard
//! - `Zone<T>`: Ordered container with an optional slot capacity
//! - `ZoneCard`: What a zone can hold (hand-shaped or board-shaped cards)

pub mod zone;

pub use zone::{Zone, ZoneCard, ZoneKind};

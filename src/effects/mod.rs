//! Effect system for action and event cards.
//!
//! ## Key Types
//!
//! - `EffectDescriptor`: The effect printed on a card
//! - `DurationEffect`: A timed modification still in force
//! - `EffectEngine`: Resolves descriptors and ticks durations

pub mod effect;
pub mod engine;

pub use effect::{AffectedCards, DurationEffect, DurationKind, EffectDescriptor, EffectKind};
pub use engine::{EffectContext, EffectEngine};

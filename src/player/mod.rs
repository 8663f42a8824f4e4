//! Per-player state: zones, life, power and timed effects.

pub mod state;

pub use state::PlayerState;

//! Core engine types: instance ids, players, commands, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! zones or card rules.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::InstanceId;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
pub use action::{AttackTarget, Command, CommandRecord};
pub use error::GameError;

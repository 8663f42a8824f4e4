//! # fueros-engine
//!
//! Rules engine for a two-player, turn-based political card game.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `GameState` owns every zone, life total and power
//!    pool. Nothing outside it mutates them; all change goes through its
//!    command methods.
//!
//! 2. **Atomic Commands**: A command either completes or is rejected with
//!    a typed `GameError` and leaves the match untouched.
//!
//! 3. **Events, Not Callbacks**: Each accepted command appends
//!    `GameEvent`s to a log. Renderers and sound drain the log; the engine
//!    never calls out.
//!
//! ## Architecture
//!
//! - **Two Card Shapes**: `HandCard` outside the board, `BoardCard` with
//!   live influence, resistance and combat flags on it.
//!
//! - **Persistent Data Structures**: Zones and history use `im-rs`, so
//!   snapshots and AI lookahead copies are cheap.
//!
//! - **Timed Effects as Data**: Multi-turn effects are `DurationEffect`
//!   records on the affected player, ticked at that player's turn end.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, commands, RNG, configuration, errors
//! - `cards`: Card definitions, instances and the catalog
//! - `zones`: Deck, hand, board and discard containers
//! - `player`: Per-player state
//! - `effects`: Effect descriptors, durations and the effect engine
//! - `rules`: Combat, turn flow, `GameState` and snapshots
//! - `events`: Event log
//! - `ai`: Computer-player policies

pub mod core;
pub mod cards;
pub mod zones;
pub mod player;
pub mod effects;
pub mod rules;
pub mod events;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, PlayerId, PlayerMap,
    GameRng, GameRngState,
    MatchConfig,
    AttackTarget, Command, CommandRecord,
    GameError,
};

pub use crate::cards::{
    CardId, CardKind, CardDefinition, CardCatalog,
    HandCard, BoardCard,
};

pub use crate::zones::{Zone, ZoneKind};

pub use crate::player::PlayerState;

pub use crate::effects::{DurationEffect, EffectDescriptor, EffectEngine, EffectKind};

pub use crate::rules::{
    CombatReport, CombatResolver,
    CommandOutcome, GameState, PlayOutcome, TurnReport,
    GameOutcome, GameOverReason, GameResult,
    MatchSnapshot,
};

pub use crate::events::{EventLog, GameEvent};

pub use crate::ai::{legal_commands, GreedyPolicy, Policy, RandomPolicy};

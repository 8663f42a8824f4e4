//! Match rules: combat, turn flow and the `GameState` command surface.
//!
//! ## Key Types
//!
//! - `GameState`: Owns both players and accepts commands
//! - `CombatResolver`: Card-vs-card and card-vs-player attacks
//! - `TurnController`: Active player and turn counter
//! - `MatchSnapshot`: Serializable copy of a match

pub mod combat;
pub mod game;
pub mod outcome;
pub mod snapshot;
pub mod turn;

pub use combat::{CombatReport, CombatResolver};
pub use game::{CommandOutcome, GameState, PlayOutcome, TurnReport};
pub use outcome::{GameOutcome, GameOverReason, GameResult};
pub use snapshot::MatchSnapshot;
pub use turn::TurnController;

//! Match configuration.
//!
//! Hosts configure a match at startup with `MatchConfig`. Defaults match
//! the tabletop rules: 20 life, 5-card opening hand, 7-card hand limit,
//! 8 board slots, one power gained per turn up to 10.
//!
//! ```
//! use fueros_engine::core::MatchConfig;
//!
//! let config = MatchConfig::default()
//!     .with_starting_life(30)
//!     .with_max_life(30)
//!     .with_board_slots(5);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.board_slots, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{PlayerId, PLAYER_COUNT};

/// Tunable rules for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Life each player starts with.
    pub starting_life: i32,

    /// Cap applied by heal effects.
    pub max_life: i32,

    /// Power each player holds before their first turn.
    pub starting_power: i32,

    /// Power gained at the start of each of the player's turns after the first.
    pub power_per_turn: i32,

    /// Upper bound on a player's power pool.
    pub max_power: i32,

    /// Cards dealt to each player at setup.
    pub starting_hand_size: usize,

    /// Hand limit; draws into a full hand are rejected.
    pub max_hand_size: usize,

    /// Board slots available to politicians and characters.
    /// Support cards do not consume slots.
    pub board_slots: usize,

    /// Draw one card at the start of each turn. An empty deck at that
    /// moment loses the game.
    pub mandatory_draw: bool,

    /// Seat that takes turn 1.
    pub first_player: PlayerId,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            max_life: 20,
            starting_power: 1,
            power_per_turn: 1,
            max_power: 10,
            starting_hand_size: 5,
            max_hand_size: 7,
            board_slots: 8,
            mandatory_draw: true,
            first_player: PlayerId::FIRST,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_max_life(mut self, life: i32) -> Self {
        self.max_life = life;
        self
    }

    #[must_use]
    pub fn with_starting_power(mut self, power: i32) -> Self {
        self.starting_power = power;
        self
    }

    #[must_use]
    pub fn with_power_per_turn(mut self, power: i32) -> Self {
        self.power_per_turn = power;
        self
    }

    #[must_use]
    pub fn with_max_power(mut self, power: i32) -> Self {
        self.max_power = power;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_board_slots(mut self, slots: usize) -> Self {
        self.board_slots = slots;
        self
    }

    #[must_use]
    pub fn with_mandatory_draw(mut self, enabled: bool) -> Self {
        self.mandatory_draw = enabled;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), GameError> {
        let problem = if self.starting_life <= 0 {
            Some("starting_life must be positive")
        } else if self.max_life < self.starting_life {
            Some("max_life must be at least starting_life")
        } else if self.starting_power < 0 || self.power_per_turn < 0 {
            Some("power values must not be negative")
        } else if self.max_power < self.starting_power {
            Some("max_power must be at least starting_power")
        } else if self.max_hand_size == 0 {
            Some("max_hand_size must be positive")
        } else if self.board_slots == 0 {
            Some("board_slots must be positive")
        } else if self.first_player.index() >= PLAYER_COUNT {
            Some("first_player must be a seat at the table")
        } else {
            None
        };

        match problem {
            Some(msg) => Err(GameError::InvariantViolation(msg.to_string())),
            None => Ok(()),
        }
    }
}

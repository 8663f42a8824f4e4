//! Command rejection reasons.
//!
//! Every command returns `Result<_, GameError>`. A rejected command leaves
//! the match untouched, so a caller can show the reason and carry on.
//! `InvariantViolation` is the odd one out: it signals a bug in the engine
//! rather than an illegal move, and is logged at `error` level when raised.

use super::entity::InstanceId;
use super::player::PlayerId;

/// Why a command (or a zone operation inside it) was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The command came from the player who is not active.
    NotYourTurn { player: PlayerId, active: PlayerId },
    /// The card's effective cost exceeds the player's power.
    InsufficientPower { needed: i32, available: i32 },
    /// The capacity-bounded zone has no free slot.
    ZoneFull,
    /// The zone has no card to take.
    ZoneEmpty,
    /// The deck has no card to draw.
    DeckEmpty,
    /// The hand is at its maximum size.
    HandFull,
    /// No card with this id in the zone that was searched.
    CardNotFound(InstanceId),
    /// The target cannot be chosen for this command.
    InvalidTarget(&'static str),
    /// The opponent has an immune politician that must be attacked first.
    MustTargetImmuneCardFirst,
    /// The attacker is blocked, cooling down, already acted, dying or has no attack.
    CardNotEligibleToAttack,
    /// The match has already ended.
    GameAlreadyOver,
    /// Internal contract failure; the command was aborted.
    InvariantViolation(String),
}

impl GameError {
    /// True for rejections caused by the caller's move, false for engine bugs.
    #[must_use]
    pub fn is_rule_rejection(&self) -> bool {
        !matches!(self, GameError::InvariantViolation(_))
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NotYourTurn { player, active } => {
                write!(f, "{} acted during the turn of {}", player, active)
            }
            GameError::InsufficientPower { needed, available } => {
                write!(f, "insufficient power: needs {}, has {}", needed, available)
            }
            GameError::ZoneFull => write!(f, "zone is full"),
            GameError::ZoneEmpty => write!(f, "zone is empty"),
            GameError::DeckEmpty => write!(f, "deck is empty"),
            GameError::HandFull => write!(f, "hand is full"),
            GameError::CardNotFound(id) => write!(f, "{} not found", id),
            GameError::InvalidTarget(reason) => write!(f, "invalid target: {}", reason),
            GameError::MustTargetImmuneCardFirst => {
                write!(f, "an immune politician must be attacked first")
            }
            GameError::CardNotEligibleToAttack => write!(f, "card cannot attack now"),
            GameError::GameAlreadyOver => write!(f, "the game is already over"),
            GameError::InvariantViolation(detail) => write!(f, "invariant violation: {}", detail),
        }
    }
}

impl std::error::Error for GameError {}

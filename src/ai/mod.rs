//! Computer players.
//!
//! ## Key Types
//!
//! - `Policy`: Chooses the next command for a seat
//! - `GreedyPolicy`: Biggest play first, then profitable attacks
//! - `RandomPolicy`: Uniform over `legal_commands`

pub mod policy;

pub use policy::{legal_commands, play_out, GreedyPolicy, Policy, RandomPolicy};

//! AI seat agents.
//!
//! This module provides:
//! - `SeatAgent`, the decision interface shared by AI and human seats
//! - `AiAgent`: difficulty-scaled policy play
//! - `RandomAgent`: uniformly random legal moves (seedable baseline)
//! - a name-based registry for building agents from configuration

mod agent;
pub mod difficulty;
pub mod policy;
mod random;
pub mod registry;
mod trait_def;

pub use agent::AiAgent;
pub use difficulty::{Difficulty, DifficultyProfile, SeatRole, UnknownDifficulty};
pub use random::RandomAgent;
pub use trait_def::{AiError, SeatAgent};

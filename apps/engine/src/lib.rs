#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod game_flow;


// Re-exports for public API
pub use ai::{AiAgent, AiError, Difficulty, RandomAgent, SeatAgent, SeatRole};
pub use config::{ConfigError, GameConfig};
pub use domain::{
    BidAction, BidOutcome, BidView, Card, DiscardView, GameState, HandScore, Phase, PlayView,
    Rank, ScoreReason, Seat, Suit, Team,
};
pub use errors::{DomainError, ErrorCode, GameError};
pub use game_flow::{GameController, GameEvent, GameHistory, GameStats, HandRecord, PendingAction};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

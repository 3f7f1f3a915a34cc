//! Errors from driving a game with seat agents.

use thiserror::Error;

use super::domain::DomainError;
use crate::ai::AiError;
use crate::domain::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The rules rejected an action; game state is unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A seat agent failed to produce a decision.
    #[error("agent at {seat} failed: {source}")]
    Agent {
        seat: Seat,
        #[source]
        source: AiError,
    },
    /// The game ran past its configured number of deals.
    #[error("no winner after {0} deals")]
    HandLimit(u32),
}

impl GameError {
    pub fn agent(seat: Seat, source: AiError) -> Self {
        Self::Agent { seat, source }
    }
}

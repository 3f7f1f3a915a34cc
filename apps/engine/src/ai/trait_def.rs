//! Seat agent trait definition.

use rand::RngCore;
use thiserror::Error;

use crate::ai::Difficulty;
use crate::domain::{BidAction, BidView, Card, DiscardView, PlayView};

/// Errors that can occur while an agent decides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// The agent encountered an internal error.
    #[error("AI internal error: {0}")]
    Internal(String),
    /// The agent produced, or could only produce, an invalid move.
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A decision maker for one seat: AI policy, random baseline, or a human UI.
///
/// Every view carries the legal options for the decision. `rng` is the game's
/// injected generator; agents that draw from it keep the whole game
/// reproducible from one seed.
pub trait SeatAgent {
    /// Choose a bid from `view.legal`.
    fn choose_bid(&mut self, view: &BidView, rng: &mut dyn RngCore) -> Result<BidAction, AiError>;

    /// Choose one of the dealer's six cards to bury.
    fn choose_discard(
        &mut self,
        view: &DiscardView,
        rng: &mut dyn RngCore,
    ) -> Result<Card, AiError>;

    /// Choose a card from `view.legal`.
    fn choose_play(&mut self, view: &PlayView, rng: &mut dyn RngCore) -> Result<Card, AiError>;

    /// Called before a deal when the game difficulty changed. Human and
    /// random agents ignore it.
    fn set_difficulty(&mut self, _difficulty: Difficulty) {}
}

//! Difficulty-scaled AI seat agent.

use rand::RngCore;

use super::difficulty::{Difficulty, DifficultyProfile, SeatRole};
use super::policy::{decide_bid, decide_discard, decide_play};
use super::trait_def::{AiError, SeatAgent};
use crate::domain::{BidAction, BidView, Card, DiscardView, PlayView};

/// AI that decides through [`super::policy`] with one difficulty profile.
#[derive(Debug, Clone)]
pub struct AiAgent {
    difficulty: Difficulty,
    profile: DifficultyProfile,
    role: SeatRole,
}

impl AiAgent {
    pub const NAME: &'static str = "policy";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(difficulty: Difficulty, role: SeatRole) -> Self {
        Self {
            difficulty,
            profile: difficulty.profile(),
            role,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn role(&self) -> SeatRole {
        self.role
    }
}

impl SeatAgent for AiAgent {
    fn choose_bid(&mut self, view: &BidView, rng: &mut dyn RngCore) -> Result<BidAction, AiError> {
        if view.legal.is_empty() {
            return Err(AiError::InvalidMove("no legal bids available".into()));
        }
        let action = decide_bid(view, &self.profile, self.role, rng);
        if view.legal.contains(&action) {
            Ok(action)
        } else {
            Err(AiError::Internal(format!(
                "policy chose {action:?}, not among legal bids"
            )))
        }
    }

    fn choose_discard(
        &mut self,
        view: &DiscardView,
        _rng: &mut dyn RngCore,
    ) -> Result<Card, AiError> {
        decide_discard(&view.hand, view.trump)
            .ok_or_else(|| AiError::InvalidMove("dealer has no cards to discard".into()))
    }

    fn choose_play(&mut self, view: &PlayView, rng: &mut dyn RngCore) -> Result<Card, AiError> {
        decide_play(view, &self.profile, rng)
            .ok_or_else(|| AiError::InvalidMove("no legal plays available".into()))
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile();
    }
}

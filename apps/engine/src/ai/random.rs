//! Random agent: uniformly random legal choices.
//!
//! The reference baseline for simulations. A seeded agent owns its generator;
//! an unseeded one draws from the game RNG, so the game stays reproducible.

use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::trait_def::{AiError, SeatAgent};
use crate::domain::{BidAction, BidView, Card, DiscardView, PlayView};

#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: Option<ChaCha8Rng>,
}

impl RandomAgent {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map(ChaCha8Rng::seed_from_u64),
        }
    }

    fn pick<T: Copy>(
        &mut self,
        options: &[T],
        game_rng: &mut dyn RngCore,
        what: &str,
    ) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("no legal {what} available")));
        }
        let choice = match self.rng.as_mut() {
            Some(own) => options.choose(own),
            None => options.choose(game_rng),
        };
        choice
            .copied()
            .ok_or_else(|| AiError::Internal(format!("failed to choose random {what}")))
    }
}

impl SeatAgent for RandomAgent {
    fn choose_bid(&mut self, view: &BidView, rng: &mut dyn RngCore) -> Result<BidAction, AiError> {
        self.pick(&view.legal, rng, "bids")
    }

    fn choose_discard(
        &mut self,
        view: &DiscardView,
        rng: &mut dyn RngCore,
    ) -> Result<Card, AiError> {
        self.pick(&view.hand, rng, "discards")
    }

    fn choose_play(&mut self, view: &PlayView, rng: &mut dyn RngCore) -> Result<Card, AiError> {
        self.pick(&view.legal, rng, "plays")
    }
}

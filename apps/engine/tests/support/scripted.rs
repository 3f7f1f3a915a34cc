//! A seat agent standing in for a human at the table.

use std::collections::VecDeque;

use engine::{AiError, BidAction, BidView, Card, DiscardView, PlayView, SeatAgent};
use rand::RngCore;

/// Replays queued bids, then falls back to the first legal option. Records
/// every view it was shown.
#[derive(Default)]
pub struct ScriptedAgent {
    pub bids: VecDeque<BidAction>,
    pub bid_views: Vec<BidView>,
    pub discard_views: Vec<DiscardView>,
    pub play_views: Vec<PlayView>,
}

impl ScriptedAgent {
    pub fn with_bids(bids: impl IntoIterator<Item = BidAction>) -> Self {
        Self {
            bids: bids.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl SeatAgent for ScriptedAgent {
    fn choose_bid(&mut self, view: &BidView, _rng: &mut dyn RngCore) -> Result<BidAction, AiError> {
        self.bid_views.push(view.clone());
        match self.bids.pop_front() {
            Some(action) => Ok(action),
            None => view
                .legal
                .first()
                .copied()
                .ok_or_else(|| AiError::InvalidMove("no legal bids".into())),
        }
    }

    fn choose_discard(
        &mut self,
        view: &DiscardView,
        _rng: &mut dyn RngCore,
    ) -> Result<Card, AiError> {
        self.discard_views.push(view.clone());
        view.hand
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("empty hand".into()))
    }

    fn choose_play(&mut self, view: &PlayView, _rng: &mut dyn RngCore) -> Result<Card, AiError> {
        self.play_views.push(view.clone());
        view.legal
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no legal plays".into()))
    }
}

//! Player view of game state: what a seat may see at a decision point.
//!
//! Views are the interface between the engine and seat agents (AI or human).
//! Each carries the legal options for the pending decision, so agents never
//! re-implement the rules.

use serde::Serialize;

use crate::domain::bidding::{BidAction, BiddingStage};
use crate::domain::cards_logic::card_value;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{require_dealer, require_trump, GameState, Phase, Seat};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Information visible to a seat that must bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidView {
    pub seat: Seat,
    pub dealer: Seat,
    pub hand: Vec<Card>,
    /// The turned-up card (turned down once round two starts).
    pub flipped: Card,
    /// 1 or 2.
    pub round: u8,
    /// True when the dealer is stuck and must call.
    pub stuck: bool,
    pub legal: Vec<BidAction>,
    pub scores: [u8; 2],
}

/// Information visible to the dealer after picking up the flipped card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardView {
    pub seat: Seat,
    /// Six cards, any of which may be discarded.
    pub hand: Vec<Card>,
    pub trump: Suit,
}

/// Information visible to a seat that must play a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayView {
    pub seat: Seat,
    pub dealer: Seat,
    pub hand: Vec<Card>,
    pub legal: Vec<Card>,
    pub trump: Suit,
    pub maker: Option<Seat>,
    pub lone: Option<Seat>,
    pub trick_no: u8,
    /// Plays so far in the current trick, in order.
    pub trick: Vec<(Seat, Card)>,
    pub tricks_won: [u8; PLAYERS],
    /// The card that was turned up, if it is still face up on the table.
    pub flipped: Option<Card>,
}

impl BidView {
    pub fn from_state(state: &GameState, seat: Seat) -> Result<Self, DomainError> {
        let bidding = state
            .bidding
            .as_ref()
            .ok_or_else(|| DomainError::invariant("no bidding in progress"))?;
        let round = bidding
            .round()
            .ok_or_else(|| DomainError::invariant("bidding already closed"))?;
        Ok(Self {
            seat,
            dealer: bidding.dealer(),
            hand: state.hand.hand(seat).to_vec(),
            flipped: bidding.flipped(),
            round,
            stuck: bidding.stage() == BiddingStage::StuckDealer,
            legal: if bidding.expected_bidder() == Some(seat) {
                bidding.legal_bids()
            } else {
                Vec::new()
            },
            scores: state.scores,
        })
    }
}

impl DiscardView {
    pub fn from_state(state: &GameState, seat: Seat) -> Result<Self, DomainError> {
        if state.phase != Phase::DealerDiscard {
            return Err(DomainError::invariant("no discard pending"));
        }
        Ok(Self {
            seat,
            hand: state.hand.hand(seat).to_vec(),
            trump: require_trump(state, "DiscardView")?,
        })
    }
}

impl PlayView {
    pub fn from_state(state: &GameState, seat: Seat) -> Result<Self, DomainError> {
        let Phase::Trick { trick_no } = state.phase else {
            return Err(DomainError::invariant("not in trick play"));
        };
        Ok(Self {
            seat,
            dealer: require_dealer(state, "PlayView")?,
            hand: state.hand.hand(seat).to_vec(),
            legal: legal_moves(state, seat),
            trump: require_trump(state, "PlayView")?,
            maker: state.hand.maker,
            lone: state.hand.lone,
            trick_no,
            trick: state.hand.trick_plays.clone(),
            tricks_won: state.hand.tricks_won,
            flipped: state.hand.flipped,
        })
    }

    pub fn is_leading(&self) -> bool {
        self.trick.is_empty()
    }

    /// Seat currently winning the trick in progress.
    pub fn current_winner(&self) -> Option<Seat> {
        let &(_, led) = self.trick.first()?;
        self.trick
            .iter()
            .max_by_key(|(_, c)| card_value(*c, self.trump, led.suit))
            .map(|&(s, _)| s)
    }
}

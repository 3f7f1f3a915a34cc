//! Lifecycle events queued by the controller for the UI layer.

use serde::Serialize;

use crate::domain::{BidAction, Card, HandScore, Seat, Suit, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    DealComplete {
        hand_no: u32,
        dealer: Seat,
        flipped: Card,
    },
    BidPlaced {
        seat: Seat,
        action: BidAction,
    },
    TrumpResolved {
        trump: Suit,
        maker: Seat,
        alone: bool,
        ordered_up: bool,
        /// Round-one order-up by the dealer's partner.
        assist: bool,
    },
    /// The buried card stays hidden.
    DealerDiscarded {
        dealer: Seat,
    },
    CardPlayed {
        seat: Seat,
        card: Card,
    },
    TrickComplete {
        trick_no: u8,
        winner: Seat,
    },
    HandComplete {
        hand_no: u32,
        score: HandScore,
        scores: [u8; 2],
    },
    GameComplete {
        winner: Team,
        scores: [u8; 2],
    },
    /// Nobody named trump; the deal passes on.
    Redeal {
        hand_no: u32,
        dealer: Seat,
    },
}

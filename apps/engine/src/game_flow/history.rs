//! Per-game record of completed hands.

use serde::Serialize;

use crate::domain::{Card, HandScore, Seat, Suit, Team};

/// Summary of one scored hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandRecord {
    pub hand_no: u32,
    pub dealer: Seat,
    pub upcard: Card,
    pub trump: Suit,
    pub maker: Seat,
    /// Seat that went alone, if any.
    pub lone: Option<Seat>,
    pub ordered_up: bool,
    pub assist: bool,
    pub tricks_won: [u8; 4],
    pub score: HandScore,
    /// Cumulative team scores after this hand.
    pub scores_after: [u8; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub hands: Vec<HandRecord>,
    /// Deals thrown in because every seat passed.
    pub redeals: u32,
}

impl GameHistory {
    pub fn push(&mut self, record: HandRecord) {
        self.hands.push(record);
    }

    pub fn last(&self) -> Option<&HandRecord> {
        self.hands.last()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Hands in which `team` named trump.
    pub fn hands_made_by(&self, team: Team) -> impl Iterator<Item = &HandRecord> {
        self.hands.iter().filter(move |h| h.maker.team() == team)
    }

    /// Hands `team` lost as makers.
    pub fn times_euchred(&self, team: Team) -> usize {
        self.hands_made_by(team)
            .filter(|h| h.score.reason.is_euchre())
            .count()
    }

    pub fn marches(&self, team: Team) -> usize {
        self.hands_made_by(team)
            .filter(|h| h.score.reason.is_march())
            .count()
    }
}

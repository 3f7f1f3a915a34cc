//! Two-round trump bidding with stick-the-dealer, dealer pickup and discard.

use serde::Serialize;
use tracing::debug;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    first_active_from, hand_start_seat, require_dealer, require_turn, sitting_out, GameState,
    Phase, Seat,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{BidViolation, DomainError, PlayViolation};

/// One bidding decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BidAction {
    Pass,
    /// Round one: accept the flipped suit as trump.
    OrderUp { alone: bool },
    /// Round two: name a suit other than the flipped one.
    Call { suit: Suit, alone: bool },
}

impl BidAction {
    pub fn is_pass(self) -> bool {
        matches!(self, BidAction::Pass)
    }

    pub fn alone(self) -> bool {
        match self {
            BidAction::Pass => false,
            BidAction::OrderUp { alone } | BidAction::Call { alone, .. } => alone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiddingStage {
    Round1 { turn: Seat },
    Round2 { turn: Seat },
    /// Three seats passed in round two; the dealer must call.
    StuckDealer,
    Resolved,
    /// Everyone passed twice. Only reachable with stick-the-dealer disabled.
    AllPassed,
}

/// How trump was fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrumpResolution {
    pub trump: Suit,
    pub maker: Seat,
    pub alone: bool,
    /// Trump is the flipped suit, so the dealer picks the card up.
    pub ordered_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// Bidding continues with this seat in the same round.
    Next(Seat),
    /// Round one ended with four passes; round two starts with this seat.
    RoundTwo(Seat),
    /// The dealer is stuck and must call.
    DealerStuck(Seat),
    Resolved(TrumpResolution),
    /// Nobody named trump; the hand is thrown in.
    Redeal,
}

/// Round-one order-up by the dealer's partner.
pub fn is_assist(seat: Seat, dealer: Seat) -> bool {
    seat == dealer.partner()
}

/// Bidding state machine for one deal.
#[derive(Debug, Clone)]
pub struct Bidding {
    dealer: Seat,
    flipped: Card,
    stick_the_dealer: bool,
    stage: BiddingStage,
    passed: Vec<Seat>,
    actions: usize,
    resolution: Option<TrumpResolution>,
}

impl Bidding {
    pub fn new(dealer: Seat, flipped: Card, stick_the_dealer: bool) -> Self {
        Self {
            dealer,
            flipped,
            stick_the_dealer,
            stage: BiddingStage::Round1 {
                turn: hand_start_seat(dealer),
            },
            passed: Vec::with_capacity(PLAYERS),
            actions: 0,
            resolution: None,
        }
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn flipped(&self) -> Card {
        self.flipped
    }

    pub fn stage(&self) -> BiddingStage {
        self.stage
    }

    pub fn resolution(&self) -> Option<TrumpResolution> {
        self.resolution
    }

    /// Seats that passed in the current round.
    pub fn passed(&self) -> &[Seat] {
        &self.passed
    }

    /// Accepted bid actions so far.
    pub fn actions_taken(&self) -> usize {
        self.actions
    }

    /// 1 or 2 while bidding is open.
    pub fn round(&self) -> Option<u8> {
        match self.stage {
            BiddingStage::Round1 { .. } => Some(1),
            BiddingStage::Round2 { .. } | BiddingStage::StuckDealer => Some(2),
            BiddingStage::Resolved | BiddingStage::AllPassed => None,
        }
    }

    pub fn expected_bidder(&self) -> Option<Seat> {
        match self.stage {
            BiddingStage::Round1 { turn } | BiddingStage::Round2 { turn } => Some(turn),
            BiddingStage::StuckDealer => Some(self.dealer),
            BiddingStage::Resolved | BiddingStage::AllPassed => None,
        }
    }

    /// Every action the expected bidder may take.
    pub fn legal_bids(&self) -> Vec<BidAction> {
        let calls = || {
            Suit::ALL
                .into_iter()
                .filter(|&s| s != self.flipped.suit)
                .flat_map(|suit| {
                    [
                        BidAction::Call { suit, alone: false },
                        BidAction::Call { suit, alone: true },
                    ]
                })
        };
        match self.stage {
            BiddingStage::Round1 { .. } => vec![
                BidAction::Pass,
                BidAction::OrderUp { alone: false },
                BidAction::OrderUp { alone: true },
            ],
            BiddingStage::Round2 { .. } => std::iter::once(BidAction::Pass).chain(calls()).collect(),
            BiddingStage::StuckDealer => calls().collect(),
            BiddingStage::Resolved | BiddingStage::AllPassed => Vec::new(),
        }
    }

    /// Apply one bid. Rejected bids leave the machine unchanged.
    pub fn place_bid(&mut self, seat: Seat, action: BidAction) -> Result<BidOutcome, DomainError> {
        let Some(expected) = self.expected_bidder() else {
            return Err(DomainError::illegal_bid(
                BidViolation::PhaseMismatch,
                "bidding is closed",
            ));
        };
        if seat != expected {
            return Err(DomainError::illegal_bid(
                BidViolation::OutOfTurn,
                format!("expected {expected} to bid, got {seat}"),
            ));
        }

        let outcome = match (self.stage, action) {
            (BiddingStage::Round1 { .. }, BidAction::Pass) => {
                self.passed.push(seat);
                if self.passed.len() == PLAYERS {
                    self.passed.clear();
                    let first = hand_start_seat(self.dealer);
                    self.stage = BiddingStage::Round2 { turn: first };
                    BidOutcome::RoundTwo(first)
                } else {
                    let next = seat.next();
                    self.stage = BiddingStage::Round1 { turn: next };
                    BidOutcome::Next(next)
                }
            }
            (BiddingStage::Round1 { .. }, BidAction::OrderUp { alone }) => {
                self.resolve(seat, self.flipped.suit, alone, true)
            }
            (BiddingStage::Round1 { .. }, BidAction::Call { .. }) => {
                return Err(DomainError::illegal_bid(
                    BidViolation::WrongRound,
                    "only ordering up or passing is allowed in round 1",
                ));
            }
            (_, BidAction::OrderUp { .. }) => {
                return Err(DomainError::illegal_bid(
                    BidViolation::WrongRound,
                    "the flipped card was turned down; name a suit",
                ));
            }
            (_, BidAction::Call { suit, .. }) if suit == self.flipped.suit => {
                return Err(DomainError::illegal_bid(
                    BidViolation::FlippedSuitUnavailable,
                    format!("{suit} was turned down"),
                ));
            }
            (_, BidAction::Call { suit, alone }) => self.resolve(seat, suit, alone, false),
            (BiddingStage::StuckDealer, BidAction::Pass) => {
                return Err(DomainError::illegal_bid(
                    BidViolation::DealerMustCall,
                    "stuck dealer must name trump",
                ));
            }
            (_, BidAction::Pass) => {
                self.passed.push(seat);
                let next = seat.next();
                if next == self.dealer && self.stick_the_dealer {
                    self.stage = BiddingStage::StuckDealer;
                    BidOutcome::DealerStuck(self.dealer)
                } else if self.passed.len() == PLAYERS {
                    self.stage = BiddingStage::AllPassed;
                    BidOutcome::Redeal
                } else {
                    self.stage = BiddingStage::Round2 { turn: next };
                    BidOutcome::Next(next)
                }
            }
        };

        self.actions += 1;
        Ok(outcome)
    }

    fn resolve(&mut self, maker: Seat, trump: Suit, alone: bool, ordered_up: bool) -> BidOutcome {
        let resolution = TrumpResolution {
            trump,
            maker,
            alone,
            ordered_up,
        };
        self.stage = BiddingStage::Resolved;
        self.passed.clear();
        self.resolution = Some(resolution);
        BidOutcome::Resolved(resolution)
    }
}

/// Apply a bid to the game state, moving into discard or trick play once trump is fixed.
pub fn place_bid(
    state: &mut GameState,
    seat: Seat,
    action: BidAction,
) -> Result<BidOutcome, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::illegal_bid(
            BidViolation::PhaseMismatch,
            "not in bidding",
        ));
    }
    let bidding = state
        .bidding
        .as_mut()
        .ok_or_else(|| DomainError::invariant("bidding machine missing in Bidding phase"))?;

    let outcome = bidding.place_bid(seat, action)?;
    debug!(%seat, ?action, ?outcome, "bid accepted");

    match outcome {
        BidOutcome::Next(next) | BidOutcome::RoundTwo(next) | BidOutcome::DealerStuck(next) => {
            state.turn = Some(next);
        }
        BidOutcome::Resolved(resolution) => apply_resolution(state, resolution)?,
        BidOutcome::Redeal => {
            state.turn = None;
        }
    }
    Ok(outcome)
}

fn apply_resolution(state: &mut GameState, resolution: TrumpResolution) -> Result<(), DomainError> {
    let dealer = require_dealer(state, "apply_resolution")?;
    let lone = resolution.alone.then_some(resolution.maker);

    state.bidding = None;
    state.hand.trump = Some(resolution.trump);
    state.hand.maker = Some(resolution.maker);
    state.hand.lone = lone;
    state.hand.ordered_up = resolution.ordered_up;

    // A dealer sitting out for a lone partner leaves the card where it is.
    if resolution.ordered_up && sitting_out(lone) != Some(dealer) {
        let flipped = state
            .hand
            .flipped
            .take()
            .ok_or_else(|| DomainError::invariant("flipped card missing at pickup"))?;
        state.hand.hands[dealer.index()].push(flipped);
        state.phase = Phase::DealerDiscard;
        state.turn = Some(dealer);
        return Ok(());
    }

    start_trick_play(state, dealer);
    Ok(())
}

fn start_trick_play(state: &mut GameState, dealer: Seat) {
    let first = first_active_from(hand_start_seat(dealer), state.hand.lone);
    state.phase = Phase::Trick { trick_no: 1 };
    state.trick_no = Some(1);
    state.leader = Some(first);
    state.turn = Some(first);
}

/// Dealer buries one card after picking up the flipped card.
pub fn discard(state: &mut GameState, seat: Seat, card: Card) -> Result<(), DomainError> {
    if state.phase != Phase::DealerDiscard {
        return Err(DomainError::illegal_play(
            PlayViolation::PhaseMismatch,
            "no discard is pending",
        ));
    }
    let dealer = require_turn(state, "discard")?;
    if seat != dealer {
        return Err(DomainError::illegal_play(
            PlayViolation::OutOfTurn,
            format!("only the dealer ({dealer}) discards"),
        ));
    }
    let hand = &mut state.hand.hands[dealer.index()];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::illegal_play(
            PlayViolation::CardNotInHand,
            format!("{card} is not in the dealer's hand"),
        ));
    };
    hand.remove(pos);
    hand.sort();
    state.hand.kitty.push(card);
    debug!(%seat, %card, "dealer discarded");

    start_trick_play(state, dealer);
    state.hand.check_card_count()
}

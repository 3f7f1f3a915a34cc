use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Bidding;
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Table position. Clockwise order is South → West → North → East.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    South,
    West,
    North,
    East,
}

/// Partnerships: South/North against East/West.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    NorthSouth,
    EastWest,
}

impl Seat {
    /// All seats in clockwise order starting from South.
    pub const ALL: [Seat; PLAYERS] = [Seat::South, Seat::West, Seat::North, Seat::East];

    /// Array slot for per-seat tables (clockwise from South).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Seat::South => 0,
            Seat::West => 1,
            Seat::North => 2,
            Seat::East => 3,
        }
    }

    #[inline]
    pub fn from_index(i: usize) -> Seat {
        Seat::ALL[i % PLAYERS]
    }

    /// Returns the seat `delta` steps clockwise (negative is counter-clockwise).
    #[inline]
    pub fn offset(self, delta: i8) -> Seat {
        let i = (self.index() as i16 + delta as i16).rem_euclid(PLAYERS as i16);
        Seat::from_index(i as usize)
    }

    /// Next seat clockwise.
    #[inline]
    pub fn next(self) -> Seat {
        self.offset(1)
    }

    #[inline]
    pub fn partner(self) -> Seat {
        self.offset(2)
    }

    pub fn team(self) -> Team {
        match self {
            Seat::South | Seat::North => Team::NorthSouth,
            Seat::West | Seat::East => Team::EastWest,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Seat::South => "south",
            Seat::West => "west",
            Seat::North => "north",
            Seat::East => "east",
        };
        f.write_str(s)
    }
}

impl Team {
    pub const ALL: [Team; 2] = [Team::NorthSouth, Team::EastWest];

    pub fn index(self) -> usize {
        match self {
            Team::NorthSouth => 0,
            Team::EastWest => 1,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::NorthSouth => [Seat::South, Seat::North],
            Team::EastWest => [Seat::West, Seat::East],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::NorthSouth => f.write_str("north/south"),
            Team::EastWest => f.write_str("east/west"),
        }
    }
}

/// Seat that leads bidding and the first trick (left of the dealer).
#[inline]
pub fn hand_start_seat(dealer: Seat) -> Seat {
    dealer.next()
}

/// Seat sitting out this hand, if someone went alone.
#[inline]
pub fn sitting_out(lone: Option<Seat>) -> Option<Seat> {
    lone.map(Seat::partner)
}

/// Next seat clockwise that is in play, skipping a lone player's partner.
#[inline]
pub fn next_active_seat(seat: Seat, lone: Option<Seat>) -> Seat {
    let next = seat.next();
    if sitting_out(lone) == Some(next) {
        next.next()
    } else {
        next
    }
}

/// First active seat at or after `seat`, clockwise.
#[inline]
pub fn first_active_from(seat: Seat, lone: Option<Seat>) -> Seat {
    if sitting_out(lone) == Some(seat) {
        seat.next()
    } else {
        seat
    }
}

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Game created but no hand dealt yet.
    Init,
    /// Two-round trump bidding.
    Bidding,
    /// Dealer picked up the flipped card and owes a discard.
    DealerDiscard,
    /// Playing tricks within the hand; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All five tricks played; points not yet applied.
    Scoring,
    /// Hand scored, next deal pending.
    HandComplete,
    /// A team reached the winning score.
    GameOver,
}

/// Per-hand state: everything recreated on each deal.
#[derive(Debug, Clone, Default)]
pub struct HandState {
    /// Cards held, indexed by `Seat::index()`.
    pub hands: [Vec<Card>; PLAYERS],
    /// Undealt cards, plus the dealer's buried discard after a pickup.
    pub kitty: Vec<Card>,
    /// Card turned up for round-one bidding; `None` once the dealer picked it up.
    pub flipped: Option<Card>,
    /// The card turned up at the deal, kept after pickup for the record.
    pub upcard: Option<Card>,
    /// Trump once bidding resolved.
    pub trump: Option<Suit>,
    /// Seat that set trump.
    pub maker: Option<Seat>,
    /// Seat playing alone, if any.
    pub lone: Option<Seat>,
    /// True when trump came from a round-one order-up.
    pub ordered_up: bool,
    /// Ordered plays for the current trick.
    pub trick_plays: Vec<(Seat, Card)>,
    /// Tricks won per seat this hand.
    pub tricks_won: [u8; PLAYERS],
    /// Completed tricks, oldest first.
    pub completed_tricks: Vec<CompletedTrick>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    pub plays: Vec<(Seat, Card)>,
    pub winner: Seat,
}

impl HandState {
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Cards already played this hand, including the trick in progress.
    pub fn played_count(&self) -> usize {
        self.completed_tricks
            .iter()
            .map(|t| t.plays.len())
            .sum::<usize>()
            + self.trick_plays.len()
    }

    /// Every card this hand accounts for: hands, kitty, flipped card, played cards.
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Vec::len).sum::<usize>()
            + self.kitty.len()
            + usize::from(self.flipped.is_some())
            + self.played_count()
    }

    /// Number of plays a complete trick has this hand.
    pub fn trick_len(&self) -> usize {
        if self.lone.is_some() {
            PLAYERS - 1
        } else {
            PLAYERS
        }
    }

    pub fn check_card_count(&self) -> Result<(), DomainError> {
        let n = self.card_count();
        if n != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "card count {n} != {DECK_SIZE}"
            )));
        }
        Ok(())
    }

    pub fn team_tricks(&self, team: Team) -> u8 {
        team.seats().iter().map(|s| self.tricks_won[s.index()]).sum()
    }
}

/// Entire game container, owned by the game controller.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Hands dealt so far in this game (1-based once dealing starts).
    pub hand_no: u32,
    /// Dealer for the current hand.
    /// - None in Init.
    pub dealer: Option<Seat>,
    /// Seat whose turn it is to act.
    /// - Some(seat) when someone is expected to act
    /// - None when nobody can act (Init, Scoring, HandComplete, GameOver)
    pub turn: Option<Seat>,
    /// Seat that leads the current trick (only meaningful in Trick phase).
    pub leader: Option<Seat>,
    /// Current trick number (1-based) within the hand (only meaningful in Trick phase).
    pub trick_no: Option<u8>,
    /// Cumulative scores per team, indexed by `Team::index()`.
    pub scores: [u8; 2],
    /// Bidding machine; present from the deal until trump is resolved.
    pub bidding: Option<Bidding>,
    /// Per-hand container.
    pub hand: HandState,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            hand_no: 0,
            dealer: None,
            turn: None,
            leader: None,
            trick_no: None,
            scores: [0; 2],
            bidding: None,
            hand: HandState::default(),
        }
    }

    pub fn score(&self, team: Team) -> u8 {
        self.scores[team.index()]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn require_dealer(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .dealer
        .ok_or_else(|| DomainError::invariant(format!("dealer must be set ({ctx})")))
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Suit, DomainError> {
    state
        .hand
        .trump
        .ok_or_else(|| DomainError::invariant(format!("trump must be set ({ctx})")))
}

pub fn require_trick_no(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state
        .trick_no
        .ok_or_else(|| DomainError::invariant(format!("trick_no must be set ({ctx})")))
}

pub fn require_maker(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .hand
        .maker
        .ok_or_else(|| DomainError::invariant(format!("maker must be set ({ctx})")))
}

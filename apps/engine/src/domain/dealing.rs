//! Deck construction, shuffling and dealing.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::state::{hand_start_seat, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate the 24-card euchre deck in canonical order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by the caller's RNG.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Build a fresh deck and shuffle it.
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    shuffle(&mut deck, rng);
    deck
}

/// How the five cards per seat are split across the two dealing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealPattern {
    ThreeTwo,
    TwoThree,
}

impl DealPattern {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            DealPattern::ThreeTwo
        } else {
            DealPattern::TwoThree
        }
    }

    fn first_pass(self) -> usize {
        match self {
            DealPattern::ThreeTwo => 3,
            DealPattern::TwoThree => 2,
        }
    }
}

/// Result of one deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Hands indexed by `Seat::index()`, sorted for display stability.
    pub hands: [Vec<Card>; PLAYERS],
    pub flipped: Card,
    pub kitty: Vec<Card>,
}

/// Verify the deck is exactly the 24 unique euchre cards.
pub fn validate_deck(deck: &[Card]) -> Result<(), DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "deck has {} cards, expected {DECK_SIZE}",
            deck.len()
        )));
    }
    let unique: HashSet<Card> = deck.iter().copied().collect();
    if unique.len() != DECK_SIZE {
        return Err(DomainError::invariant("deck contains duplicate cards"));
    }
    Ok(())
}

/// Deal five cards to each seat, starting left of the dealer, in two passes.
///
/// The card after the last dealt card is turned up; the rest is the kitty.
pub fn deal(deck: Vec<Card>, dealer: Seat, pattern: DealPattern) -> Result<Deal, DomainError> {
    validate_deck(&deck)?;

    let mut cards = deck.into_iter();
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    let first = pattern.first_pass();

    for batch in [first, HAND_SIZE - first] {
        let mut seat = hand_start_seat(dealer);
        for _ in 0..PLAYERS {
            hands[seat.index()].extend(cards.by_ref().take(batch));
            seat = seat.next();
        }
    }

    let flipped = cards
        .next()
        .ok_or_else(|| DomainError::invariant("deck exhausted before flipping"))?;
    let kitty: Vec<Card> = cards.collect();

    for hand in hands.iter_mut() {
        hand.sort();
    }

    Ok(Deal {
        hands,
        flipped,
        kitty,
    })
}

/// Shuffle, pick a pass pattern and deal.
pub fn deal_with_rng<R: Rng + ?Sized>(rng: &mut R, dealer: Seat) -> Result<Deal, DomainError> {
    let deck = create_shuffled_deck(rng);
    let pattern = DealPattern::random(rng);
    deal(deck, dealer, pattern)
}

// Proptest generators for domain types.
// Card sets are drawn from the 24-card deck without replacement.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ace),
    ]
}

pub fn seat() -> impl Strategy<Value = Seat> {
    prop_oneof![
        Just(Seat::South),
        Just(Seat::West),
        Just(Seat::North),
        Just(Seat::East),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `count` distinct cards from the euchre deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all = full_deck();
        for i in 0..count.min(all.len()) {
            let j = rng.random_range(i..all.len());
            all.swap(i, j);
        }
        all.truncate(count);
        all
    })
}

/// A shuffled permutation of the whole deck.
pub fn shuffled_deck() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(full_deck().len())
}

/// Hand of 1..=5 cards.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=5).prop_flat_map(unique_cards)
}

/// A complete trick of `len` plays, clockwise from a random leader.
pub fn complete_trick(len: usize) -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (seat(), unique_cards(len)).prop_map(|(leader, cards)| {
        let mut seat = leader;
        cards
            .into_iter()
            .map(|c| {
                let play = (seat, c);
                seat = seat.next();
                play
            })
            .collect()
    })
}

/// A lead card plus a disjoint hand of 1..=5 cards.
pub fn lead_and_hand() -> impl Strategy<Value = (Card, Vec<Card>)> {
    (2usize..=6).prop_flat_map(unique_cards).prop_map(|mut cards| {
        let lead = cards.remove(0);
        (lead, cards)
    })
}

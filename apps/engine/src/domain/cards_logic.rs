//! Card game logic: bowers, effective suits, follow rules and in-trick ranking

use super::cards_types::{Card, Rank, Suit};
use crate::domain::state::Seat;

pub fn is_right_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump
}

pub fn is_left_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump.same_color()
}

/// Suit a card counts as for following and ranking. Both bowers are trump.
pub fn effective_suit(card: Card, trump: Suit) -> Suit {
    if is_left_bower(card, trump) {
        trump
    } else {
        card.suit
    }
}

pub fn is_trump(card: Card, trump: Suit) -> bool {
    effective_suit(card, trump) == trump
}

/// True iff any card in the hand has the given effective suit.
pub fn can_follow(hand: &[Card], lead: Suit, trump: Suit) -> bool {
    hand.iter().any(|&c| effective_suit(c, trump) == lead)
}

/// Whether `card` may be played from `hand` onto `trick`.
///
/// Leading allows anything. Otherwise the card must match the effective suit
/// of the led card, unless the hand holds none of that suit.
pub fn is_legal(card: Card, hand: &[Card], trick: &[(Seat, Card)], trump: Suit) -> bool {
    let Some(&(_, led)) = trick.first() else {
        return true;
    };
    let lead = effective_suit(led, trump);
    effective_suit(card, trump) == lead || !can_follow(hand, lead, trump)
}

fn plain_rank_value(rank: Rank) -> u8 {
    match rank {
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
    }
}

/// Ranking used only to compare cards within one trick.
///
/// Right bower 30, left bower 29, other trump 24..=28 (9..A), cards of the
/// lead suit 9..=14 by rank, anything else 0.
pub fn card_value(card: Card, trump: Suit, lead: Suit) -> u8 {
    if is_right_bower(card, trump) {
        return 30;
    }
    if is_left_bower(card, trump) {
        return 29;
    }
    if card.suit == trump {
        // Jack of trump is the right bower, so trump ranks run 9,10,Q,K,A.
        return match card.rank {
            Rank::Nine => 24,
            Rank::Ten => 25,
            Rank::Queen => 26,
            Rank::King => 27,
            Rank::Ace => 28,
            Rank::Jack => 30,
        };
    }
    if card.suit == lead {
        return plain_rank_value(card.rank);
    }
    0
}

/// Strength of a card held in hand, with no trick in progress.
///
/// Trump cards rank as in a trick; other cards rank as if their own suit were led.
pub fn hand_value(card: Card, trump: Suit) -> u8 {
    card_value(card, trump, effective_suit(card, trump))
}

/// Whether `a` beats `b` within a trick led in `lead`.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    card_value(a, trump, lead) > card_value(b, trump, lead)
}

//! Stateless decision functions behind the difficulty-scaled AI.
//!
//! Every function takes the view it decides on and the game RNG; nothing here
//! touches `GameState`.

use rand::{Rng, RngCore};

use crate::ai::difficulty::{DifficultyProfile, SeatRole};
use crate::domain::cards_logic::{card_value, hand_value, is_trump};
use crate::domain::{BidAction, BidView, Card, PlayView, Suit};

fn draw_alone(profile: &DifficultyProfile, role: SeatRole, rng: &mut dyn RngCore) -> bool {
    rng.random_bool(profile.alone_chance(role))
}

/// Accept or pass, then maybe go alone.
///
/// Round one orders up with `order_up_chance`. Round two calls
/// [`best_call_suit`] with `call_chance`; a stuck dealer always calls.
pub fn decide_bid(
    view: &BidView,
    profile: &DifficultyProfile,
    role: SeatRole,
    rng: &mut dyn RngCore,
) -> BidAction {
    if view.round == 1 {
        if rng.random_bool(profile.order_up_chance) {
            return BidAction::OrderUp {
                alone: draw_alone(profile, role, rng),
            };
        }
        return BidAction::Pass;
    }

    if view.stuck || rng.random_bool(profile.call_chance) {
        BidAction::Call {
            suit: best_call_suit(&view.hand, view.flipped.suit),
            alone: draw_alone(profile, role, rng),
        }
    } else {
        BidAction::Pass
    }
}

/// Total in-hand strength of the cards that would be trump under `trump`.
pub fn trump_strength(hand: &[Card], trump: Suit) -> u32 {
    hand.iter()
        .filter(|&&c| is_trump(c, trump))
        .map(|&c| u32::from(hand_value(c, trump)))
        .sum()
}

/// Non-flipped suit with the strongest trump holding. Ties go to the earlier suit.
pub fn best_call_suit(hand: &[Card], flipped: Suit) -> Suit {
    let mut best: Option<(Suit, u32)> = None;
    for suit in Suit::ALL.into_iter().filter(|&s| s != flipped) {
        let strength = trump_strength(hand, suit);
        match best {
            Some((_, b)) if b >= strength => {}
            _ => best = Some((suit, strength)),
        }
    }
    best.map_or(flipped.same_color(), |(s, _)| s)
}

/// Card to play, or `None` when nothing is legal.
///
/// Leading: a card of middling strength. Following: the lowest legal card,
/// except that with probability `play_skill` the cheapest winning card is
/// played when the partner is not already winning.
pub fn decide_play(
    view: &PlayView,
    profile: &DifficultyProfile,
    rng: &mut dyn RngCore,
) -> Option<Card> {
    if view.legal.is_empty() {
        return None;
    }
    let trump = view.trump;

    let Some(&(_, led)) = view.trick.first() else {
        let mut by_strength = view.legal.clone();
        by_strength.sort_by_key(|&c| (hand_value(c, trump), c));
        return by_strength.get(by_strength.len() / 2).copied();
    };
    let lead = led.suit;
    let value = |c: Card| card_value(c, trump, lead);

    let lowest = view
        .legal
        .iter()
        .copied()
        .min_by_key(|&c| (value(c), hand_value(c, trump), c));

    let partner_winning = view.current_winner() == Some(view.seat.partner());
    if partner_winning || !rng.random_bool(profile.play_skill) {
        return lowest;
    }

    let best_so_far = view.trick.iter().map(|&(_, c)| value(c)).max().unwrap_or(0);
    view.legal
        .iter()
        .copied()
        .filter(|&c| value(c) > best_so_far)
        .min_by_key(|&c| (value(c), c))
        .or(lowest)
}

/// Card the dealer buries after a pickup: the weakest non-trump card, or the
/// weakest trump when holding nothing else.
pub fn decide_discard(hand: &[Card], trump: Suit) -> Option<Card> {
    let key = |c: &Card| (hand_value(*c, trump), *c);
    hand.iter()
        .copied()
        .filter(|&c| !is_trump(c, trump))
        .min_by_key(key)
        .or_else(|| hand.iter().copied().min_by_key(key))
}

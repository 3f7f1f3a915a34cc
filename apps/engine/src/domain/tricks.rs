use tracing::debug;

use crate::domain::cards_logic::{card_value, is_legal};
use crate::domain::rules::{PLAYERS, TRICKS_PER_HAND};
use crate::domain::state::{
    next_active_seat, require_trick_no, require_trump, require_turn, sitting_out, CompletedTrick,
    GameState, HandState, Phase, Seat,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, PlayViolation};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Trick number after this play (incremented when a trick completed).
    pub trick_no_after: u8,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
}

/// Legal cards for `seat`, independent of turn enforcement. Sorted.
pub fn legal_moves(state: &GameState, seat: Seat) -> Vec<Card> {
    let Phase::Trick { .. } = state.phase else {
        return Vec::new();
    };
    let Some(trump) = state.hand.trump else {
        return Vec::new();
    };
    if sitting_out(state.hand.lone) == Some(seat) {
        return Vec::new();
    }

    let hand = state.hand.hand(seat);
    let mut legal: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| is_legal(c, hand, &state.hand.trick_plays, trump))
        .collect();
    legal.sort();
    legal
}

/// Winner of a complete trick.
///
/// The lead is the raw suit of the first card. A led left bower still wins on
/// its trump rank, so this picks the same winner as leading its effective suit.
pub fn evaluate_trick(trick: &[(Seat, Card)], trump: Suit) -> Result<Seat, DomainError> {
    if !(PLAYERS - 1..=PLAYERS).contains(&trick.len()) {
        return Err(DomainError::invariant(format!(
            "trick has {} plays",
            trick.len()
        )));
    }
    let lead = trick[0].1.suit;
    trick
        .iter()
        .max_by_key(|(_, c)| card_value(*c, trump, lead))
        .map(|&(seat, _)| seat)
        .ok_or_else(|| DomainError::invariant("empty trick"))
}

/// Resolve the trick in progress if it holds a play from every active seat.
pub fn resolve_current_trick(hand: &HandState) -> Result<Option<Seat>, DomainError> {
    if hand.trick_plays.len() < hand.trick_len() {
        return Ok(None);
    }
    if hand.trick_plays.len() > hand.trick_len() {
        return Err(DomainError::invariant(format!(
            "trick has {} plays, expected {}",
            hand.trick_plays.len(),
            hand.trick_len()
        )));
    }
    let trump = hand
        .trump
        .ok_or_else(|| DomainError::invariant("trump must be set (resolve_current_trick)"))?;
    evaluate_trick(&hand.trick_plays, trump).map(Some)
}

/// Play a card into the current trick, enforcing phase, turn and suit following.
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let Phase::Trick {
        trick_no: trick_no_phase,
    } = state.phase
    else {
        return Err(DomainError::illegal_play(
            PlayViolation::PhaseMismatch,
            "not in trick play",
        ));
    };

    let trick_no_before = require_trick_no(state, "play_card")?;
    if trick_no_before != trick_no_phase {
        return Err(DomainError::invariant(
            "state.trick_no must match Phase::Trick.trick_no",
        ));
    }
    let trump = require_trump(state, "play_card")?;

    if sitting_out(state.hand.lone) == Some(seat) {
        return Err(DomainError::illegal_play(
            PlayViolation::SittingOut,
            format!("{seat} sits out this hand"),
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if turn != seat {
        return Err(DomainError::illegal_play(
            PlayViolation::OutOfTurn,
            format!("expected {turn} to play, got {seat}"),
        ));
    }

    let Some(pos) = state.hand.hand(seat).iter().position(|&c| c == card) else {
        return Err(DomainError::illegal_play(
            PlayViolation::CardNotInHand,
            format!("{card} is not in {seat}'s hand"),
        ));
    };

    if !is_legal(card, state.hand.hand(seat), &state.hand.trick_plays, trump) {
        return Err(DomainError::illegal_play(
            PlayViolation::MustFollowSuit,
            format!("{seat} must follow the lead"),
        ));
    }

    if state.hand.trick_plays.is_empty() {
        state.leader = Some(seat);
    }
    let removed = state.hand.hands[seat.index()].remove(pos);
    state.hand.trick_plays.push((seat, removed));
    state.turn = Some(next_active_seat(seat, state.hand.lone));
    debug!(%seat, card = %removed, trick_no = trick_no_before, "card played");

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_no_after: trick_no_before,
        phase_transitioned: None,
    };

    let Some(winner) = resolve_current_trick(&state.hand)? else {
        return Ok(result);
    };

    state.hand.tricks_won[winner.index()] += 1;
    let plays = std::mem::take(&mut state.hand.trick_plays);
    state
        .hand
        .completed_tricks
        .push(CompletedTrick { plays, winner });
    result.trick_completed = true;
    result.trick_winner = Some(winner);
    debug!(%winner, trick_no = trick_no_before, "trick complete");

    let next_trick_no = trick_no_before.saturating_add(1);
    result.trick_no_after = next_trick_no;

    if next_trick_no > TRICKS_PER_HAND {
        state.phase = Phase::Scoring;
        state.turn = None;
        state.leader = None;
        state.trick_no = None;
        result.phase_transitioned = Some(Phase::Scoring);
        state.hand.check_card_count()?;
        return Ok(result);
    }

    state.leader = Some(winner);
    state.turn = Some(winner);
    state.trick_no = Some(next_trick_no);
    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };
    Ok(result)
}

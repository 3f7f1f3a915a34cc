use crate::domain::cards_parsing::{card, parse_cards};
use crate::domain::state::{Phase, Seat};
use crate::domain::test_state_helpers::trick_state;
use crate::domain::tricks::{evaluate_trick, legal_moves, play_card};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, PlayViolation};

fn plays(tokens: &[(Seat, &str)]) -> Vec<(Seat, Card)> {
    tokens.iter().map(|&(s, t)| (s, card(t))).collect()
}

fn play_violation(err: DomainError) -> PlayViolation {
    match err {
        DomainError::IllegalPlay(kind, _) => kind,
        other => panic!("expected IllegalPlay, got {other:?}"),
    }
}

#[test]
fn right_bower_beats_everything() {
    let trick = plays(&[
        (Seat::South, "AH"),
        (Seat::West, "JD"),
        (Seat::North, "JH"),
        (Seat::East, "KH"),
    ]);
    assert_eq!(evaluate_trick(&trick, Suit::Hearts).unwrap(), Seat::North);
}

#[test]
fn left_bower_beats_trump_ace() {
    let trick = plays(&[
        (Seat::South, "AH"),
        (Seat::West, "JD"),
        (Seat::North, "KH"),
        (Seat::East, "QH"),
    ]);
    assert_eq!(evaluate_trick(&trick, Suit::Hearts).unwrap(), Seat::West);
}

#[test]
fn led_left_bower_wins_over_its_printed_suit() {
    // Diamonds ace is off-suit for a hearts-trump trick led by the left bower.
    let trick = plays(&[
        (Seat::South, "JD"),
        (Seat::West, "AD"),
        (Seat::North, "AH"),
        (Seat::East, "9C"),
    ]);
    assert_eq!(evaluate_trick(&trick, Suit::Hearts).unwrap(), Seat::South);
}

#[test]
fn off_suit_cannot_win_without_trump() {
    let trick = plays(&[
        (Seat::West, "9S"),
        (Seat::North, "AC"),
        (Seat::East, "TS"),
        (Seat::South, "AD"),
    ]);
    assert_eq!(evaluate_trick(&trick, Suit::Hearts).unwrap(), Seat::East);
}

#[test]
fn lone_trick_has_three_plays() {
    let trick = plays(&[(Seat::West, "9S"), (Seat::North, "9H"), (Seat::East, "AS")]);
    assert_eq!(evaluate_trick(&trick, Suit::Hearts).unwrap(), Seat::North);

    let short = plays(&[(Seat::West, "9S"), (Seat::North, "9H")]);
    assert!(matches!(
        evaluate_trick(&short, Suit::Hearts),
        Err(DomainError::InvariantViolation(_))
    ));
}

fn hands() -> [Vec<Card>; 4] {
    [
        parse_cards(&["JH", "AH", "KS", "QS", "9C"]),
        parse_cards(&["TH", "AS", "TS", "AC", "KC"]),
        parse_cards(&["QH", "JS", "9S", "QC", "TC"]),
        parse_cards(&["KH", "JD", "AD", "KD", "QD"]),
    ]
}

#[test]
fn must_follow_effective_suit() {
    let mut state = trick_state(hands(), Suit::Hearts, Seat::South, None, Seat::South);
    play_card(&mut state, Seat::South, card("AH")).unwrap();

    // West holds TH and must play it.
    assert_eq!(legal_moves(&state, Seat::West), vec![card("TH")]);
    let err = play_card(&mut state, Seat::West, card("AS")).unwrap_err();
    assert_eq!(play_violation(err), PlayViolation::MustFollowSuit);
    play_card(&mut state, Seat::West, card("TH")).unwrap();

    play_card(&mut state, Seat::North, card("QH")).unwrap();
    // East's JD is the left bower and therefore a heart.
    let legal = legal_moves(&state, Seat::East);
    assert!(legal.contains(&card("JD")));
    assert!(legal.contains(&card("KH")));
    assert!(!legal.contains(&card("AD")));
}

#[test]
fn completed_trick_moves_lead_to_winner() {
    let mut state = trick_state(hands(), Suit::Hearts, Seat::South, None, Seat::South);
    for (seat, tok) in [
        (Seat::South, "KS"),
        (Seat::West, "AS"),
        (Seat::North, "9S"),
    ] {
        let r = play_card(&mut state, seat, card(tok)).unwrap();
        assert!(!r.trick_completed);
    }
    let r = play_card(&mut state, Seat::East, card("KH")).unwrap();
    assert!(r.trick_completed);
    assert_eq!(r.trick_winner, Some(Seat::East));
    assert_eq!(r.trick_no_after, 2);
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
    assert_eq!(state.turn, Some(Seat::East));
    assert_eq!(state.hand.tricks_won[Seat::East.index()], 1);
    assert!(state.hand.trick_plays.is_empty());
    assert_eq!(state.hand.completed_tricks.len(), 1);
}

#[test]
fn rejects_out_of_turn_missing_card_and_sitting_out() {
    let mut state = trick_state(
        hands(),
        Suit::Hearts,
        Seat::North,
        Some(Seat::North),
        Seat::West,
    );
    let err = play_card(&mut state, Seat::South, card("JH")).unwrap_err();
    assert_eq!(play_violation(err), PlayViolation::SittingOut);
    assert!(legal_moves(&state, Seat::South).is_empty());

    let err = play_card(&mut state, Seat::North, card("QH")).unwrap_err();
    assert_eq!(play_violation(err), PlayViolation::OutOfTurn);

    let err = play_card(&mut state, Seat::West, card("JH")).unwrap_err();
    assert_eq!(play_violation(err), PlayViolation::CardNotInHand);
    assert_eq!(state.hand.hand(Seat::West).len(), 5);
}

#[test]
fn lone_hand_skips_partner_and_reaches_scoring() {
    // North alone in hearts; South sits out. West leads.
    let mut state = trick_state(
        hands(),
        Suit::Hearts,
        Seat::North,
        Some(Seat::North),
        Seat::West,
    );
    let mut last = None;
    for _ in 0..5 {
        for _ in 0..3 {
            let seat = state.turn.unwrap();
            assert_ne!(seat, Seat::South);
            let c = legal_moves(&state, seat)[0];
            last = Some(play_card(&mut state, seat, c).unwrap());
        }
    }
    let last = last.unwrap();
    assert_eq!(last.phase_transitioned, Some(Phase::Scoring));
    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.turn, None);
    assert_eq!(state.hand.tricks_won.iter().sum::<u8>(), 5);
    assert_eq!(state.hand.tricks_won[Seat::South.index()], 0);
    assert_eq!(state.hand.hand(Seat::South).len(), 5);
    state.hand.check_card_count().unwrap();
}

#[test]
fn play_outside_trick_phase_is_rejected() {
    let mut state = trick_state(hands(), Suit::Hearts, Seat::South, None, Seat::South);
    state.phase = Phase::Scoring;
    let err = play_card(&mut state, Seat::South, card("JH")).unwrap_err();
    assert_eq!(play_violation(err), PlayViolation::PhaseMismatch);
    assert!(legal_moves(&state, Seat::South).is_empty());
}

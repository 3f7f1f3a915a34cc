use crate::domain::bidding::{
    discard, is_assist, place_bid, BidAction, BidOutcome, Bidding, BiddingStage,
};
use crate::domain::cards_parsing::{card, parse_cards};
use crate::domain::state::{Phase, Seat};
use crate::domain::test_state_helpers::bidding_state;
use crate::domain::Suit;
use crate::errors::domain::{BidViolation, DomainError, PlayViolation};

fn pass_n(bidding: &mut Bidding, n: usize) {
    for _ in 0..n {
        let seat = bidding.expected_bidder().unwrap();
        bidding.place_bid(seat, BidAction::Pass).unwrap();
    }
}

fn bid_violation(err: DomainError) -> BidViolation {
    match err {
        DomainError::IllegalBid(kind, _) => kind,
        other => panic!("expected IllegalBid, got {other:?}"),
    }
}

/// Hands for dealer East with the nine of hearts turned up.
fn sample_hands() -> [Vec<crate::domain::Card>; 4] {
    [
        parse_cards(&["JH", "AH", "KS", "QS", "9C"]),
        parse_cards(&["TH", "AS", "TS", "AC", "KC"]),
        parse_cards(&["QH", "JS", "9S", "QC", "TC"]),
        parse_cards(&["KH", "JD", "AD", "KD", "QD"]),
    ]
}

#[test]
fn round_one_starts_left_of_dealer() {
    let bidding = Bidding::new(Seat::East, card("9H"), true);
    assert_eq!(bidding.expected_bidder(), Some(Seat::South));
    assert_eq!(bidding.round(), Some(1));
    assert_eq!(
        bidding.legal_bids(),
        vec![
            BidAction::Pass,
            BidAction::OrderUp { alone: false },
            BidAction::OrderUp { alone: true },
        ]
    );
}

#[test]
fn order_up_resolves_to_flipped_suit() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), true);
    pass_n(&mut bidding, 1);
    let outcome = bidding
        .place_bid(Seat::West, BidAction::OrderUp { alone: false })
        .unwrap();
    let BidOutcome::Resolved(res) = outcome else {
        panic!("expected resolution, got {outcome:?}");
    };
    assert_eq!(res.trump, Suit::Hearts);
    assert_eq!(res.maker, Seat::West);
    assert!(res.ordered_up);
    assert!(!res.alone);
    assert_eq!(bidding.stage(), BiddingStage::Resolved);
    assert_eq!(bidding.actions_taken(), 2);
    assert!(is_assist(Seat::West, Seat::East));
    assert!(!is_assist(Seat::South, Seat::East));
}

#[test]
fn four_passes_open_round_two_in_same_order() {
    let mut bidding = Bidding::new(Seat::North, card("9H"), true);
    for expected in [Seat::East, Seat::South, Seat::West] {
        assert_eq!(
            bidding.place_bid(expected, BidAction::Pass).unwrap(),
            BidOutcome::Next(expected.next())
        );
    }
    assert_eq!(bidding.passed().len(), 3);
    assert_eq!(
        bidding.place_bid(Seat::North, BidAction::Pass).unwrap(),
        BidOutcome::RoundTwo(Seat::East)
    );
    assert_eq!(bidding.round(), Some(2));
    assert!(bidding.passed().is_empty());

    let legal = bidding.legal_bids();
    assert_eq!(legal.len(), 7);
    assert!(!legal.contains(&BidAction::Call {
        suit: Suit::Hearts,
        alone: false
    }));
}

#[test]
fn flipped_suit_cannot_be_called_in_round_two() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), true);
    pass_n(&mut bidding, 4);
    let err = bidding
        .place_bid(
            Seat::South,
            BidAction::Call {
                suit: Suit::Hearts,
                alone: false,
            },
        )
        .unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::FlippedSuitUnavailable);
    // Rejected bid leaves the machine untouched.
    assert_eq!(bidding.expected_bidder(), Some(Seat::South));
    assert_eq!(bidding.actions_taken(), 4);
}

#[test]
fn wrong_action_for_round_is_rejected() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), true);
    let err = bidding
        .place_bid(
            Seat::South,
            BidAction::Call {
                suit: Suit::Spades,
                alone: false,
            },
        )
        .unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::WrongRound);

    pass_n(&mut bidding, 4);
    let err = bidding
        .place_bid(Seat::South, BidAction::OrderUp { alone: false })
        .unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::WrongRound);
}

#[test]
fn out_of_turn_bid_is_rejected() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), true);
    let err = bidding.place_bid(Seat::North, BidAction::Pass).unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::OutOfTurn);
}

#[test]
fn stuck_dealer_must_call_within_eight_actions() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), true);
    pass_n(&mut bidding, 4);
    pass_n(&mut bidding, 2);
    assert_eq!(
        bidding.place_bid(Seat::North, BidAction::Pass).unwrap(),
        BidOutcome::DealerStuck(Seat::East)
    );
    assert_eq!(bidding.stage(), BiddingStage::StuckDealer);
    assert!(!bidding.legal_bids().contains(&BidAction::Pass));

    let err = bidding.place_bid(Seat::East, BidAction::Pass).unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::DealerMustCall);

    let outcome = bidding
        .place_bid(
            Seat::East,
            BidAction::Call {
                suit: Suit::Clubs,
                alone: false,
            },
        )
        .unwrap();
    assert!(matches!(outcome, BidOutcome::Resolved(r) if r.maker == Seat::East && !r.ordered_up));
    assert_eq!(bidding.actions_taken(), 8);
}

#[test]
fn without_stick_the_dealer_all_pass_redeals() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), false);
    pass_n(&mut bidding, 7);
    assert_eq!(bidding.expected_bidder(), Some(Seat::East));
    assert_eq!(
        bidding.place_bid(Seat::East, BidAction::Pass).unwrap(),
        BidOutcome::Redeal
    );
    assert_eq!(bidding.stage(), BiddingStage::AllPassed);
    assert_eq!(bidding.expected_bidder(), None);
}

#[test]
fn bid_after_resolution_is_rejected() {
    let mut bidding = Bidding::new(Seat::East, card("9H"), true);
    bidding
        .place_bid(Seat::South, BidAction::OrderUp { alone: true })
        .unwrap();
    let err = bidding.place_bid(Seat::West, BidAction::Pass).unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::PhaseMismatch);
}

#[test]
fn order_up_moves_flipped_card_to_dealer_then_discard_starts_play() {
    let mut state = bidding_state(sample_hands(), card("9H"), Seat::East);
    state.hand.check_card_count().unwrap();

    place_bid(&mut state, Seat::South, BidAction::OrderUp { alone: false }).unwrap();
    assert_eq!(state.phase, Phase::DealerDiscard);
    assert_eq!(state.turn, Some(Seat::East));
    assert_eq!(state.hand.trump, Some(Suit::Hearts));
    assert_eq!(state.hand.flipped, None);
    assert_eq!(state.hand.hand(Seat::East).len(), 6);
    assert!(state.bidding.is_none());
    state.hand.check_card_count().unwrap();

    // Only the dealer discards, and only a held card.
    let err = discard(&mut state, Seat::South, card("JH")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::OutOfTurn, _)
    ));
    let err = discard(&mut state, Seat::East, card("AS")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::CardNotInHand, _)
    ));

    discard(&mut state, Seat::East, card("QD")).unwrap();
    assert_eq!(state.hand.hand(Seat::East).len(), 5);
    assert!(state.hand.kitty.contains(&card("QD")));
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.turn, Some(Seat::South));
    state.hand.check_card_count().unwrap();
}

#[test]
fn round_two_call_skips_pickup() {
    let mut state = bidding_state(sample_hands(), card("9H"), Seat::East);
    for seat in [Seat::South, Seat::West, Seat::North, Seat::East] {
        place_bid(&mut state, seat, BidAction::Pass).unwrap();
    }
    assert_eq!(state.turn, Some(Seat::South));
    place_bid(
        &mut state,
        Seat::South,
        BidAction::Call {
            suit: Suit::Spades,
            alone: false,
        },
    )
    .unwrap();
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.hand.trump, Some(Suit::Spades));
    assert_eq!(state.hand.flipped, Some(card("9H")));
    assert!(!state.hand.ordered_up);
    state.hand.check_card_count().unwrap();
}

#[test]
fn lone_maker_with_dealer_partner_leaves_flipped_card() {
    // Dealer East; West orders up alone so East sits out.
    let mut state = bidding_state(sample_hands(), card("9H"), Seat::East);
    place_bid(&mut state, Seat::South, BidAction::Pass).unwrap();
    place_bid(&mut state, Seat::West, BidAction::OrderUp { alone: true }).unwrap();

    assert_eq!(state.hand.lone, Some(Seat::West));
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.hand.hand(Seat::East).len(), 5);
    assert_eq!(state.hand.flipped, Some(card("9H")));
    assert!(state.hand.ordered_up);
    assert_eq!(state.turn, Some(Seat::South));
    assert_eq!(state.hand.trick_len(), 3);
    state.hand.check_card_count().unwrap();
}

#[test]
fn lone_maker_skips_sitting_out_first_seat() {
    // Dealer East; North alone means South, who would lead, sits out.
    let mut state = bidding_state(sample_hands(), card("9H"), Seat::East);
    place_bid(&mut state, Seat::South, BidAction::Pass).unwrap();
    place_bid(&mut state, Seat::West, BidAction::Pass).unwrap();
    place_bid(&mut state, Seat::North, BidAction::OrderUp { alone: true }).unwrap();
    assert_eq!(state.phase, Phase::DealerDiscard);
    discard(&mut state, Seat::East, card("9H")).unwrap();
    assert_eq!(state.turn, Some(Seat::West));
}

#[test]
fn state_bid_outside_bidding_is_phase_mismatch() {
    let mut state = bidding_state(sample_hands(), card("9H"), Seat::East);
    state.phase = Phase::HandComplete;
    let err = place_bid(&mut state, Seat::South, BidAction::Pass).unwrap_err();
    assert_eq!(bid_violation(err), BidViolation::PhaseMismatch);
}

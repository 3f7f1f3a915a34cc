// Unit tests for reason-code mapping - pure domain logic
use crate::errors::domain::{BidViolation, DomainError, PlayViolation};
use crate::errors::ErrorCode;

#[test]
fn maps_illegal_plays() {
    let e = DomainError::illegal_play(PlayViolation::MustFollowSuit, "must follow hearts");
    assert_eq!(e.code(), ErrorCode::MustFollowSuit);
    assert_eq!(e.code().as_str(), "MUST_FOLLOW_SUIT");
    assert!(e.is_recoverable());

    let e = DomainError::illegal_play(PlayViolation::SittingOut, "partner is alone");
    assert_eq!(e.code().as_str(), "SITTING_OUT");

    let e = DomainError::illegal_play(PlayViolation::OutOfTurn, "not your turn");
    assert_eq!(e.code(), ErrorCode::OutOfTurn);
}

#[test]
fn maps_illegal_bids() {
    let e = DomainError::illegal_bid(BidViolation::DealerMustCall, "stuck");
    assert_eq!(e.code().as_str(), "DEALER_MUST_CALL");
    assert!(e.is_recoverable());

    let e = DomainError::illegal_bid(BidViolation::FlippedSuitUnavailable, "turned down");
    assert_eq!(e.code().as_str(), "FLIPPED_SUIT_UNAVAILABLE");

    // Out-of-turn shares one code across bids and plays
    let e = DomainError::illegal_bid(BidViolation::OutOfTurn, "wait");
    assert_eq!(e.code(), ErrorCode::OutOfTurn);
}

#[test]
fn invariant_violations_are_not_recoverable() {
    let e = DomainError::invariant("card count 23");
    assert_eq!(e.code().as_str(), "INVARIANT_VIOLATION");
    assert!(!e.is_recoverable());
    assert_eq!(e.to_string(), "invariant violated: card count 23");
}

#[test]
fn display_includes_detail() {
    let e = DomainError::illegal_bid(BidViolation::WrongRound, "cannot order up in round 2");
    let s = e.to_string();
    assert!(s.contains("WrongRound"), "unexpected display: {s}");
    assert!(s.contains("cannot order up"), "unexpected display: {s}");
}

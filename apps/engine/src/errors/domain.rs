//! Domain-level error type used across the rule engine and the controller.
//!
//! This error type is UI-agnostic. Callers surface `IllegalPlay` and
//! `IllegalBid` inline to the acting seat; `InvariantViolation` means a
//! programming error and is never reachable through legal public operations.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Reasons a card play (or dealer discard) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayViolation {
    OutOfTurn,
    SittingOut,
    MustFollowSuit,
    CardNotInHand,
    PhaseMismatch,
}

/// Reasons a bid is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidViolation {
    OutOfTurn,
    FlippedSuitUnavailable,
    DealerMustCall,
    WrongRound,
    PhaseMismatch,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A seat tried to play a card it may not play right now.
    #[error("illegal play ({0:?}): {1}")]
    IllegalPlay(PlayViolation, String),
    /// A bid the bidding machine cannot accept.
    #[error("illegal bid ({0:?}): {1}")]
    IllegalBid(BidViolation, String),
    /// Internal consistency check failed (card counts, duplicates, trick length).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// Malformed card token.
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn illegal_play(kind: PlayViolation, detail: impl Into<String>) -> Self {
        Self::IllegalPlay(kind, detail.into())
    }

    pub fn illegal_bid(kind: BidViolation, detail: impl Into<String>) -> Self {
        Self::IllegalBid(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation(detail.into())
    }

    /// Stable reason code for the UI layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::IllegalPlay(kind, _) => match kind {
                PlayViolation::OutOfTurn => ErrorCode::OutOfTurn,
                PlayViolation::SittingOut => ErrorCode::SittingOut,
                PlayViolation::MustFollowSuit => ErrorCode::MustFollowSuit,
                PlayViolation::CardNotInHand => ErrorCode::CardNotInHand,
                PlayViolation::PhaseMismatch => ErrorCode::PhaseMismatch,
            },
            DomainError::IllegalBid(kind, _) => match kind {
                BidViolation::OutOfTurn => ErrorCode::OutOfTurn,
                BidViolation::FlippedSuitUnavailable => ErrorCode::FlippedSuitUnavailable,
                BidViolation::DealerMustCall => ErrorCode::DealerMustCall,
                BidViolation::WrongRound => ErrorCode::WrongBiddingRound,
                BidViolation::PhaseMismatch => ErrorCode::PhaseMismatch,
            },
            DomainError::InvariantViolation(_) => ErrorCode::InvariantViolation,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
        }
    }

    /// True for rejections the acting seat can recover from by choosing again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::IllegalPlay(..) | DomainError::IllegalBid(..)
        )
    }
}

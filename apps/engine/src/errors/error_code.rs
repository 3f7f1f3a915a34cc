//! Reason codes reported with rejected actions.
//!
//! Add new codes here; never pass ad-hoc strings as reason codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a UI
//! layer receives.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn order
    /// Acting seat is not the seat whose turn it is
    OutOfTurn,
    /// Seat is sitting out because its partner went alone
    SittingOut,
    /// Action does not belong to the current phase
    PhaseMismatch,

    // Card play
    /// Must follow the led (effective) suit
    MustFollowSuit,
    /// Card not in hand
    CardNotInHand,

    // Bidding
    /// The turned-down suit cannot be called in round two
    FlippedSuitUnavailable,
    /// Stuck dealer may not pass
    DealerMustCall,
    /// Order-up in round two or call in round one
    WrongBiddingRound,

    // Internal
    /// Parse card error
    ParseCard,
    /// Internal consistency check failed
    InvariantViolation,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::SittingOut => "SITTING_OUT",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::FlippedSuitUnavailable => "FLIPPED_SUIT_UNAVAILABLE",
            Self::DealerMustCall => "DEALER_MUST_CALL",
            Self::WrongBiddingRound => "WRONG_BIDDING_ROUND",
            Self::ParseCard => "PARSE_CARD",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

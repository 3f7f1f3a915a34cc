//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{BidAction, BidOutcome, Bidding, BiddingStage, TrumpResolution};
pub use cards_logic::{card_beats, card_value, effective_suit, hand_value, is_legal, is_trump};
pub use cards_types::{Card, Color, Rank, Suit};
pub use dealing::{deal_with_rng, Deal, DealPattern};
pub use player_view::{BidView, DiscardView, PlayView};
pub use scoring::{HandScore, ScoreReason};
pub use seed_derivation::{derive_agent_seed, derive_game_seed};
pub use state::{GameState, Phase, Seat, Team};
pub use tricks::PlayCardResult;

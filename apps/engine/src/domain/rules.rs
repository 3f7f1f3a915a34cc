pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 24;
pub const HAND_SIZE: usize = 5;
pub const TRICKS_PER_HAND: u8 = 5;
pub const KITTY_SIZE: usize = DECK_SIZE - PLAYERS * HAND_SIZE - 1;

/// Tricks the makers need to avoid being euchred.
pub const TRICKS_TO_MAKE: u8 = 3;

pub const DEFAULT_WINNING_SCORE: u8 = 10;

/// Upper bound on bid actions in one deal when the dealer is stuck: four per round.
pub const MAX_BID_ACTIONS: usize = 2 * PLAYERS;

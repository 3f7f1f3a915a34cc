//! RNG seed derivation utilities for deterministic batch runs.
//!
//! A simulation run has one base seed. Every game, and every seeded agent in
//! that game, gets its own derived seed so runs replay exactly.

use crate::domain::state::Seat;

/// Derive the controller seed for one game of a batch.
///
/// Same base + index = same game; different indices never collide for
/// realistic batch sizes.
pub fn derive_game_seed(base_seed: u64, game_index: u64) -> u64 {
    base_seed
        .wrapping_add(game_index.wrapping_mul(1_000_003))
        .wrapping_add(1)
}

/// Derive the seed for an agent sitting at `seat` in a given game.
pub fn derive_agent_seed(game_seed: u64, seat: Seat) -> u64 {
    game_seed
        .wrapping_mul(31)
        .wrapping_add((seat.index() as u64 + 1).wrapping_mul(7_919))
        .wrapping_add(2)
}

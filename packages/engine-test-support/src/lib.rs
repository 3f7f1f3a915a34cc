//! Engine test support utilities
//!
//! Shared helpers for the engine's integration tests and the simulator's
//! tests: unified logging initialization and seed selection.

pub mod logging;
pub mod seeds;

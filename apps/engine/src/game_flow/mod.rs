//! Game orchestration on top of the pure domain rules.

pub mod controller;
pub mod events;
pub mod history;
pub mod stats;

pub use controller::{GameController, PendingAction};
pub use events::GameEvent;
pub use history::{GameHistory, HandRecord};
pub use stats::GameStats;

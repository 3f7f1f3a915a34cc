//! Game configuration.
//!
//! Every field has a default, so a partial JSON object (or none at all) is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::ai::Difficulty;
use crate::domain::rules::DEFAULT_WINNING_SCORE;
use crate::domain::Seat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed game config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid game config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// AI tier for every non-human seat.
    pub difficulty: Difficulty,
    /// Force the dealer to call when round two would end with no trump.
    /// When off, four round-two passes throw the hand in.
    pub stick_the_dealer: bool,
    pub winning_score: u8,
    /// The local player's seat; AI roles (partner/opponent) are relative to it.
    pub home_seat: Seat,
    /// First dealer; `None` draws one from the game RNG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_dealer: Option<Seat>,
    /// Safety bound on deals per game, redeals included.
    pub max_hands: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            stick_the_dealer: true,
            winning_score: DEFAULT_WINNING_SCORE,
            home_seat: Seat::South,
            starting_dealer: None,
            max_hands: 200,
        }
    }
}

impl GameConfig {
    /// Build from optional JSON, falling back to defaults when the input is
    /// missing, malformed or invalid.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value::<Self>(json.clone()).ok())
            .filter(|c| c.validate().is_ok())
            .unwrap_or_default()
    }

    /// Strict parse: malformed or invalid input is an error.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 {
            return Err(ConfigError::Invalid("winning_score must be positive".into()));
        }
        if self.max_hands == 0 {
            return Err(ConfigError::Invalid("max_hands must be positive".into()));
        }
        Ok(())
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_starting_dealer(mut self, dealer: Seat) -> Self {
        self.starting_dealer = Some(dealer);
        self
    }
}

//! Difficulty tiers and the probabilities each one plays with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?} (expected easy, medium, hard or expert)")]
pub struct UnknownDifficulty(pub String);

/// Probabilities driving one tier's decisions. All values are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyProfile {
    /// Chance to order up in round one.
    pub order_up_chance: f64,
    /// Chance to name a suit in round two (stuck dealers always call).
    pub call_chance: f64,
    /// Chance to take a trick cheaply instead of dumping the lowest card.
    pub play_skill: f64,
    /// Chance to go alone once accepting, for the home player's partner.
    pub alone_chance_partner: f64,
    /// Chance to go alone once accepting, for opponents.
    pub alone_chance_opponent: f64,
}

/// Relation of an AI seat to the home (local) player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatRole {
    Partner,
    Opponent,
}

impl SeatRole {
    /// Role of `seat` relative to `home`. The home seat itself counts as partner.
    pub fn of(seat: Seat, home: Seat) -> Self {
        if seat.team() == home.team() {
            SeatRole::Partner
        } else {
            SeatRole::Opponent
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                order_up_chance: 0.3,
                call_chance: 0.3,
                play_skill: 0.2,
                alone_chance_partner: 0.03,
                alone_chance_opponent: 0.02,
            },
            Difficulty::Medium => DifficultyProfile {
                order_up_chance: 0.5,
                call_chance: 0.5,
                play_skill: 0.5,
                alone_chance_partner: 0.06,
                alone_chance_opponent: 0.04,
            },
            Difficulty::Hard => DifficultyProfile {
                order_up_chance: 0.65,
                call_chance: 0.6,
                play_skill: 0.8,
                alone_chance_partner: 0.09,
                alone_chance_opponent: 0.06,
            },
            Difficulty::Expert => DifficultyProfile {
                order_up_chance: 0.75,
                call_chance: 0.7,
                play_skill: 1.0,
                alone_chance_partner: 0.12,
                alone_chance_opponent: 0.08,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl DifficultyProfile {
    pub fn alone_chance(&self, role: SeatRole) -> f64 {
        match role {
            SeatRole::Partner => self.alone_chance_partner,
            SeatRole::Opponent => self.alone_chance_opponent,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

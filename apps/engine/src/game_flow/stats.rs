//! Cumulative statistics from the home team's point of view.
//!
//! Plain serde data; storing it is the caller's job.

use serde::{Deserialize, Serialize};

use crate::domain::Team;
use crate::game_flow::history::HandRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub hands_played: u32,
    pub points_for: u32,
    pub points_against: u32,
    /// Hands the home team named trump.
    pub hands_made: u32,
    /// Hands the home team euchred the makers.
    pub euchres_for: u32,
    /// Hands the home team was euchred.
    pub euchres_against: u32,
    pub marches: u32,
    pub lone_hands: u32,
}

impl GameStats {
    pub fn record_hand(&mut self, record: &HandRecord, home: Team) {
        self.hands_played += 1;
        let points = u32::from(record.score.points);
        if record.score.team == home {
            self.points_for += points;
        } else {
            self.points_against += points;
        }

        let home_made = record.maker.team() == home;
        if home_made {
            self.hands_made += 1;
            if record.lone.is_some() {
                self.lone_hands += 1;
            }
            if record.score.reason.is_march() {
                self.marches += 1;
            }
        }
        if record.score.reason.is_euchre() {
            if home_made {
                self.euchres_against += 1;
            } else {
                self.euchres_for += 1;
            }
        }
    }

    pub fn record_game(&mut self, winner: Team, home: Team) {
        self.games_played += 1;
        if winner == home {
            self.games_won += 1;
        } else {
            self.games_lost += 1;
        }
    }

    /// Fraction of finished games the home team won.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}

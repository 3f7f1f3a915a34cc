//! Metrics collection and output for AI simulation results.

use engine::{Difficulty, GameHistory, HandRecord, ScoreReason, Seat, Suit, Team};
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: SimulationConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hands: Vec<HandMetrics>,
    pub team_metrics: Vec<TeamMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationConfig {
    pub agents: [String; 4],
    /// Indexed by `Team::index()`.
    pub difficulties: [Difficulty; 2],
    pub stick_the_dealer: bool,
    pub winning_score: u8,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [u8; 2],
    pub winner: Team,
    pub hands_played: usize,
    pub redeals: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandMetrics {
    pub hand_no: u32,
    pub dealer: Seat,
    pub trump: Suit,
    pub maker: Seat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lone: Option<Seat>,
    pub ordered_up: bool,
    pub assist: bool,
    pub tricks_won: [u8; 4],
    pub scoring_team: Team,
    pub points: u8,
    pub reason: ScoreReason,
    pub scores_after: [u8; 2],
}

impl From<&HandRecord> for HandMetrics {
    fn from(record: &HandRecord) -> Self {
        HandMetrics {
            hand_no: record.hand_no,
            dealer: record.dealer,
            trump: record.trump,
            maker: record.maker,
            lone: record.lone,
            ordered_up: record.ordered_up,
            assist: record.assist,
            tricks_won: record.tricks_won,
            scoring_team: record.score.team,
            points: record.score.points,
            reason: record.score.reason,
            scores_after: record.scores_after,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMetrics {
    pub team: Team,
    pub difficulty: Difficulty,
    pub final_score: u8,
    /// Hands this team named trump.
    pub hands_made: u32,
    /// Made hands that scored for the makers.
    pub hands_won_as_makers: u32,
    pub make_pct: f64,
    pub euchred: u32,
    pub euchres_inflicted: u32,
    pub marches: u32,
    pub lone_hands: u32,
    pub assists: u32,
    pub avg_tricks_per_hand: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    config: SimulationConfig,
    result: &GameResult,
    level: MetricsLevel,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let hands = match level {
        MetricsLevel::Detailed => result.history.hands.iter().map(HandMetrics::from).collect(),
        MetricsLevel::Basic => Vec::new(),
    };

    let team_metrics = Team::ALL
        .iter()
        .map(|&team| {
            build_team_metrics(
                team,
                config.difficulties[team.index()],
                result.final_scores[team.index()],
                &result.history,
            )
        })
        .collect();

    GameMetrics {
        game_id,
        seed: result.game_seed,
        timestamp,
        config,
        result: GameResultMetrics {
            final_scores: result.final_scores,
            winner: result.winner,
            hands_played: result.history.len(),
            redeals: result.history.redeals,
            duration_ms,
        },
        hands,
        team_metrics,
    }
}

pub fn build_team_metrics(
    team: Team,
    difficulty: Difficulty,
    final_score: u8,
    history: &GameHistory,
) -> TeamMetrics {
    let hands_made = history.hands_made_by(team).count() as u32;
    let hands_won_as_makers = history
        .hands_made_by(team)
        .filter(|h| h.score.team == team)
        .count() as u32;
    let make_pct = if hands_made > 0 {
        (hands_won_as_makers as f64 / hands_made as f64) * 100.0
    } else {
        0.0
    };

    let lone_hands = history
        .hands_made_by(team)
        .filter(|h| h.lone.is_some())
        .count() as u32;
    let assists = history.hands_made_by(team).filter(|h| h.assist).count() as u32;

    let total_tricks: u32 = history
        .hands
        .iter()
        .map(|h| team.seats().iter().map(|s| h.tricks_won[s.index()] as u32).sum::<u32>())
        .sum();
    let avg_tricks = if !history.is_empty() {
        total_tricks as f64 / history.len() as f64
    } else {
        0.0
    };

    TeamMetrics {
        team,
        difficulty,
        final_score,
        hands_made,
        hands_won_as_makers,
        make_pct,
        euchred: history.times_euchred(team) as u32,
        euchres_inflicted: history.times_euchred(team.other()) as u32,
        marches: history.marches(team) as u32,
        lone_hands,
        assists,
        avg_tricks_per_hand: avg_tricks,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: Team,
    pub ns_score: u8,
    pub ew_score: u8,
    pub hands_played: usize,
    pub redeals: u32,
    pub ns_difficulty: Difficulty,
    pub ew_difficulty: Difficulty,
    pub ns_euchred: u32,
    pub ew_euchred: u32,
    pub seat0_agent: String,
    pub seat1_agent: String,
    pub seat2_agent: String,
    pub seat3_agent: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let ns = Team::NorthSouth.index();
        let ew = Team::EastWest.index();
        let euchred = |i: usize| metrics.team_metrics.get(i).map_or(0, |t| t.euchred);
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            ns_score: metrics.result.final_scores[ns],
            ew_score: metrics.result.final_scores[ew],
            hands_played: metrics.result.hands_played,
            redeals: metrics.result.redeals,
            ns_difficulty: metrics.config.difficulties[ns],
            ew_difficulty: metrics.config.difficulties[ew],
            ns_euchred: euchred(ns),
            ew_euchred: euchred(ew),
            seat0_agent: metrics.config.agents[0].clone(),
            seat1_agent: metrics.config.agents[1].clone(),
            seat2_agent: metrics.config.agents[2].clone(),
            seat3_agent: metrics.config.agents[3].clone(),
        }
    }
}

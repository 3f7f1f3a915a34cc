use serde::Serialize;
use tracing::info;

use crate::domain::rules::{PLAYERS, TRICKS_PER_HAND, TRICKS_TO_MAKE};
use crate::domain::state::{require_maker, GameState, Phase, Seat, Team};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreReason {
    Made,
    March,
    Euchred,
    LoneMade,
    LoneMarch,
    LoneEuchred,
}

impl ScoreReason {
    /// True when the defenders scored.
    pub fn is_euchre(self) -> bool {
        matches!(self, ScoreReason::Euchred | ScoreReason::LoneEuchred)
    }

    pub fn is_march(self) -> bool {
        matches!(self, ScoreReason::March | ScoreReason::LoneMarch)
    }
}

/// Points awarded for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandScore {
    /// Team receiving the points.
    pub team: Team,
    pub points: u8,
    pub reason: ScoreReason,
    /// Tricks taken by the makers.
    pub maker_tricks: u8,
}

/// Turn per-seat trick counts into a point award.
///
/// `lone` is the seat that went alone, if any; it must belong to the makers.
pub fn score_hand(
    tricks_won: &[u8; PLAYERS],
    maker: Seat,
    lone: Option<Seat>,
) -> Result<HandScore, DomainError> {
    let total: u8 = tricks_won.iter().sum();
    if total != TRICKS_PER_HAND {
        return Err(DomainError::invariant(format!(
            "hand scored with {total} tricks"
        )));
    }
    if let Some(seat) = lone {
        if seat.team() != maker.team() {
            return Err(DomainError::invariant(format!(
                "lone seat {seat} is not on the makers' team"
            )));
        }
    }

    let makers = maker.team();
    let maker_tricks: u8 = makers.seats().iter().map(|s| tricks_won[s.index()]).sum();
    let alone = lone.is_some();

    let (team, points, reason) = match (maker_tricks, alone) {
        (t, false) if t < TRICKS_TO_MAKE => (makers.other(), 2, ScoreReason::Euchred),
        (t, true) if t < TRICKS_TO_MAKE => (makers.other(), 2, ScoreReason::LoneEuchred),
        (TRICKS_PER_HAND, false) => (makers, 2, ScoreReason::March),
        (TRICKS_PER_HAND, true) => (makers, 4, ScoreReason::LoneMarch),
        (_, false) => (makers, 1, ScoreReason::Made),
        (_, true) => (makers, 1, ScoreReason::LoneMade),
    };

    Ok(HandScore {
        team,
        points,
        reason,
        maker_tricks,
    })
}

/// Team that reached `winning_score`, if any.
pub fn winner(scores: &[u8; 2], winning_score: u8) -> Option<Team> {
    Team::ALL
        .into_iter()
        .find(|t| scores[t.index()] >= winning_score)
}

/// Apply hand scoring once and move to `HandComplete` or `GameOver`.
///
/// Outside `Scoring` this is a no-op returning `Ok(None)`.
pub fn apply_hand_scoring(
    state: &mut GameState,
    winning_score: u8,
) -> Result<Option<HandScore>, DomainError> {
    if state.phase != Phase::Scoring {
        return Ok(None);
    }
    let maker = require_maker(state, "apply_hand_scoring")?;
    let score = score_hand(&state.hand.tricks_won, maker, state.hand.lone)?;

    let slot = &mut state.scores[score.team.index()];
    *slot = slot.saturating_add(score.points);

    state.phase = match winner(&state.scores, winning_score) {
        Some(_) => Phase::GameOver,
        None => Phase::HandComplete,
    };
    info!(
        hand_no = state.hand_no,
        team = %score.team,
        points = score.points,
        reason = ?score.reason,
        scores = ?state.scores,
        "hand scored"
    );
    Ok(Some(score))
}

use crate::domain::scoring::{apply_hand_scoring, score_hand, winner, ScoreReason};
use crate::domain::state::{GameState, Phase, Seat, Team};
use crate::errors::domain::DomainError;

// tricks_won is indexed South, West, North, East.

#[test]
fn makers_take_three_score_one() {
    let s = score_hand(&[3, 1, 0, 1], Seat::South, None).unwrap();
    assert_eq!((s.team, s.points, s.reason), (Team::NorthSouth, 1, ScoreReason::Made));
    assert_eq!(s.maker_tricks, 3);

    let s = score_hand(&[2, 0, 2, 1], Seat::North, None).unwrap();
    assert_eq!((s.team, s.points, s.reason), (Team::NorthSouth, 1, ScoreReason::Made));
}

#[test]
fn march_scores_two() {
    let s = score_hand(&[0, 3, 0, 2], Seat::East, None).unwrap();
    assert_eq!((s.team, s.points, s.reason), (Team::EastWest, 2, ScoreReason::March));
    assert!(s.reason.is_march());
}

#[test]
fn euchre_gives_defenders_two() {
    let s = score_hand(&[1, 2, 1, 1], Seat::South, None).unwrap();
    assert_eq!((s.team, s.points, s.reason), (Team::EastWest, 2, ScoreReason::Euchred));
    assert!(s.reason.is_euchre());
}

#[test]
fn lone_outcomes() {
    let s = score_hand(&[5, 0, 0, 0], Seat::South, Some(Seat::South)).unwrap();
    assert_eq!((s.team, s.points, s.reason), (Team::NorthSouth, 4, ScoreReason::LoneMarch));

    let s = score_hand(&[1, 3, 0, 1], Seat::West, Some(Seat::West)).unwrap();
    assert_eq!((s.team, s.points, s.reason), (Team::EastWest, 1, ScoreReason::LoneMade));

    let s = score_hand(&[2, 0, 0, 3], Seat::South, Some(Seat::South)).unwrap();
    assert_eq!(
        (s.team, s.points, s.reason),
        (Team::EastWest, 2, ScoreReason::LoneEuchred)
    );
}

/// Spread a makers' trick total over South (maker) and the defenders.
fn south_makes(maker_tricks: u8) -> [u8; 4] {
    let defenders = 5 - maker_tricks;
    [maker_tricks, defenders.div_ceil(2), 0, defenders / 2]
}

#[test]
fn scoring_table_by_makers_total() {
    // (makers' tricks, alone) -> (scoring team, points, reason)
    let cases = [
        (3, false, Team::NorthSouth, 1, ScoreReason::Made),
        (5, false, Team::NorthSouth, 2, ScoreReason::March),
        (2, false, Team::EastWest, 2, ScoreReason::Euchred),
        (5, true, Team::NorthSouth, 4, ScoreReason::LoneMarch),
        (2, true, Team::EastWest, 2, ScoreReason::LoneEuchred),
    ];
    for (maker_tricks, alone, team, points, reason) in cases {
        let tricks = south_makes(maker_tricks);
        let lone = alone.then_some(Seat::South);
        let s = score_hand(&tricks, Seat::South, lone).unwrap();
        assert_eq!(
            (s.team, s.points, s.reason),
            (team, points, reason),
            "makers took {maker_tricks}, alone={alone}"
        );
        assert_eq!(s.maker_tricks, maker_tricks);
    }
}

#[test]
fn rejects_bad_trick_totals_and_foreign_lone_seat() {
    assert!(matches!(
        score_hand(&[1, 1, 1, 1], Seat::South, None),
        Err(DomainError::InvariantViolation(_))
    ));
    assert!(matches!(
        score_hand(&[5, 0, 0, 0], Seat::South, Some(Seat::East)),
        Err(DomainError::InvariantViolation(_))
    ));
}

fn scoring_state(tricks: [u8; 4], maker: Seat, scores: [u8; 2]) -> GameState {
    let mut state = GameState::new();
    state.phase = Phase::Scoring;
    state.dealer = Some(Seat::East);
    state.scores = scores;
    state.hand.maker = Some(maker);
    state.hand.tricks_won = tricks;
    state
}

#[test]
fn apply_scoring_is_idempotent() {
    let mut state = scoring_state([3, 1, 0, 1], Seat::South, [3, 4]);
    let first = apply_hand_scoring(&mut state, 10).unwrap();
    assert!(first.is_some());
    assert_eq!(state.scores, [4, 4]);
    assert_eq!(state.phase, Phase::HandComplete);

    let again = apply_hand_scoring(&mut state, 10).unwrap();
    assert!(again.is_none());
    assert_eq!(state.scores, [4, 4]);
}

#[test]
fn reaching_winning_score_ends_game() {
    let mut state = scoring_state([0, 3, 0, 2], Seat::West, [5, 8]);
    apply_hand_scoring(&mut state, 10).unwrap();
    assert_eq!(state.scores, [5, 10]);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(winner(&state.scores, 10), Some(Team::EastWest));
    assert_eq!(winner(&[9, 9], 10), None);
}

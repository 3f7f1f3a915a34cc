//! Game controller: owns `GameState` and sequences deal → bidding → discard →
//! tricks → scoring → dealer rotation until a team wins.
//!
//! Two ways to drive it:
//! - the step API (`start_hand`, `pending_action`, `apply_*`, `finish_hand`)
//!   for a UI that feeds in one decision at a time;
//! - `play_hand` / `play_game`, which ask a `SeatAgent` per seat.
//!
//! Rejected actions return the domain error and leave the state unchanged.

use std::collections::VecDeque;

use rand::{Rng, RngCore};
use tracing::{debug, info, warn};

use crate::ai::{Difficulty, SeatAgent};
use crate::config::GameConfig;
use crate::domain::bidding::{self, is_assist, BidAction, BidOutcome, Bidding};
use crate::domain::dealing::deal_with_rng;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{apply_hand_scoring, winner};
use crate::domain::state::{hand_start_seat, require_dealer, GameState, HandState, Phase};
use crate::domain::tricks::{self, PlayCardResult};
use crate::domain::{BidView, Card, DiscardView, HandScore, PlayView, Seat, Team};
use crate::errors::domain::{DomainError, PlayViolation};
use crate::errors::GameError;
use crate::game_flow::events::GameEvent;
use crate::game_flow::history::{GameHistory, HandRecord};
use crate::game_flow::stats::GameStats;

/// What the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// A new deal (`start_hand`).
    Deal,
    Bid(Seat),
    Discard(Seat),
    Play(Seat),
    /// All tricks are in (`finish_hand`).
    Score,
}

pub struct GameController<R: RngCore> {
    config: GameConfig,
    rng: R,
    state: GameState,
    /// Difficulty in effect for the current deal.
    difficulty: Difficulty,
    pending_difficulty: Option<Difficulty>,
    /// Set when a pending difficulty was applied at the latest deal.
    difficulty_changed: bool,
    events: VecDeque<GameEvent>,
    history: GameHistory,
    stats: GameStats,
}

impl<R: RngCore> GameController<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let difficulty = config.difficulty;
        Self {
            config,
            rng,
            state: GameState::new(),
            difficulty,
            pending_difficulty: None,
            difficulty_changed: false,
            events: VecDeque::new(),
            history: GameHistory::default(),
            stats: GameStats::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn scores(&self) -> [u8; 2] {
        self.state.scores
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Cumulative across games played on this controller.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn home_team(&self) -> Team {
        self.config.home_seat.team()
    }

    pub fn winner(&self) -> Option<Team> {
        match self.state.phase {
            Phase::GameOver => winner(&self.state.scores, self.config.winning_score),
            _ => None,
        }
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Change the AI tier. Takes effect at the next deal, never mid-hand.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(%difficulty, "difficulty change queued");
        self.pending_difficulty = Some(difficulty);
    }

    /// Reset scores and history and choose the first dealer.
    pub fn new_game(&mut self) {
        let dealer = match self.config.starting_dealer {
            Some(seat) => seat,
            None => Seat::from_index(self.rng.random_range(0..PLAYERS)),
        };
        self.state = GameState::new();
        self.state.dealer = Some(dealer);
        self.history = GameHistory::default();
        self.events.clear();
        info!(%dealer, "new game");
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        match self.state.phase {
            Phase::Init | Phase::HandComplete => Some(PendingAction::Deal),
            Phase::Bidding => self
                .state
                .bidding
                .as_ref()
                .and_then(Bidding::expected_bidder)
                .map(PendingAction::Bid),
            Phase::DealerDiscard => self.state.turn.map(PendingAction::Discard),
            Phase::Trick { .. } => self.state.turn.map(PendingAction::Play),
            Phase::Scoring => Some(PendingAction::Score),
            Phase::GameOver => None,
        }
    }

    /// Deal the next hand. The dealer rotates clockwise after every deal,
    /// including a thrown-in one.
    pub fn start_hand(&mut self) -> Result<(), DomainError> {
        let dealer = match self.state.phase {
            Phase::Init => match self.state.dealer {
                Some(dealer) => dealer,
                None => {
                    self.new_game();
                    require_dealer(&self.state, "start_hand")?
                }
            },
            Phase::HandComplete => require_dealer(&self.state, "start_hand")?.next(),
            _ => {
                return Err(DomainError::illegal_play(
                    PlayViolation::PhaseMismatch,
                    "a hand is in progress or the game is over",
                ));
            }
        };

        let deal = deal_with_rng(&mut self.rng, dealer)?;

        self.difficulty_changed = false;
        if let Some(d) = self.pending_difficulty.take() {
            self.difficulty_changed = d != self.difficulty;
            self.difficulty = d;
        }

        let flipped = deal.flipped;
        self.state.hand = HandState {
            hands: deal.hands,
            kitty: deal.kitty,
            flipped: Some(flipped),
            upcard: Some(flipped),
            ..HandState::default()
        };
        self.state.hand.check_card_count()?;
        self.state.bidding = Some(Bidding::new(
            dealer,
            flipped,
            self.config.stick_the_dealer,
        ));
        self.state.phase = Phase::Bidding;
        self.state.hand_no += 1;
        self.state.dealer = Some(dealer);
        self.state.turn = Some(hand_start_seat(dealer));
        self.state.leader = None;
        self.state.trick_no = None;

        info!(
            hand_no = self.state.hand_no,
            %dealer,
            %flipped,
            difficulty = %self.difficulty,
            "hand dealt"
        );
        self.events.push_back(GameEvent::DealComplete {
            hand_no: self.state.hand_no,
            dealer,
            flipped,
        });
        Ok(())
    }

    pub fn apply_bid(&mut self, seat: Seat, action: BidAction) -> Result<BidOutcome, DomainError> {
        let outcome = bidding::place_bid(&mut self.state, seat, action)?;
        self.events.push_back(GameEvent::BidPlaced { seat, action });

        match outcome {
            BidOutcome::Resolved(res) => {
                let dealer = require_dealer(&self.state, "apply_bid")?;
                let assist = res.ordered_up && is_assist(res.maker, dealer);
                info!(
                    hand_no = self.state.hand_no,
                    trump = %res.trump,
                    maker = %res.maker,
                    alone = res.alone,
                    assist,
                    "trump resolved"
                );
                self.events.push_back(GameEvent::TrumpResolved {
                    trump: res.trump,
                    maker: res.maker,
                    alone: res.alone,
                    ordered_up: res.ordered_up,
                    assist,
                });
            }
            BidOutcome::Redeal => {
                let dealer = require_dealer(&self.state, "apply_bid")?;
                warn!(hand_no = self.state.hand_no, %dealer, "all seats passed; redealing");
                self.state.bidding = None;
                self.state.turn = None;
                self.state.phase = Phase::HandComplete;
                self.history.redeals += 1;
                self.events.push_back(GameEvent::Redeal {
                    hand_no: self.state.hand_no,
                    dealer,
                });
            }
            BidOutcome::Next(_) | BidOutcome::RoundTwo(_) | BidOutcome::DealerStuck(_) => {}
        }
        Ok(outcome)
    }

    pub fn apply_discard(&mut self, seat: Seat, card: Card) -> Result<(), DomainError> {
        bidding::discard(&mut self.state, seat, card)?;
        self.events
            .push_back(GameEvent::DealerDiscarded { dealer: seat });
        Ok(())
    }

    pub fn apply_play(&mut self, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
        let result = tricks::play_card(&mut self.state, seat, card)?;
        self.events.push_back(GameEvent::CardPlayed { seat, card });
        if let Some(winner) = result.trick_winner {
            self.events.push_back(GameEvent::TrickComplete {
                trick_no: result.trick_no_after.saturating_sub(1),
                winner,
            });
        }
        Ok(result)
    }

    /// Score the finished hand, record it, and end the game if a team reached
    /// the winning score.
    pub fn finish_hand(&mut self) -> Result<HandScore, DomainError> {
        let Some(score) = apply_hand_scoring(&mut self.state, self.config.winning_score)? else {
            return Err(DomainError::illegal_play(
                PlayViolation::PhaseMismatch,
                "no hand is waiting to be scored",
            ));
        };

        let record = self.hand_record(score)?;
        let home = self.home_team();
        self.stats.record_hand(&record, home);
        self.history.push(record);
        self.events.push_back(GameEvent::HandComplete {
            hand_no: self.state.hand_no,
            score,
            scores: self.state.scores,
        });

        if let Some(team) = self.winner() {
            self.stats.record_game(team, home);
            info!(
                winner = %team,
                scores = ?self.state.scores,
                hands = self.history.len(),
                "game over"
            );
            self.events.push_back(GameEvent::GameComplete {
                winner: team,
                scores: self.state.scores,
            });
        }
        Ok(score)
    }

    fn hand_record(&self, score: HandScore) -> Result<HandRecord, DomainError> {
        let hand = &self.state.hand;
        let dealer = require_dealer(&self.state, "hand_record")?;
        let maker = hand
            .maker
            .ok_or_else(|| DomainError::invariant("maker must be set (hand_record)"))?;
        Ok(HandRecord {
            hand_no: self.state.hand_no,
            dealer,
            upcard: hand
                .upcard
                .ok_or_else(|| DomainError::invariant("upcard must be set (hand_record)"))?,
            trump: hand
                .trump
                .ok_or_else(|| DomainError::invariant("trump must be set (hand_record)"))?,
            maker,
            lone: hand.lone,
            ordered_up: hand.ordered_up,
            assist: hand.ordered_up && is_assist(maker, dealer),
            tricks_won: hand.tricks_won,
            score,
            scores_after: self.state.scores,
        })
    }

    /// Deal and play one hand to the end, asking `agents[seat.index()]` for
    /// every decision. Returns `None` when the hand was thrown in.
    pub fn play_hand(
        &mut self,
        agents: &mut [Box<dyn SeatAgent>; PLAYERS],
    ) -> Result<Option<HandScore>, GameError> {
        self.start_hand()?;
        if self.difficulty_changed {
            for agent in agents.iter_mut() {
                agent.set_difficulty(self.difficulty);
            }
        }

        loop {
            let Some(pending) = self.pending_action() else {
                return Err(DomainError::invariant("game ended mid-hand").into());
            };
            match pending {
                PendingAction::Bid(seat) => {
                    let view = BidView::from_state(&self.state, seat)?;
                    let action = agents[seat.index()]
                        .choose_bid(&view, &mut self.rng)
                        .map_err(|e| GameError::agent(seat, e))?;
                    self.apply_bid(seat, action)
                        .inspect_err(|e| warn!(%seat, ?action, error = %e, "agent bid rejected"))?;
                }
                PendingAction::Discard(seat) => {
                    let view = DiscardView::from_state(&self.state, seat)?;
                    let card = agents[seat.index()]
                        .choose_discard(&view, &mut self.rng)
                        .map_err(|e| GameError::agent(seat, e))?;
                    self.apply_discard(seat, card)
                        .inspect_err(|e| warn!(%seat, %card, error = %e, "agent discard rejected"))?;
                }
                PendingAction::Play(seat) => {
                    let view = PlayView::from_state(&self.state, seat)?;
                    let card = agents[seat.index()]
                        .choose_play(&view, &mut self.rng)
                        .map_err(|e| GameError::agent(seat, e))?;
                    self.apply_play(seat, card)
                        .inspect_err(|e| warn!(%seat, %card, error = %e, "agent play rejected"))?;
                }
                PendingAction::Score => return Ok(Some(self.finish_hand()?)),
                PendingAction::Deal => return Ok(None),
            }
        }
    }

    /// Play hands until a team wins. Starts a new game unless one is in progress.
    pub fn play_game(
        &mut self,
        agents: &mut [Box<dyn SeatAgent>; PLAYERS],
    ) -> Result<Team, GameError> {
        if matches!(self.state.phase, Phase::Init | Phase::GameOver) {
            self.new_game();
        }
        loop {
            if let Some(team) = self.winner() {
                return Ok(team);
            }
            if self.state.hand_no >= self.config.max_hands {
                return Err(GameError::HandLimit(self.state.hand_no));
            }
            self.play_hand(agents)?;
        }
    }
}

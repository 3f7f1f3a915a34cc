//! In-memory game simulator for AI evaluation.
//!
//! Each game runs through the engine's `GameController` with a seat agent per
//! seat. Everything random (the deal, agent draws) comes from seeds derived
//! from one game seed, so a game replays exactly.

use engine::ai::registry::{by_name, AgentParams};
use engine::domain::derive_agent_seed;
use engine::{
    Difficulty, GameConfig, GameController, GameError, GameHistory, GameStats, Seat, SeatAgent,
    SeatRole, Team,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

const PLAYERS: usize = 4;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_seed: u64,
    /// Final scores, indexed by `Team::index()`.
    pub final_scores: [u8; 2],
    pub winner: Team,
    pub history: GameHistory,
    /// Statistics from the home seat's team point of view.
    pub stats: GameStats,
    /// Deals in the game, thrown-in ones included.
    pub deals: u32,
}

/// Agent and difficulty for every seat, plus the table rules.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: GameConfig,
    agents: [&'static str; PLAYERS],
    /// Per team, indexed by `Team::index()`.
    difficulties: [Difficulty; 2],
}

impl Simulator {
    /// Unknown agent names are rejected here rather than mid-game.
    pub fn new(
        config: GameConfig,
        agents: [&'static str; PLAYERS],
        difficulties: [Difficulty; 2],
    ) -> Result<Self, SimulatorError> {
        for name in agents {
            if by_name(name).is_none() {
                return Err(SimulatorError::UnknownAgent(name.to_string()));
            }
        }
        Ok(Self {
            config,
            agents,
            difficulties,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn build_agents(&self, game_seed: u64) -> Result<[Box<dyn SeatAgent>; PLAYERS], SimulatorError> {
        let mut agents = Vec::with_capacity(PLAYERS);
        for seat in Seat::ALL {
            let name = self.agents[seat.index()];
            let factory =
                by_name(name).ok_or_else(|| SimulatorError::UnknownAgent(name.to_string()))?;
            agents.push((factory.make)(AgentParams {
                seed: Some(derive_agent_seed(game_seed, seat)),
                difficulty: self.difficulties[seat.team().index()],
                role: SeatRole::of(seat, self.config.home_seat),
            }));
        }
        agents
            .try_into()
            .map_err(|_| SimulatorError::InvalidState("expected four seat agents".into()))
    }

    /// Play one complete game from `game_seed`.
    pub fn simulate_game(&self, game_seed: u64) -> Result<GameResult, SimulatorError> {
        let mut agents = self.build_agents(game_seed)?;
        let mut controller =
            GameController::new(self.config.clone(), ChaCha8Rng::seed_from_u64(game_seed));

        let winner = controller.play_game(&mut agents)?;
        debug!(
            game_seed,
            %winner,
            scores = ?controller.scores(),
            hands = controller.history().len(),
            "simulated game"
        );

        Ok(GameResult {
            game_seed,
            final_scores: controller.scores(),
            winner,
            history: controller.history().clone(),
            stats: *controller.stats(),
            deals: controller.state().hand_no,
        })
    }
}

/// Errors that can occur during simulation.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("invalid state: {0}")]
    InvalidState(String),
}

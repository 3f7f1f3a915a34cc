//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    /// CSV summary only.
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricsLevel {
    /// Game result and per-team metrics.
    Basic,
    /// Adds one entry per hand.
    Detailed,
}

/// Seat agents the simulator can place at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Policy,
    Random,
}

impl AgentKind {
    /// Name in the engine's agent registry.
    pub fn registry_name(self) -> &'static str {
        match self {
            AgentKind::Policy => engine::AiAgent::NAME,
            AgentKind::Random => engine::RandomAgent::NAME,
        }
    }
}

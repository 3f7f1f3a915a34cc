//! How to register an agent
//!
//! 1) Implement `SeatAgent` for your type in its module.
//! 2) Add an `AgentFactory` entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed and same game RNG ⇒ same behavior.

use crate::ai::{AiAgent, Difficulty, RandomAgent, SeatAgent, SeatRole};

/// Construction parameters shared by every factory. Agents ignore what they don't use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentParams {
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub role: SeatRole,
}

/// Factory definition for constructing agents by name.
pub struct AgentFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(params: AgentParams) -> Box<dyn SeatAgent>,
}

static AGENT_FACTORIES: &[AgentFactory] = &[
    AgentFactory {
        name: AiAgent::NAME,
        version: AiAgent::VERSION,
        make: make_policy_agent,
    },
    AgentFactory {
        name: RandomAgent::NAME,
        version: RandomAgent::VERSION,
        make: make_random_agent,
    },
];

/// Returns the statically registered agent factories.
pub fn registered_agents() -> &'static [AgentFactory] {
    AGENT_FACTORIES
}

/// Finds a registered agent factory by its name.
pub fn by_name(name: &str) -> Option<&'static AgentFactory> {
    registered_agents().iter().find(|factory| factory.name == name)
}

fn make_policy_agent(params: AgentParams) -> Box<dyn SeatAgent> {
    Box::new(AiAgent::new(params.difficulty, params.role))
}

fn make_random_agent(params: AgentParams) -> Box<dyn SeatAgent> {
    Box::new(RandomAgent::new(params.seed))
}

//! Fluent builder for a template `Population`.
//!
//! # Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use zv_agent::{AnimalReservoir, Human, PopulationBuilder};
//! use zv_core::{AgentId, Position, Tick};
//!
//! let path = BTreeMap::from([(Tick(0), Position::new(0.0, 0.0))]);
//! let den  = BTreeMap::from([(Tick(0), Position::new(50.0, 0.0))]);
//!
//! let population = PopulationBuilder::new()
//!     .human(Human::new(AgentId(0), path))
//!     .reservoir(AnimalReservoir::new(AgentId(100), den, 40.0, 0.2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(population.len(), 2);
//! ```

use zv_core::ZvResult;

use crate::{Agent, AnimalReservoir, Human, Population};

/// Collects agents and registers them in order on [`build`](Self::build).
///
/// Duplicate ids surface as an error from `build`, not from the chained
/// calls, so the builder stays infallible until the end.
#[derive(Default)]
pub struct PopulationBuilder {
    agents: Vec<Agent>,
}

impl PopulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn human(mut self, human: Human) -> Self {
        self.agents.push(Agent::Human(human));
        self
    }

    pub fn reservoir(mut self, reservoir: AnimalReservoir) -> Self {
        self.agents.push(Agent::Reservoir(reservoir));
        self
    }

    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// Register every collected agent in call order.
    pub fn build(self) -> ZvResult<Population> {
        let mut population = Population::new();
        for agent in self.agents {
            population.insert(agent)?;
        }
        Ok(population)
    }
}

//! Population registry: `Population` (agent arena) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The per-human update reads the whole population (positions and statuses
//! of every other agent) while drawing from that human's RNG.  Keeping the
//! RNGs in a separate `AgentRngs` lets the simulation hold `&mut AgentRngs`
//! and `&Population` at once:
//!
//! ```ignore
//! // zv-sim tick loop (simplified):
//! let observed = tracker.observe(id, &sim.population)?;
//! let rng = sim.rngs.get_mut(slot);
//! let sick = hazard.draw_infection(exposure, status, rng);
//! ```
//!
//! # Slots and ids
//!
//! Agents live in a `Vec<Agent>` in registration order; that order is the
//! "population order" in which the simulation moves and updates agents.
//! An id index maps the (possibly sparse) `AgentId` to its slot.  Every
//! cross-agent reference is an id lookup through this index, so agents never
//! hold references to each other.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use zv_core::{AgentId, AgentRng, ZvError, ZvResult};

use crate::{Agent, Human};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, slot-aligned with [`Population`].
#[derive(Clone, Debug, Default)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// One RNG per agent in `population`, seeded from `global_seed` and the
    /// agent's id (not its slot), so insertion order never shifts a stream.
    pub fn seeded(population: &Population, global_seed: u64) -> Self {
        let inner = population
            .iter()
            .map(|a| AgentRng::new(global_seed, a.id()))
            .collect();
        Self { inner }
    }

    /// Append an RNG for an agent registered after construction.
    pub fn push(&mut self, global_seed: u64, agent: AgentId) {
        self.inner.push(AgentRng::new(global_seed, agent));
    }

    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut AgentRng> {
        self.inner.get_mut(slot)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Id-indexed arena of agents owned by one trial.
///
/// `Clone` produces the disposable per-trial copy of a template population.
#[derive(Clone, Debug, Default)]
pub struct Population {
    agents: Vec<Agent>,
    index: HashMap<AgentId, usize>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` and return its slot.
    ///
    /// Fails with [`ZvError::DuplicateAgent`] if the id is already present;
    /// the population is unchanged in that case.
    pub fn insert(&mut self, agent: impl Into<Agent>) -> ZvResult<usize> {
        let agent = agent.into();
        let id = agent.id();
        if self.index.contains_key(&id) {
            return Err(ZvError::DuplicateAgent(id));
        }
        let slot = self.agents.len();
        log::debug!("registered {} {id} at slot {slot}", agent.kind());
        self.index.insert(id, slot);
        self.agents.push(agent);
        Ok(slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.index.contains_key(&id)
    }

    /// Slot of `id`, if registered.
    #[inline]
    pub fn slot(&self, id: AgentId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slot(id).map(|s| &self.agents[s])
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        let slot = self.slot(id)?;
        self.agents.get_mut(slot)
    }

    /// The agent at `slot`, in population order.
    #[inline]
    pub fn by_slot(&self, slot: usize) -> Option<&Agent> {
        self.agents.get(slot)
    }

    /// The human with `id`, or `AgentNotFound` / `NotHuman`.
    pub fn human(&self, id: AgentId) -> ZvResult<&Human> {
        self.get(id)
            .ok_or(ZvError::AgentNotFound(id))?
            .as_human()
            .ok_or(ZvError::NotHuman(id))
    }

    pub fn human_mut(&mut self, id: AgentId) -> ZvResult<&mut Human> {
        self.get_mut(id)
            .ok_or(ZvError::AgentNotFound(id))?
            .as_human_mut()
            .ok_or(ZvError::NotHuman(id))
    }

    /// All agents in population order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.iter_mut()
    }

    /// Humans only, in population order.
    pub fn humans(&self) -> impl Iterator<Item = &Human> + '_ {
        self.agents.iter().filter_map(Agent::as_human)
    }

    /// Ids of all humans, in population order.
    pub fn human_ids(&self) -> Vec<AgentId> {
        self.humans().map(|h| h.id).collect()
    }
}

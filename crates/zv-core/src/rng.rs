//! Deterministic per-agent RNG and per-trial seed derivation.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so the motion jitter one agent draws never
//!   shifts the infection draws of another.
//! - Registering agents in a different order does not change any agent's
//!   stream. A trial is reproducible from `(seed, population)` alone.
//! - Trials seeded via [`trial_seed`] are independent of each other and of
//!   the order in which a parallel driver happens to run them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, TrialId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seed for trial `trial` of a batch started from `base_seed`.
///
/// Pure function of its inputs so sequential and parallel drivers agree.
#[inline]
pub fn trial_seed(base_seed: u64, trial: TrialId) -> u64 {
    base_seed ^ (trial.0 as u64 + 1).wrapping_mul(MIXING_CONSTANT).rotate_left(17)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent when it is registered; stored in `AgentRngs`
/// alongside the population.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform integer jitter in `[-max, +max]`, returned as `f32`.
    ///
    /// `max <= 0` yields exactly zero without consuming randomness.
    #[inline]
    pub fn jitter(&mut self, max: i32) -> f32 {
        if max <= 0 {
            return 0.0;
        }
        self.0.gen_range(-max..=max) as f32
    }
}

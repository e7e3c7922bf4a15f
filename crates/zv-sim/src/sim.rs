//! The `Simulation` struct and its tick loop.

use std::collections::BTreeMap;

use zv_agent::{Agent, AgentRngs, Population};
use zv_core::{AgentId, SimClock, SimConfig, Tick};
use zv_epi::EpiModel;
use zv_mobility::{MotionModel, MotionResolver, NoisyInterpolation};

use crate::{HumanResult, SimObserver, SimResult, SimView, TickSummary};

// ── Simulation ────────────────────────────────────────────────────────────────

/// One trial: a population, its clock, and the models that advance it.
///
/// Each tick runs two sequential phases in population order:
///
/// 1. **Motion**: every agent is placed for the tick (scripted waypoint or
///    motion model) and humans apply their self-reports.
/// 2. **Update**: every human runs contact tracking, hazard exposure, the
///    infection draw and the sickness ledger via [`EpiModel`].
///
/// Motion is fully applied to all agents before any update runs, so every
/// human measures distances against the same positions.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<M: MotionModel = NoisyInterpolation> {
    /// Immutable configuration.
    pub(crate) config: SimConfig,

    /// Current tick and its mapping to simulated seconds.
    pub(crate) clock: SimClock,

    /// All agents of this trial.  A disposable copy of the template.
    pub(crate) population: Population,

    /// Per-agent deterministic RNGs, slot-aligned with `population`.
    pub(crate) rngs: AgentRngs,

    pub(crate) motion: MotionResolver<M>,

    pub(crate) epi: EpiModel,
}

impl<M: MotionModel> Simulation<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Register another agent.  Its RNG is seeded from the configured seed.
    ///
    /// Fails with `DuplicateAgent` if the id is taken.
    pub fn add_agent(&mut self, agent: impl Into<Agent>) -> SimResult<()> {
        let agent = agent.into();
        let id = agent.id();
        self.population.insert(agent)?;
        self.rngs.push(self.config.seed, id);
        Ok(())
    }

    /// Advance exactly one tick.
    pub fn step(&mut self) -> SimResult<()> {
        let now = self.clock.current_tick;
        self.process_tick(now)?;
        self.clock.advance();
        Ok(())
    }

    /// Run from the current tick through `config.end_tick()` inclusive.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        log::info!(
            "running {} agents from {} through {end} ({} motion)",
            self.population.len(),
            self.clock.current_tick,
            self.motion.model.name()
        );
        while self.clock.current_tick <= end {
            self.observed_tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        log::info!("finished at {}", self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer)?;
        }
        Ok(())
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Simulated seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Aggregate result for every human, keyed by id.
    pub fn results(&self) -> BTreeMap<AgentId, HumanResult> {
        self.population
            .humans()
            .map(|h| (h.id, HumanResult::from_episodes(&h.episodes)))
            .collect()
    }

    /// Read-only snapshot for renderers.
    pub fn view(&self) -> SimView<'_> {
        SimView::new(self.clock.current_tick, self.clock.elapsed_secs(), &self.population)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now)?;
        observer.on_tick_end(now, &summary);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(&self.view());
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickSummary> {
        // ── Phase 1: motion ───────────────────────────────────────────────
        for (agent, rng) in self.population.iter_mut().zip(self.rngs.inner.iter_mut()) {
            self.motion.advance(agent, now, rng);
        }

        // ── Phase 2: per-human update ─────────────────────────────────────
        let mut summary = TickSummary::default();
        for slot in 0..self.population.len() {
            let Some(Agent::Human(human)) = self.population.by_slot(slot) else {
                continue;
            };
            let id = human.id;
            let update = self.epi.update_human(id, &mut self.population, &mut self.rngs.inner[slot], now)?;
            summary.record(&update);
        }
        if summary.onsets + summary.recoveries > 0 {
            log::debug!("{now}: {} onsets, {} recoveries", summary.onsets, summary.recoveries);
        }
        log::trace!("{now}: {summary:?}");
        Ok(summary)
    }
}

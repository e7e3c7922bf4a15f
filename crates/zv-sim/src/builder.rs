//! Fluent builder for constructing a [`Simulation`].

use zv_agent::{AgentRngs, Population};
use zv_core::SimConfig;
use zv_epi::EpiModel;
use zv_mobility::{MotionModel, MotionResolver, NoisyInterpolation};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<M>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.motion(m)`        | `NoisyInterpolation` with `config.motion_jitter` |
/// | `.population(p)`    | Empty population (add agents later)              |
///
/// # Example
///
/// ```rust,ignore
/// let population = zv_scenario::datasets::rd().build_population(config.tick_duration_secs)?;
/// let mut sim = SimBuilder::new(config)
///     .population(population)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: MotionModel = NoisyInterpolation> {
    config:     SimConfig,
    motion:     M,
    population: Population,
}

impl SimBuilder<NoisyInterpolation> {
    pub fn new(config: SimConfig) -> Self {
        let motion = NoisyInterpolation::new(config.motion_jitter);
        Self {
            config,
            motion,
            population: Population::new(),
        }
    }
}

impl<M: MotionModel> SimBuilder<M> {
    /// Replace the between-waypoint motion strategy.
    pub fn motion<N: MotionModel>(self, motion: N) -> SimBuilder<N> {
        SimBuilder {
            config:     self.config,
            motion,
            population: self.population,
        }
    }

    /// Supply the trial's population (typically a clone of a template).
    pub fn population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    /// Validate the configuration, seed per-agent RNGs, and return a
    /// ready-to-run [`Simulation`] at tick 0.
    pub fn build(self) -> SimResult<Simulation<M>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let rngs = AgentRngs::seeded(&self.population, self.config.seed);

        Ok(Simulation {
            clock:      self.config.make_clock(),
            epi:        EpiModel::from_config(&self.config),
            motion:     MotionResolver::new(self.motion),
            population: self.population,
            rngs,
            config:     self.config,
        })
    }
}

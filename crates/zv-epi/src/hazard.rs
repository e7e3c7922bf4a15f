//! Hazard Model: emitted hazard, leaky accumulation, and the infection draw.

use zv_agent::{AgentKind, ExposureState};
use zv_core::{AgentRng, HealthStatus, SimConfig};

use crate::Proximity;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HazardModel {
    /// Multiplier applied to both received accumulators every tick.
    pub decay:            f64,
    pub healthy_emission: f64,
    pub sick_emission:    f64,
    /// When `false`, [`draw_infection`](Self::draw_infection) never fires.
    pub simulate_spread:  bool,
}

impl HazardModel {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            decay:            config.hazard_decay,
            healthy_emission: config.healthy_emission,
            sick_emission:    config.sick_emission,
            simulate_spread:  config.simulate_spread,
        }
    }

    #[inline]
    pub fn emission_for(&self, status: HealthStatus) -> f64 {
        match status {
            HealthStatus::Healthy => self.healthy_emission,
            HealthStatus::Sick    => self.sick_emission,
        }
    }

    /// One tick of exposure for a human with `status`.
    ///
    /// Sets the emitted hazard, decays both accumulators, then adds the
    /// emission of every reservoir and human in `observed` that is within
    /// range.
    pub fn expose(&self, exposure: &mut ExposureState, status: HealthStatus, observed: &[Proximity]) {
        exposure.emitted = self.emission_for(status);
        exposure.decay(self.decay);
        for p in observed.iter().filter(|p| p.within) {
            match p.kind {
                AgentKind::Reservoir => exposure.from_animals += p.emitted,
                AgentKind::Human     => exposure.from_humans += p.emitted,
            }
        }
    }

    /// `1 - exp(-total)`, the per-tick probability of falling sick.
    pub fn infection_probability(&self, exposure: &ExposureState) -> f64 {
        let total = exposure.total().max(0.0);
        1.0 - (-total).exp()
    }

    /// Bernoulli infection draw.
    ///
    /// Returns `false` without consuming randomness when spread is disabled
    /// or the human is already sick.
    pub fn draw_infection(&self, exposure: &ExposureState, status: HealthStatus, rng: &mut AgentRng) -> bool {
        if !self.simulate_spread || status.is_sick() {
            return false;
        }
        let p = self.infection_probability(exposure);
        rng.random::<f64>() < p
    }
}

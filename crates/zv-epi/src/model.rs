//! Per-human update: tracker → hazard → infection draw → ledger.

use zv_agent::Population;
use zv_core::{AgentId, AgentRng, HealthStatus, SimConfig, Tick};

use crate::{ContactChanges, ContactTracker, EpiResult, HazardModel, SicknessLedger, Transition};

/// Outcome of [`EpiModel::update_human`] for one human on one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HumanUpdate {
    pub contacts:   ContactChanges,
    /// The infection draw fired this tick.
    pub infected:   bool,
    pub transition: Option<Transition>,
}

/// The four epidemiological components wired together, built once per
/// simulation from its immutable [`SimConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpiModel {
    pub tracker: ContactTracker,
    pub hazard:  HazardModel,
    pub ledger:  SicknessLedger,
}

impl EpiModel {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            tracker: ContactTracker::new(config.proximity_threshold),
            hazard:  HazardModel::from_config(config),
            ledger:  SicknessLedger::from_config(config),
        }
    }

    /// Run the full update for human `id` at tick `now`.
    ///
    /// All agents must already have moved for `now`.  `rng` is the human's
    /// own RNG; it is only drawn from when spread is enabled.
    pub fn update_human(
        &self,
        id:         AgentId,
        population: &mut Population,
        rng:        &mut AgentRng,
        now:        Tick,
    ) -> EpiResult<HumanUpdate> {
        let observed = self.tracker.observe(id, population)?;

        let human = population.human_mut(id)?;
        let contacts = self.tracker.apply(&mut human.contacts, &observed, now);
        self.hazard.expose(&mut human.exposure, human.status, &observed);

        let infected = self.hazard.draw_infection(&human.exposure, human.status, rng);
        if infected {
            log::debug!("{id} infected at {now} (total hazard {:.4})", human.exposure.total());
            human.status = HealthStatus::Sick;
        }

        let transition = self.ledger.transition(id, population, now)?;
        Ok(HumanUpdate { contacts, infected, transition })
    }
}

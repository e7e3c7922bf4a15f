//! Sickness Ledger: episode transitions and secondary-case counting.
//!
//! # State machine
//!
//! ```text
//!            hazard draw / self-report
//!   HEALTHY ───────────────────────────▶ SICK     open episode (start = now,
//!      ▲                                  │       exposure snapshot)
//!      │          self-report             │
//!      └──────────────────────────────────┘       close episode (end = now)
//! ```
//!
//! Every tick a human is sick, including the onset tick, the ongoing
//! episode's secondary-case count and zoonotic posterior are recomputed.

use zv_agent::{Agent, Human, Population, SicknessEpisode};
use zv_core::{AgentId, HealthStatus, SecondaryCaseRule, SimConfig, Tick};

use crate::{EpiError, EpiResult, ZoonoticEstimator};

/// What the ledger did for one human on one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new episode opened this tick.
    Onset,
    /// An episode is ongoing and its statistics were refreshed.
    Ongoing,
    /// The ongoing episode closed this tick.
    Recovery,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SicknessLedger {
    pub incubation_ticks: u64,
    pub rule:             SecondaryCaseRule,
    pub estimator:        ZoonoticEstimator,
}

impl SicknessLedger {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            incubation_ticks: config.incubation_ticks(),
            rule:             config.secondary_case_rule,
            estimator:        ZoonoticEstimator::from_config(config),
        }
    }

    /// The ongoing episode of a sick human.
    ///
    /// Fails with [`EpiError::NotSick`] if the human is healthy or has no
    /// open episode.
    pub fn episode_snapshot<'a>(&self, human: &'a Human) -> EpiResult<&'a SicknessEpisode> {
        if !human.is_sick() {
            return Err(EpiError::NotSick(human.id));
        }
        human.current_episode().ok_or(EpiError::NotSick(human.id))
    }

    /// Secondary cases attributable to `human`'s ongoing episode.
    ///
    /// Walks the contact archive from `start - incubation` in start order.
    /// A contact counts when its other agent was healthy at contact open and
    /// has any episode starting inside the window.  Contacts whose agent is
    /// missing or is not a human are skipped.  Under
    /// [`SecondaryCaseRule::FirstMatch`] the walk stops at the first count.
    pub fn secondary_cases(&self, human: &Human, population: &Population) -> EpiResult<u32> {
        let episode = self.episode_snapshot(human)?;
        let infectious_at = episode.start.saturating_back(self.incubation_ticks);

        let mut count = 0;
        for contact in human.contacts.archived_since(infectious_at) {
            if contact.other_status != Some(HealthStatus::Healthy) {
                continue;
            }
            let Some(other) = population.get(contact.other).and_then(Agent::as_human) else {
                continue;
            };
            if other.has_episode_since(infectious_at) {
                count += 1;
                if self.rule == SecondaryCaseRule::FirstMatch {
                    break;
                }
            }
        }
        Ok(count)
    }

    /// Apply this tick's status to human `id`'s episode history.
    ///
    /// Returns `None` while the human stays healthy.
    pub fn transition(&self, id: AgentId, population: &mut Population, now: Tick) -> EpiResult<Option<Transition>> {
        let human = population.human_mut(id)?;
        let status = human.status;

        let outcome = match status {
            HealthStatus::Sick => {
                let onset = human.current_episode().is_none();
                if onset {
                    human.episodes.push(SicknessEpisode::open(now, human.exposure));
                    log::debug!("{id} fell sick at {now} ({})", human.exposure);
                }

                let human = population.human(id)?;
                let cases = self.secondary_cases(human, population)?;
                let animal_hazard = self.episode_snapshot(human)?.exposure_at_onset.from_animals;
                let p_zoonotic = self.estimator.posterior(animal_hazard, cases);

                let human = population.human_mut(id)?;
                if let Some(episode) = human.current_episode_mut() {
                    episode.secondary_cases = cases;
                    episode.p_zoonotic = p_zoonotic;
                }
                Some(if onset { Transition::Onset } else { Transition::Ongoing })
            }
            HealthStatus::Healthy if human.prev_status.is_sick() => {
                match human.current_episode_mut() {
                    Some(episode) => {
                        episode.end = Some(now);
                        log::debug!("{id} recovered at {now}: {episode}");
                        Some(Transition::Recovery)
                    }
                    None => None,
                }
            }
            HealthStatus::Healthy => None,
        };

        population.human_mut(id)?.prev_status = status;
        Ok(outcome)
    }
}

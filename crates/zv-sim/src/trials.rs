//! Monte-Carlo trial runner.
//!
//! Every trial runs on its own clone of the template population with a seed
//! derived from `(config.seed, trial)` by [`trial_seed`].  Trials share no
//! state, so running them on Rayon's pool (feature `parallel`) produces the
//! same outcomes, in the same order, as the sequential loop.

use std::collections::BTreeMap;

use zv_agent::{Population, SicknessEpisode};
use zv_core::{AgentId, SimConfig, TrialId, trial_seed};
use zv_mobility::MotionModel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{HumanResult, NoopObserver, SimBuilder, SimObserver, SimResult};

/// Everything one trial produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    pub trial:    TrialId,
    pub seed:     u64,
    pub results:  BTreeMap<AgentId, HumanResult>,
    /// Full episode history per human, for long-form output.
    pub episodes: BTreeMap<AgentId, Vec<SicknessEpisode>>,
}

/// Run a single trial to `config.end_tick()`, reporting to `observer`.
pub fn run_trial<M, O>(
    template: &Population,
    config:   &SimConfig,
    motion:   &M,
    trial:    TrialId,
    observer: &mut O,
) -> SimResult<TrialOutcome>
where
    M: MotionModel + Clone,
    O: SimObserver,
{
    let seed = trial_seed(config.seed, trial);
    let config = SimConfig { seed, ..config.clone() };

    let mut sim = SimBuilder::new(config)
        .motion(motion.clone())
        .population(template.clone())
        .build()?;
    log::info!("trial {} (seed {seed:#x})", trial.0);
    sim.run(observer)?;

    let episodes = sim
        .population()
        .humans()
        .map(|h| (h.id, h.episodes.clone()))
        .collect();
    Ok(TrialOutcome { trial, seed, results: sim.results(), episodes })
}

/// Run `trials` independent trials and return their outcomes in trial order.
///
/// Stops at the first failing trial and returns its error.
pub fn run_trials<M>(template: &Population, config: &SimConfig, motion: &M, trials: u32) -> SimResult<Vec<TrialOutcome>>
where
    M: MotionModel + Clone,
{
    #[cfg(feature = "parallel")]
    let outcomes = (0..trials)
        .into_par_iter()
        .map(|t| run_trial(template, config, motion, TrialId(t), &mut NoopObserver))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = (0..trials)
        .map(|t| run_trial(template, config, motion, TrialId(t), &mut NoopObserver))
        .collect();

    outcomes
}

//! Per-tick position resolution and self-report application.

use zv_agent::Agent;
use zv_core::{AgentRng, HealthStatus, Tick};

use crate::MotionModel;

/// Wraps a [`MotionModel`] with the scripted-waypoint rule.
///
/// # Type parameter
///
/// `M` is resolved at compile time; swapping the strategy costs nothing at
/// runtime.
#[derive(Clone, Debug, Default)]
pub struct MotionResolver<M: MotionModel> {
    pub model: M,
}

impl<M: MotionModel> MotionResolver<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Place `agent` for tick `now`.
    ///
    /// A waypoint scripted at exactly `now` wins; otherwise the model moves
    /// the agent.  Humans then apply any self-report for `now`, which is
    /// returned so the caller can log it.
    pub fn advance(&self, agent: &mut Agent, now: Tick, rng: &mut AgentRng) -> Option<HealthStatus> {
        if let Some(&scripted) = agent.waypoints().get(&now) {
            agent.set_position(scripted);
        } else {
            match agent {
                Agent::Human(h)     => self.model.move_human(h, now, rng),
                Agent::Reservoir(r) => self.model.move_reservoir(r, now, rng),
            }
        }

        let human = agent.as_human_mut()?;
        let reported = human.self_report_at(now)?;
        if human.status != reported {
            log::debug!("{} self-reported {reported} at {now}", human.id);
        }
        human.status = reported;
        Some(reported)
    }
}

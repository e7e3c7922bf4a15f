//! Plain data row types written by output backends.

use zv_agent::AgentKind;
use zv_sim::{AgentView, Marker, TrialOutcome};

/// One agent's position and marker at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub trial:        u32,
    pub tick:         u64,
    pub elapsed_secs: u64,
    pub agent_id:     u32,
    pub kind:         AgentKind,
    pub x:            f32,
    pub y:            f32,
    /// Always `false` for reservoirs.
    pub sick:         bool,
    /// Radius of influence; `0.0` for humans.
    pub radius:       f32,
}

impl AgentSnapshotRow {
    pub fn from_view(trial: u32, tick: u64, elapsed_secs: u64, agent: &AgentView) -> Self {
        let (sick, radius) = match agent.marker {
            Marker::Status(status) => (status.is_sick(), 0.0),
            Marker::Radius(radius) => (false, radius),
        };
        Self {
            trial,
            tick,
            elapsed_secs,
            agent_id: agent.id.0,
            kind: agent.kind,
            x: agent.position.x,
            y: agent.position.y,
            sick,
            radius,
        }
    }
}

/// A human's aggregate result for one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanResultRow {
    pub trial:           u32,
    pub agent_id:        u32,
    pub secondary_cases: u32,
    pub animal_hazard:   f64,
    pub human_hazard:    f64,
    pub p_zoonotic:      f64,
    pub episodes:        u32,
}

impl HumanResultRow {
    /// One row per human, ascending id.
    pub fn from_outcome(outcome: &TrialOutcome) -> Vec<Self> {
        outcome
            .results
            .iter()
            .map(|(id, r)| Self {
                trial:           outcome.trial.0,
                agent_id:        id.0,
                secondary_cases: r.secondary_cases,
                animal_hazard:   r.animal_hazard,
                human_hazard:    r.human_hazard,
                p_zoonotic:      r.p_zoonotic,
                episodes:        r.episodes as u32,
            })
            .collect()
    }
}

/// One sickness episode of one human in one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeRow {
    pub trial:           u32,
    pub agent_id:        u32,
    /// Position of the episode in the human's history, from 0.
    pub episode:         u32,
    pub start_tick:      u64,
    /// `None` while the episode was still ongoing at the end of the run.
    pub end_tick:        Option<u64>,
    pub animal_hazard:   f64,
    pub human_hazard:    f64,
    pub secondary_cases: u32,
    pub p_zoonotic:      f64,
}

impl EpisodeRow {
    pub fn from_outcome(outcome: &TrialOutcome) -> Vec<Self> {
        outcome
            .episodes
            .iter()
            .flat_map(|(id, episodes)| {
                episodes.iter().enumerate().map(move |(n, e)| Self {
                    trial:           outcome.trial.0,
                    agent_id:        id.0,
                    episode:         n as u32,
                    start_tick:      e.start.0,
                    end_tick:        e.end.map(|t| t.0),
                    animal_hazard:   e.exposure_at_onset.from_animals,
                    human_hazard:    e.exposure_at_onset.from_humans,
                    secondary_cases: e.secondary_cases,
                    p_zoonotic:      e.p_zoonotic,
                })
            })
            .collect()
    }
}

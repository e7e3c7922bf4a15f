//! Agent construction requests and their conversion into a `Population`.
//!
//! Requests carry times in real seconds; [`Scenario::build_population`]
//! converts them to ticks with [`seconds_to_ticks`] (truncating).  Two
//! waypoints that land on the same tick collapse to the later one.

use std::collections::BTreeMap;

use zv_agent::{AnimalReservoir, Human, Population, PopulationBuilder};
use zv_core::{AgentId, HealthStatus, Position, Tick, seconds_to_ticks};

use crate::ScenarioResult;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub time_secs: f64,
    pub position:  Position,
}

impl Waypoint {
    pub fn new(time_secs: f64, x: f32, y: f32) -> Self {
        Self { time_secs, position: Position::new(x, y) }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SelfReport {
    pub time_secs: f64,
    pub status:    HealthStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HumanSpec {
    pub id:        AgentId,
    pub waypoints: Vec<Waypoint>,
    pub reports:   Vec<SelfReport>,
}

impl HumanSpec {
    pub fn build(&self, tick_duration_secs: u32) -> Human {
        let reports = self
            .reports
            .iter()
            .map(|r| (seconds_to_ticks(r.time_secs, tick_duration_secs), r.status))
            .collect();
        Human::new(self.id, trajectory(&self.waypoints, tick_duration_secs)).with_self_reports(reports)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReservoirSpec {
    pub id:          AgentId,
    pub waypoints:   Vec<Waypoint>,
    pub radius:      f32,
    pub hazard_rate: f64,
}

impl ReservoirSpec {
    pub fn build(&self, tick_duration_secs: u32) -> AnimalReservoir {
        AnimalReservoir::new(
            self.id,
            trajectory(&self.waypoints, tick_duration_secs),
            self.radius,
            self.hazard_rate,
        )
    }
}

/// A named set of construction requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    pub name:       String,
    pub humans:     Vec<HumanSpec>,
    pub reservoirs: Vec<ReservoirSpec>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Build the template population: humans first, then reservoirs, each in
    /// request order.  Duplicate ids are an error.
    pub fn build_population(&self, tick_duration_secs: u32) -> ScenarioResult<Population> {
        let mut builder = PopulationBuilder::new();
        for h in &self.humans {
            builder = builder.human(h.build(tick_duration_secs));
        }
        for r in &self.reservoirs {
            builder = builder.reservoir(r.build(tick_duration_secs));
        }
        let population = builder.build()?;
        log::info!(
            "scenario {}: {} humans, {} reservoirs",
            self.name,
            self.humans.len(),
            self.reservoirs.len()
        );
        Ok(population)
    }
}

fn trajectory(waypoints: &[Waypoint], tick_duration_secs: u32) -> BTreeMap<Tick, Position> {
    waypoints
        .iter()
        .map(|w| (seconds_to_ticks(w.time_secs, tick_duration_secs), w.position))
        .collect()
}

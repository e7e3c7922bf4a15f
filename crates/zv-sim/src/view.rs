//! Read-only renderer view of the simulation state.

use zv_agent::{Agent, AgentKind, Population};
use zv_core::{AgentId, HealthStatus, Position, Tick};

/// What a renderer paints next to an agent's position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Marker {
    /// Humans: current health status.
    Status(HealthStatus),
    /// Reservoirs: radius of influence.
    Radius(f32),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:       AgentId,
    pub kind:     AgentKind,
    pub position: Position,
    pub marker:   Marker,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        let marker = match agent {
            Agent::Human(h)     => Marker::Status(h.status),
            Agent::Reservoir(r) => Marker::Radius(r.radius),
        };
        Self {
            id:       agent.id(),
            kind:     agent.kind(),
            position: agent.position(),
            marker,
        }
    }
}

/// Snapshot handed to [`SimObserver::on_snapshot`][crate::SimObserver::on_snapshot].
///
/// Borrows the population immutably, so holding a view prevents the
/// simulation from advancing.
#[derive(Copy, Clone)]
pub struct SimView<'a> {
    pub tick:         Tick,
    pub elapsed_secs: u64,
    population:       &'a Population,
}

impl<'a> SimView<'a> {
    pub(crate) fn new(tick: Tick, elapsed_secs: u64, population: &'a Population) -> Self {
        Self { tick, elapsed_secs, population }
    }

    /// Every agent in population order.
    pub fn agents(&self) -> impl Iterator<Item = AgentView> + 'a {
        let population: &'a Population = self.population;
        population.iter().map(AgentView::from)
    }

    pub fn agent_count(&self) -> usize {
        self.population.len()
    }
}

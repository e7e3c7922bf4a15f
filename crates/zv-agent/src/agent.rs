//! The tagged agent variant stored in the population.
//!
//! Kind-specific behaviour (motion strategy, contact geometry, status) is
//! selected by matching on [`Agent`] at the call site.

use std::collections::BTreeMap;
use std::fmt;

use zv_core::{AgentId, HealthStatus, Position, Tick};

use crate::{AnimalReservoir, ExposureState, Human};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentKind {
    Human,
    Reservoir,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Human     => "human",
            AgentKind::Reservoir => "reservoir",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum Agent {
    Human(Human),
    Reservoir(AnimalReservoir),
}

impl Agent {
    #[inline]
    pub fn id(&self) -> AgentId {
        match self {
            Agent::Human(h)     => h.id,
            Agent::Reservoir(r) => r.id,
        }
    }

    #[inline]
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Human(_)     => AgentKind::Human,
            Agent::Reservoir(_) => AgentKind::Reservoir,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        match self {
            Agent::Human(h)     => h.position,
            Agent::Reservoir(r) => r.position,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        match self {
            Agent::Human(h)     => h.position = position,
            Agent::Reservoir(r) => r.position = position,
        }
    }

    pub fn waypoints(&self) -> &BTreeMap<Tick, Position> {
        match self {
            Agent::Human(h)     => &h.waypoints,
            Agent::Reservoir(r) => &r.waypoints,
        }
    }

    pub fn exposure(&self) -> &ExposureState {
        match self {
            Agent::Human(h)     => &h.exposure,
            Agent::Reservoir(r) => &r.exposure,
        }
    }

    /// Hazard currently emitted to others.
    #[inline]
    pub fn emitted(&self) -> f64 {
        self.exposure().emitted
    }

    /// Health status; `None` for reservoirs.
    #[inline]
    pub fn status(&self) -> Option<HealthStatus> {
        match self {
            Agent::Human(h)     => Some(h.status),
            Agent::Reservoir(_) => None,
        }
    }

    pub fn as_human(&self) -> Option<&Human> {
        match self {
            Agent::Human(h) => Some(h),
            Agent::Reservoir(_) => None,
        }
    }

    pub fn as_human_mut(&mut self) -> Option<&mut Human> {
        match self {
            Agent::Human(h) => Some(h),
            Agent::Reservoir(_) => None,
        }
    }

    pub fn as_reservoir(&self) -> Option<&AnimalReservoir> {
        match self {
            Agent::Reservoir(r) => Some(r),
            Agent::Human(_) => None,
        }
    }
}

impl From<Human> for Agent {
    fn from(h: Human) -> Self {
        Agent::Human(h)
    }
}

impl From<AnimalReservoir> for Agent {
    fn from(r: AnimalReservoir) -> Self {
        Agent::Reservoir(r)
    }
}

//! The animal reservoir agent variant.

use std::collections::BTreeMap;

use zv_core::{AgentId, Position, Tick};

use crate::ExposureState;

/// A stationary-between-waypoints animal population emitting a fixed hazard
/// to any human inside its radius.
#[derive(Clone, Debug)]
pub struct AnimalReservoir {
    pub id: AgentId,
    pub position: Position,
    /// Scripted migration points, tick → position.
    pub waypoints: BTreeMap<Tick, Position>,
    /// Radius of influence, inclusive.
    pub radius: f32,
    pub hazard_rate: f64,
    /// `emitted` is pinned to `hazard_rate`; the received accumulators stay 0.
    pub exposure: ExposureState,
}

impl AnimalReservoir {
    pub fn new(id: AgentId, waypoints: BTreeMap<Tick, Position>, radius: f32, hazard_rate: f64) -> Self {
        let position = waypoints.values().next().copied().unwrap_or(Position::ORIGIN);
        Self {
            id,
            position,
            waypoints,
            radius,
            hazard_rate,
            exposure: ExposureState { emitted: hazard_rate, ..ExposureState::default() },
        }
    }

    /// `true` if `point` lies within the radius of influence.
    #[inline]
    pub fn reaches(&self, point: Position) -> bool {
        self.position.distance(point) <= self.radius
    }
}

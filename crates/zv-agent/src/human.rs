//! The human agent variant.

use std::collections::BTreeMap;
use std::ops::Bound;

use zv_core::{AgentId, HealthStatus, Position, Tick};

use crate::{ContactLog, ExposureState, SicknessEpisode};

/// A mobile human with health status, contact history and sickness episodes.
#[derive(Clone, Debug)]
pub struct Human {
    pub id: AgentId,
    pub position: Position,
    /// Scripted trajectory, tick → position.
    pub waypoints: BTreeMap<Tick, Position>,
    /// Forced status overrides, tick → status.
    pub self_reports: BTreeMap<Tick, HealthStatus>,
    pub status: HealthStatus,
    /// Status at the end of the previous update; used to detect transitions.
    pub prev_status: HealthStatus,
    pub exposure: ExposureState,
    pub contacts: ContactLog,
    /// Append-only, start-ordered.
    pub episodes: Vec<SicknessEpisode>,
}

impl Human {
    /// A healthy human placed at its first waypoint (or the origin if the
    /// trajectory is empty).
    pub fn new(id: AgentId, waypoints: BTreeMap<Tick, Position>) -> Self {
        let position = waypoints.values().next().copied().unwrap_or(Position::ORIGIN);
        Self {
            id,
            position,
            waypoints,
            self_reports: BTreeMap::new(),
            status: HealthStatus::Healthy,
            prev_status: HealthStatus::Healthy,
            exposure: ExposureState::default(),
            contacts: ContactLog::new(),
            episodes: Vec::new(),
        }
    }

    pub fn with_self_reports(mut self, reports: BTreeMap<Tick, HealthStatus>) -> Self {
        self.self_reports = reports;
        self
    }

    #[inline]
    pub fn is_sick(&self) -> bool {
        self.status.is_sick()
    }

    /// Scripted position at exactly `now`.
    #[inline]
    pub fn waypoint_at(&self, now: Tick) -> Option<Position> {
        self.waypoints.get(&now).copied()
    }

    /// The first scripted waypoint strictly after `now`.
    pub fn next_waypoint_after(&self, now: Tick) -> Option<(Tick, Position)> {
        self.waypoints
            .range((Bound::Excluded(now), Bound::Unbounded))
            .next()
            .map(|(&t, &p)| (t, p))
    }

    #[inline]
    pub fn self_report_at(&self, now: Tick) -> Option<HealthStatus> {
        self.self_reports.get(&now).copied()
    }

    /// The ongoing episode, if the last one has not been closed.
    pub fn current_episode(&self) -> Option<&SicknessEpisode> {
        self.episodes.last().filter(|e| e.is_ongoing())
    }

    pub fn current_episode_mut(&mut self) -> Option<&mut SicknessEpisode> {
        self.episodes.last_mut().filter(|e| e.is_ongoing())
    }

    /// `true` if any episode started at or after `since`.
    pub fn has_episode_since(&self, since: Tick) -> bool {
        self.episodes.iter().any(|e| e.start >= since)
    }
}

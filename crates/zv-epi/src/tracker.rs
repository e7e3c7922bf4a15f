//! Contact Tracker: proximity tests and interval maintenance.
//!
//! Tracking runs in two phases so the population can be read while a single
//! human's contact log is written:
//!
//! 1. [`ContactTracker::observe`] borrows the population immutably and
//!    measures the human against every other agent.
//! 2. [`ContactTracker::apply`] folds those observations into the human's
//!    [`ContactLog`].
//!
//! Human–human pairs use the configured threshold; human–reservoir pairs use
//! the reservoir's radius.  Both comparisons are inclusive.

use zv_agent::{Agent, AgentKind, ContactLog, ContactRecord, Population};
use zv_core::{AgentId, HealthStatus, Tick};

use crate::EpiResult;

/// One other agent as seen from the tracked human on this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Proximity {
    pub other:    AgentId,
    pub kind:     AgentKind,
    pub distance: f32,
    pub within:   bool,
    /// Current status; `None` for reservoirs.
    pub status:   Option<HealthStatus>,
    /// Hazard the other agent currently emits.
    pub emitted:  f64,
}

/// Counts of interval changes made by one [`ContactTracker::apply`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub opened:   usize,
    pub extended: usize,
    pub closed:   usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactTracker {
    /// Human–human proximity threshold.
    pub threshold: f32,
}

impl ContactTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Measure human `id` against every other agent, in population order.
    pub fn observe(&self, id: AgentId, population: &Population) -> EpiResult<Vec<Proximity>> {
        let me = population.human(id)?.position;
        let observed = population
            .iter()
            .filter(|other| other.id() != id)
            .map(|other| {
                let distance = me.distance(other.position());
                let within = match other {
                    Agent::Human(_)     => distance <= self.threshold,
                    Agent::Reservoir(r) => r.reaches(me),
                };
                Proximity {
                    other: other.id(),
                    kind: other.kind(),
                    distance,
                    within,
                    status: other.status(),
                    emitted: other.emitted(),
                }
            })
            .collect();
        Ok(observed)
    }

    /// Open, extend or close contacts in `log` according to `observed`.
    pub fn apply(&self, log: &mut ContactLog, observed: &[Proximity], now: Tick) -> ContactChanges {
        let mut changes = ContactChanges::default();
        for p in observed {
            let open = log.get_open(p.other).is_some();
            match (p.within, open) {
                (true, false) => {
                    log.begin(ContactRecord::open(p.other, p.status, now, p.distance));
                    log::trace!("contact with {} opened at {now} ({:.2})", p.other, p.distance);
                    changes.opened += 1;
                }
                (true, true) => {
                    log.extend(p.other, p.distance);
                    changes.extended += 1;
                }
                (false, true) => {
                    if let Some(closed) = log.close(p.other, now) {
                        log::trace!("contact closed: {closed}");
                    }
                    changes.closed += 1;
                }
                (false, false) => {}
            }
        }
        changes
    }
}

//! Contact intervals and the per-human contact log.
//!
//! A `ContactRecord` covers one maximal run of ticks during which a human
//! stayed within proximity of one other agent.  `ContactLog` holds at most
//! one *open* record per other agent and an archive of closed ones.
//!
//! # Archive ordering
//!
//! The archive is a `BTreeMap` keyed by `(start, other)`.  Iteration is
//! therefore start-tick ordered, and two contacts opened on the same tick
//! with different agents are both kept.  `archived_since(t)` is a range
//! query, so the windowed scan the sickness ledger runs every tick costs
//! O(log n + k) rather than a full walk.

use std::collections::BTreeMap;
use std::fmt;

use zv_core::{AgentId, HealthStatus, Tick};

// ── ContactRecord ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactRecord {
    pub other: AgentId,
    /// The other agent's status when the contact opened.  Never updated.
    /// `None` for reservoirs, which carry no status.
    pub other_status: Option<HealthStatus>,
    pub start: Tick,
    /// `None` while the contact is open.
    pub end: Option<Tick>,
    /// Sum of the per-tick distances observed while open.
    pub total_proximity: f32,
}

impl ContactRecord {
    /// A freshly opened contact seeded with the first measured distance.
    pub fn open(other: AgentId, other_status: Option<HealthStatus>, start: Tick, distance: f32) -> Self {
        Self {
            other,
            other_status,
            start,
            end: None,
            total_proximity: distance,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// `end - start`, or `None` while open.
    #[inline]
    pub fn duration(&self) -> Option<u64> {
        self.end.map(|end| end.since(self.start))
    }

    /// Mean distance over the closed interval.
    ///
    /// `None` while open and for zero-length contacts (`end == start`).
    pub fn average_proximity(&self) -> Option<f32> {
        match self.duration() {
            Some(d) if d > 0 => Some(self.total_proximity / d as f32),
            _ => None,
        }
    }

    /// Add one tick's distance to the running sum.
    #[inline]
    pub fn accumulate(&mut self, distance: f32) {
        self.total_proximity += distance;
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.other_status.map_or("-", HealthStatus::as_str);
        match self.end {
            Some(end) => write!(
                f,
                "{} ({status}) {}..{} proximity {:.2}",
                self.other, self.start, end, self.total_proximity
            ),
            None => write!(
                f,
                "{} ({status}) {}..open proximity {:.2}",
                self.other, self.start, self.total_proximity
            ),
        }
    }
}

// ── ContactLog ────────────────────────────────────────────────────────────────

/// Open contacts plus the start-ordered archive of closed ones.
#[derive(Clone, Debug, Default)]
pub struct ContactLog {
    open: BTreeMap<AgentId, ContactRecord>,
    archive: BTreeMap<(Tick, AgentId), ContactRecord>,
}

impl ContactLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The open contact with `other`, if any.
    #[inline]
    pub fn get_open(&self, other: AgentId) -> Option<&ContactRecord> {
        self.open.get(&other)
    }

    /// All open contacts in ascending other-id order.
    pub fn open_contacts(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.open.values()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Closed contacts in `(start, other)` order.
    pub fn archive(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.archive.values()
    }

    pub fn archived_count(&self) -> usize {
        self.archive.len()
    }

    /// Closed contacts whose start tick is `>= since`, in start order.
    pub fn archived_since(&self, since: Tick) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.archive.range((since, AgentId(0))..).map(|(_, r)| r)
    }

    /// Open a new contact.  Returns `false` (and changes nothing) if a
    /// contact with `record.other` is already open.
    pub fn begin(&mut self, record: ContactRecord) -> bool {
        if self.open.contains_key(&record.other) {
            return false;
        }
        self.open.insert(record.other, record);
        true
    }

    /// Add `distance` to the open contact with `other`.  Returns `false` if
    /// there is none.
    pub fn extend(&mut self, other: AgentId, distance: f32) -> bool {
        match self.open.get_mut(&other) {
            Some(record) => {
                record.accumulate(distance);
                true
            }
            None => false,
        }
    }

    /// Close the open contact with `other` at tick `end` and archive it.
    ///
    /// Returns the archived record, or `None` if no contact was open.  `end`
    /// is clamped to the start tick so an archived interval is never
    /// negative.
    pub fn close(&mut self, other: AgentId, end: Tick) -> Option<&ContactRecord> {
        let mut record = self.open.remove(&other)?;
        record.end = Some(end.max(record.start));
        let key = (record.start, other);
        self.archive.insert(key, record);
        self.archive.get(&key)
    }
}

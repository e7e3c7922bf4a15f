//! Immutable simulation configuration.
//!
//! Every tunable the engine reads (proximity threshold, hazard decay, spread
//! flag, estimator constants, …) lives in one `SimConfig` value that is
//! handed to the simulation at construction and never mutated afterwards.
//! Two trials with equal configs and equal populations behave identically.

use crate::time::{DEFAULT_TICK_DURATION_SECS, Tick, seconds_to_ticks};
use crate::{ZvError, ZvResult};

// ── SecondaryCaseRule ─────────────────────────────────────────────────────────

/// How the sickness ledger counts secondary cases for an episode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SecondaryCaseRule {
    /// Stop scanning the contact archive at the first qualifying contact, so
    /// an episode records at most one secondary case.
    #[default]
    FirstMatch,
    /// Count every qualifying archived contact.
    EveryContact,
}

impl SecondaryCaseRule {
    pub fn as_str(self) -> &'static str {
        match self {
            SecondaryCaseRule::FirstMatch   => "first_match",
            SecondaryCaseRule::EveryContact => "every_contact",
        }
    }
}

impl std::fmt::Display for SecondaryCaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the driver (feature `serde`; missing
/// fields take their [`Default`] values) and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    // ── Clock ─────────────────────────────────────────────────────────────
    /// Simulated seconds per tick.  Default: 10.
    pub tick_duration_secs: u32,

    /// A trial processes ticks `0..=seconds_to_ticks(duration_secs)`.
    /// Default: 600 (61 ticks at 10 s/tick).
    pub duration_secs: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Report a renderer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    // ── Contact tracker ───────────────────────────────────────────────────
    /// Human–human proximity threshold in plane units.  Default: 20.
    pub proximity_threshold: f32,

    // ── Hazard model ──────────────────────────────────────────────────────
    /// Multiplicative decay applied to received hazard every tick.  Default: 0.99.
    pub hazard_decay: f64,

    /// Hazard emitted by a healthy human.  Default: 0.
    pub healthy_emission: f64,

    /// Hazard emitted by a sick human.  Default: 0.7.
    pub sick_emission: f64,

    /// When `false` (default) hazard never makes anyone sick; only
    /// self-reports change status.
    pub simulate_spread: bool,

    // ── Motion ────────────────────────────────────────────────────────────
    /// Bound of the uniform per-axis jitter added between waypoints.  Default: 8.
    pub motion_jitter: i32,

    // ── Sickness ledger ───────────────────────────────────────────────────
    /// Look-back window before episode onset, in seconds.  Default: 300.
    pub incubation_secs: u64,

    pub secondary_case_rule: SecondaryCaseRule,

    // ── Zoonotic estimator ────────────────────────────────────────────────
    /// Prior probability that an episode is zoonotic.  Default: 0.01.
    pub prior_zoonotic: f64,

    /// Expected secondary cases of a zoonotic episode.  Default: 0.1.
    pub lambda_zoonotic: f64,

    /// Expected secondary cases of a human-acquired episode.  Default: 2.0.
    pub lambda_human: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:    DEFAULT_TICK_DURATION_SECS,
            duration_secs:         600,
            seed:                  42,
            output_interval_ticks: 1,
            proximity_threshold:   20.0,
            hazard_decay:          0.99,
            healthy_emission:      0.0,
            sick_emission:         0.7,
            simulate_spread:       false,
            motion_jitter:         8,
            incubation_secs:       300,
            secondary_case_rule:   SecondaryCaseRule::FirstMatch,
            prior_zoonotic:        0.01,
            lambda_zoonotic:       0.1,
            lambda_human:          2.0,
        }
    }
}

impl SimConfig {
    /// The last tick a full run processes (inclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        seconds_to_ticks(self.duration_secs as f64, self.tick_duration_secs)
    }

    /// The incubation window expressed in ticks.
    #[inline]
    pub fn incubation_ticks(&self) -> u64 {
        seconds_to_ticks(self.incubation_secs as f64, self.tick_duration_secs).0
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> crate::SimClock {
        crate::SimClock::new(self.tick_duration_secs)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> ZvResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(ZvError::Config("tick_duration_secs must be positive".into()));
        }
        if !self.proximity_threshold.is_finite() || self.proximity_threshold < 0.0 {
            return Err(ZvError::Config(format!(
                "proximity_threshold must be a non-negative number, got {}",
                self.proximity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.hazard_decay) {
            return Err(ZvError::Config(format!(
                "hazard_decay must lie in [0, 1], got {}",
                self.hazard_decay
            )));
        }
        if !(0.0..=1.0).contains(&self.prior_zoonotic) {
            return Err(ZvError::Config(format!(
                "prior_zoonotic must lie in [0, 1], got {}",
                self.prior_zoonotic
            )));
        }
        for (name, value) in [
            ("healthy_emission", self.healthy_emission),
            ("sick_emission",    self.sick_emission),
            ("lambda_zoonotic",  self.lambda_zoonotic),
            ("lambda_human",     self.lambda_human),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ZvError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.motion_jitter < 0 {
            return Err(ZvError::Config(format!(
                "motion_jitter must be non-negative, got {}",
                self.motion_jitter
            )));
        }
        Ok(())
    }
}

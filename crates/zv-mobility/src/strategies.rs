//! Built-in motion strategies.

use zv_agent::Human;
use zv_core::{AgentRng, Tick};

use crate::MotionModel;

// ── NoisyInterpolation ────────────────────────────────────────────────────────

/// Step toward the next scripted waypoint with integer jitter on each axis.
///
/// Each tick the human covers `1 / (t_next - now)` of the remaining
/// displacement, then `x` and `y` each receive an independent uniform
/// integer in `[-jitter, +jitter]`.  Because the remaining displacement is
/// re-measured every tick, the jitter does not accumulate into drift; the
/// scripted waypoint still snaps the human into place on arrival.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoisyInterpolation {
    pub jitter: i32,
}

impl NoisyInterpolation {
    pub const NAME: &'static str = "h_noisy_interp";

    pub fn new(jitter: i32) -> Self {
        Self { jitter }
    }
}

impl Default for NoisyInterpolation {
    fn default() -> Self {
        Self { jitter: 8 }
    }
}

impl MotionModel for NoisyInterpolation {
    fn move_human(&self, human: &mut Human, now: Tick, rng: &mut AgentRng) {
        let Some((next_tick, target)) = human.next_waypoint_after(now) else {
            return;
        };
        let remaining = next_tick.since(now) as f32;
        let dx = (target.x - human.position.x) / remaining + rng.jitter(self.jitter);
        let dy = (target.y - human.position.y) / remaining + rng.jitter(self.jitter);
        human.position = human.position.offset(dx, dy);
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

// ── Stationary ────────────────────────────────────────────────────────────────

/// Agents only move when a scripted waypoint says so.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stationary;

impl MotionModel for Stationary {
    fn move_human(&self, _human: &mut Human, _now: Tick, _rng: &mut AgentRng) {}

    fn name(&self) -> &str {
        "stationary"
    }
}

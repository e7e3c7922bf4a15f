//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to real (simulated) seconds is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Datasets are written in real seconds and converted to ticks with
//! [`seconds_to_ticks`], which truncates: with the default 10 s tick a
//! waypoint at 305 s lands on tick 30.  Two waypoints that truncate to the
//! same tick collapse into one (the later one wins).

use std::fmt;

/// Default resolution: one tick is ten simulated seconds.
pub const DEFAULT_TICK_DURATION_SECS: u32 = 10;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps before `self`, stopping at tick 0.
    #[inline]
    pub fn saturating_back(self, n: u64) -> Tick {
        Tick(self.0.saturating_sub(n))
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Convert real seconds to a tick, truncating toward zero.
///
/// Negative or non-finite inputs map to tick 0.
pub fn seconds_to_ticks(secs: f64, tick_duration_secs: u32) -> Tick {
    if !secs.is_finite() || secs <= 0.0 || tick_duration_secs == 0 {
        return Tick::ZERO;
    }
    Tick((secs / tick_duration_secs as f64) as u64)
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to elapsed simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.  Default: 10.
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// Break elapsed time into (minutes, seconds).  Handy for log lines.
    pub fn elapsed_ms(&self) -> (u64, u64) {
        let total = self.elapsed_secs();
        (total / 60, total % 60)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        SimClock::new(DEFAULT_TICK_DURATION_SECS)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({}m{:02}s)", self.current_tick, m, s)
    }
}

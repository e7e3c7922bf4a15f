//! Per-agent hazard bookkeeping.

use std::fmt;

/// Emitted and received hazard for one agent.
///
/// The two received accumulators are leaky integrators: the hazard model
/// multiplies them by the decay factor every tick before adding the hazard
/// emitted by whatever is currently in contact.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureState {
    /// Hazard this agent currently emits to others.
    pub emitted: f64,
    /// Accumulated hazard received from animal reservoirs.
    pub from_animals: f64,
    /// Accumulated hazard received from other humans.
    pub from_humans: f64,
}

impl ExposureState {
    /// Total experienced hazard (`from_animals + from_humans`).
    #[inline]
    pub fn total(&self) -> f64 {
        self.from_animals + self.from_humans
    }

    /// Scale both received accumulators by `factor`.  `emitted` is untouched.
    #[inline]
    pub fn decay(&mut self, factor: f64) {
        self.from_animals *= factor;
        self.from_humans *= factor;
    }
}

impl fmt::Display for ExposureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "emitted {:.4}, from animals {:.4}, from humans {:.4}",
            self.emitted, self.from_animals, self.from_humans
        )
    }
}

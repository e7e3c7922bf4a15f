//! Sickness episode records.

use std::fmt;

use zv_core::Tick;

use crate::ExposureState;

/// One contiguous interval during which a human was sick.
///
/// `secondary_cases` and `p_zoonotic` are live values: the sickness ledger
/// recomputes them every tick while the episode is ongoing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SicknessEpisode {
    pub start: Tick,
    /// `None` while ongoing.
    pub end: Option<Tick>,
    /// Copy of the human's exposure on the onset tick.
    pub exposure_at_onset: ExposureState,
    pub secondary_cases: u32,
    /// Posterior probability of zoonotic origin.
    pub p_zoonotic: f64,
}

impl SicknessEpisode {
    pub fn open(start: Tick, exposure_at_onset: ExposureState) -> Self {
        Self {
            start,
            end: None,
            exposure_at_onset,
            secondary_cases: 0,
            p_zoonotic: 0.0,
        }
    }

    #[inline]
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for SicknessEpisode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..", self.start)?;
        match self.end {
            Some(end) => write!(f, "{end}")?,
            None => f.write_str("ongoing")?,
        }
        write!(
            f,
            " | animal hazard {:.4}, human hazard {:.4} | secondary cases {} | p_zoonotic {:.4}",
            self.exposure_at_onset.from_animals,
            self.exposure_at_onset.from_humans,
            self.secondary_cases,
            self.p_zoonotic
        )
    }
}

//! Per-human aggregate results.

use zv_agent::SicknessEpisode;

/// A human's summary after (or during) a trial.
///
/// `secondary_cases` is summed over all episodes; the hazard snapshot and
/// posterior come from the last episode only.  A human who was never sick
/// reports all zeros.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HumanResult {
    pub secondary_cases: u32,
    pub animal_hazard:   f64,
    pub human_hazard:    f64,
    pub p_zoonotic:      f64,
    pub episodes:        usize,
}

impl HumanResult {
    pub fn from_episodes(episodes: &[SicknessEpisode]) -> Self {
        let secondary_cases = episodes.iter().map(|e| e.secondary_cases).sum();
        match episodes.last() {
            Some(last) => Self {
                secondary_cases,
                animal_hazard: last.exposure_at_onset.from_animals,
                human_hazard:  last.exposure_at_onset.from_humans,
                p_zoonotic:    last.p_zoonotic,
                episodes:      episodes.len(),
            },
            None => Self::default(),
        }
    }
}

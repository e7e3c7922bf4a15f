//! Per-metric result matrices.
//!
//! One file per metric, named `<run>_<metric>.csv`.  Each row is one human
//! (ascending id) and each column one trial (trial order); values are
//! comma-separated with no header, ready for `numpy.loadtxt`.  A human
//! missing from a trial's results reads as `0`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use zv_core::AgentId;
use zv_sim::{HumanResult, TrialOutcome};

use crate::OutputResult;

/// A per-human quantity tabulated across trials.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    SecondaryCases,
    AnimalHazard,
    HumanHazard,
    PZoonotic,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::SecondaryCases,
        Metric::AnimalHazard,
        Metric::HumanHazard,
        Metric::PZoonotic,
    ];

    /// File-name component of the metric.
    pub fn file_stem(self) -> &'static str {
        match self {
            Metric::SecondaryCases => "Secondary_Cases",
            Metric::AnimalHazard   => "Animal_Hazard___Sickness",
            Metric::HumanHazard    => "Human_Hazard___Sickness",
            Metric::PZoonotic      => "P_Zoonotic",
        }
    }

    pub fn value(self, result: &HumanResult) -> f64 {
        match self {
            Metric::SecondaryCases => result.secondary_cases as f64,
            Metric::AnimalHazard   => result.animal_hazard,
            Metric::HumanHazard    => result.human_hazard,
            Metric::PZoonotic      => result.p_zoonotic,
        }
    }
}

/// Humans × trials table of `metric`.
pub fn metric_table(outcomes: &[TrialOutcome], metric: Metric) -> Vec<(AgentId, Vec<f64>)> {
    let humans: BTreeSet<AgentId> = outcomes.iter().flat_map(|o| o.results.keys().copied()).collect();
    humans
        .into_iter()
        .map(|id| {
            let row = outcomes
                .iter()
                .map(|o| o.results.get(&id).map_or(0.0, |r| metric.value(r)))
                .collect();
            (id, row)
        })
        .collect()
}

/// Write one matrix for `metric` into `dir`; returns the file path.
pub fn write_metric_matrix(dir: &Path, run: &str, outcomes: &[TrialOutcome], metric: Metric) -> OutputResult<PathBuf> {
    let path = dir.join(format!("{run}_{}.csv", metric.file_stem()));
    let mut w = WriterBuilder::new().has_headers(false).from_path(&path)?;
    for (_, row) in metric_table(outcomes, metric) {
        w.write_record(row.iter().map(f64::to_string))?;
    }
    w.flush()?;
    Ok(path)
}

/// Write all four metric matrices into `dir`.
pub fn write_metric_matrices(dir: &Path, run: &str, outcomes: &[TrialOutcome]) -> OutputResult<Vec<PathBuf>> {
    let paths = Metric::ALL
        .iter()
        .map(|&m| write_metric_matrix(dir, run, outcomes, m))
        .collect::<OutputResult<Vec<_>>>()?;
    log::info!("wrote {} metric matrices for {} trials to {}", paths.len(), outcomes.len(), dir.display());
    Ok(paths)
}

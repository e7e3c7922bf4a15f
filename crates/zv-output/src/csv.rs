//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `human_results.csv`
//! - `sickness_episodes.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, EpisodeRow, HumanResultRow, OutputResult};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    results:   Writer<File>,
    episodes:  Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut results = Writer::from_path(dir.join("human_results.csv"))?;
        results.write_record([
            "trial", "agent_id", "secondary_cases", "animal_hazard", "human_hazard", "p_zoonotic", "episodes",
        ])?;

        let mut episodes = Writer::from_path(dir.join("sickness_episodes.csv"))?;
        episodes.write_record([
            "trial", "agent_id", "episode", "start_tick", "end_tick",
            "animal_hazard", "human_hazard", "secondary_cases", "p_zoonotic",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "trial", "tick", "elapsed_secs", "agent_id", "kind", "x", "y", "sick", "radius",
        ])?;

        Ok(Self {
            results,
            episodes,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.trial.to_string(),
                row.tick.to_string(),
                row.elapsed_secs.to_string(),
                row.agent_id.to_string(),
                row.kind.as_str().to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.sick as u8).to_string(),
                row.radius.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_results(&mut self, rows: &[HumanResultRow]) -> OutputResult<()> {
        for row in rows {
            self.results.write_record(&[
                row.trial.to_string(),
                row.agent_id.to_string(),
                row.secondary_cases.to_string(),
                row.animal_hazard.to_string(),
                row.human_hazard.to_string(),
                row.p_zoonotic.to_string(),
                row.episodes.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        for row in rows {
            self.episodes.write_record(&[
                row.trial.to_string(),
                row.agent_id.to_string(),
                row.episode.to_string(),
                row.start_tick.to_string(),
                row.end_tick.map(|t| t.to_string()).unwrap_or_default(),
                row.animal_hazard.to_string(),
                row.human_hazard.to_string(),
                row.secondary_cases.to_string(),
                row.p_zoonotic.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.results.flush()?;
        self.episodes.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}

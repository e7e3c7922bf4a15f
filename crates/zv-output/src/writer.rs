//! The `OutputWriter` trait implemented by all backend writers.

use zv_sim::TrialOutcome;

use crate::{AgentSnapshotRow, EpisodeRow, HumanResultRow, OutputResult};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// When driven by [`SimOutputObserver`][crate::SimOutputObserver], errors are
/// stored in the observer and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write per-human aggregate results.
    fn write_results(&mut self, rows: &[HumanResultRow]) -> OutputResult<()>;

    /// Write sickness episodes.
    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write both long-form tables for one finished trial.
    fn write_outcome(&mut self, outcome: &TrialOutcome) -> OutputResult<()> {
        self.write_results(&HumanResultRow::from_outcome(outcome))?;
        self.write_episodes(&EpisodeRow::from_outcome(outcome))
    }
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        (**self).write_snapshots(rows)
    }

    fn write_results(&mut self, rows: &[HumanResultRow]) -> OutputResult<()> {
        (**self).write_results(rows)
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        (**self).write_episodes(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

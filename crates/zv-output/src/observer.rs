//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use zv_core::{Tick, TrialId};
use zv_sim::{SimObserver, SimView};

use crate::row::AgentSnapshotRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes renderer snapshots to any [`OutputWriter`]
/// backend (CSV, SQLite, Parquet, …).
///
/// One observer can follow several trials in sequence: call
/// [`begin_trial`][Self::begin_trial] before each run.  The writer is not
/// finished at the end of a run, so the caller can append trial outcomes
/// afterwards and finish it once.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    trial:      TrialId,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, trial: TrialId) -> Self {
        Self {
            writer,
            trial,
            rows:       0,
            last_error: None,
        }
    }

    /// Tag subsequent snapshot rows with `trial`.
    pub fn begin_trial(&mut self, trial: TrialId) {
        self.trial = trial;
    }

    /// Snapshot rows written so far, across all trials.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to append outcomes and finish it).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, view: &SimView<'_>) {
        let rows: Vec<AgentSnapshotRow> = view
            .agents()
            .map(|a| AgentSnapshotRow::from_view(self.trial.0, view.tick.0, view.elapsed_secs, &a))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            if result.is_ok() {
                self.rows += rows.len();
            }
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::debug!("trial {} ended at {final_tick}; {} snapshot rows so far", self.trial.0, self.rows);
    }
}

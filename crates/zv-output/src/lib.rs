//! `zv-output`: result writers for `zv-sim`.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                                         |
//! |-----------|-------------|-----------------------------------------------------------------------|
//! | *(none)*  | CSV         | `human_results.csv`, `sickness_episodes.csv`, `agent_snapshots.csv`   |
//! | `sqlite`  | SQLite      | `output.db`                                                           |
//! | `parquet` | Parquet     | `human_results.parquet`, `sickness_episodes.parquet`, `agent_snapshots.parquet` |
//!
//! All backends implement [`OutputWriter`].  Snapshots are fed by
//! [`SimOutputObserver`], which implements `zv_sim::SimObserver`; trial
//! outcomes go through [`OutputWriter::write_outcome`].  The [`matrix`]
//! module writes the per-metric humans × trials matrices.
//!
//! # Usage
//!
//! ```rust,ignore
//! use zv_output::{CsvWriter, OutputWriter, write_metric_matrices};
//!
//! let outcomes = zv_sim::run_trials(&template, &config, &motion, 10)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! for outcome in &outcomes {
//!     writer.write_outcome(outcome)?;
//! }
//! writer.finish()?;
//! write_metric_matrices(Path::new("./output"), "run1", &outcomes)?;
//! ```

pub mod csv;
pub mod error;
pub mod matrix;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use matrix::{Metric, write_metric_matrices, write_metric_matrix};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, EpisodeRow, HumanResultRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;

//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `human_results`, `sickness_episodes` and `agent_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, EpisodeRow, HumanResultRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS human_results (
                 trial           INTEGER NOT NULL,
                 agent_id        INTEGER NOT NULL,
                 secondary_cases INTEGER NOT NULL,
                 animal_hazard   REAL    NOT NULL,
                 human_hazard    REAL    NOT NULL,
                 p_zoonotic      REAL    NOT NULL,
                 episodes        INTEGER NOT NULL,
                 PRIMARY KEY (trial, agent_id)
             );
             CREATE TABLE IF NOT EXISTS sickness_episodes (
                 trial           INTEGER NOT NULL,
                 agent_id        INTEGER NOT NULL,
                 episode         INTEGER NOT NULL,
                 start_tick      INTEGER NOT NULL,
                 end_tick        INTEGER,
                 animal_hazard   REAL    NOT NULL,
                 human_hazard    REAL    NOT NULL,
                 secondary_cases INTEGER NOT NULL,
                 p_zoonotic      REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 trial        INTEGER NOT NULL,
                 tick         INTEGER NOT NULL,
                 elapsed_secs INTEGER NOT NULL,
                 agent_id     INTEGER NOT NULL,
                 kind         TEXT    NOT NULL,
                 x            REAL    NOT NULL,
                 y            REAL    NOT NULL,
                 sick         INTEGER NOT NULL,
                 radius       REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (trial, tick, elapsed_secs, agent_id, kind, x, y, sick, radius) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trial,
                    row.tick as i64,
                    row.elapsed_secs as i64,
                    row.agent_id,
                    row.kind.as_str(),
                    row.x as f64,
                    row.y as f64,
                    row.sick as i64,
                    row.radius as f64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_results(&mut self, rows: &[HumanResultRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO human_results \
                 (trial, agent_id, secondary_cases, animal_hazard, human_hazard, p_zoonotic, episodes) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trial,
                    row.agent_id,
                    row.secondary_cases,
                    row.animal_hazard,
                    row.human_hazard,
                    row.p_zoonotic,
                    row.episodes,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO sickness_episodes \
                 (trial, agent_id, episode, start_tick, end_tick, \
                  animal_hazard, human_hazard, secondary_cases, p_zoonotic) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trial,
                    row.agent_id,
                    row.episode,
                    row.start_tick as i64,
                    row.end_tick.map(|t| t as i64),
                    row.animal_hazard,
                    row.human_hazard,
                    row.secondary_cases,
                    row.p_zoonotic,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

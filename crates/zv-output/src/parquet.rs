//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `human_results.parquet`
//! - `sickness_episodes.parquet`
//! - `agent_snapshots.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    BooleanBuilder, Float32Builder, Float64Builder, StringBuilder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, EpisodeRow, HumanResultRow, OutputResult};

fn results_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("trial",           DataType::UInt32,  false),
        Field::new("agent_id",        DataType::UInt32,  false),
        Field::new("secondary_cases", DataType::UInt32,  false),
        Field::new("animal_hazard",   DataType::Float64, false),
        Field::new("human_hazard",    DataType::Float64, false),
        Field::new("p_zoonotic",      DataType::Float64, false),
        Field::new("episodes",        DataType::UInt32,  false),
    ]))
}

fn episodes_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("trial",           DataType::UInt32,  false),
        Field::new("agent_id",        DataType::UInt32,  false),
        Field::new("episode",         DataType::UInt32,  false),
        Field::new("start_tick",      DataType::UInt64,  false),
        Field::new("end_tick",        DataType::UInt64,  true),
        Field::new("animal_hazard",   DataType::Float64, false),
        Field::new("human_hazard",    DataType::Float64, false),
        Field::new("secondary_cases", DataType::UInt32,  false),
        Field::new("p_zoonotic",      DataType::Float64, false),
    ]))
}

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("trial",        DataType::UInt32,  false),
        Field::new("tick",         DataType::UInt64,  false),
        Field::new("elapsed_secs", DataType::UInt64,  false),
        Field::new("agent_id",     DataType::UInt32,  false),
        Field::new("kind",         DataType::Utf8,    false),
        Field::new("x",            DataType::Float32, false),
        Field::new("y",            DataType::Float32, false),
        Field::new("sick",         DataType::Boolean, false),
        Field::new("radius",       DataType::Float32, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    results:         Option<ArrowWriter<File>>,
    episodes:        Option<ArrowWriter<File>>,
    snapshots:       Option<ArrowWriter<File>>,
    results_schema:  Arc<Schema>,
    episodes_schema: Arc<Schema>,
    snap_schema:     Arc<Schema>,
}

impl ParquetWriter {
    /// Create all three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let results_schema = results_schema();
        let episodes_schema = episodes_schema();
        let snap_schema = snapshot_schema();

        Ok(Self {
            results:   Some(open(dir, "human_results.parquet", &results_schema)?),
            episodes:  Some(open(dir, "sickness_episodes.parquet", &episodes_schema)?),
            snapshots: Some(open(dir, "agent_snapshots.parquet", &snap_schema)?),
            results_schema,
            episodes_schema,
            snap_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut trials   = UInt32Builder::new();
        let mut ticks    = UInt64Builder::new();
        let mut elapsed  = UInt64Builder::new();
        let mut ids      = UInt32Builder::new();
        let mut kinds    = StringBuilder::new();
        let mut xs       = Float32Builder::new();
        let mut ys       = Float32Builder::new();
        let mut sick     = BooleanBuilder::new();
        let mut radii    = Float32Builder::new();

        for row in rows {
            trials.append_value(row.trial);
            ticks.append_value(row.tick);
            elapsed.append_value(row.elapsed_secs);
            ids.append_value(row.agent_id);
            kinds.append_value(row.kind.as_str());
            xs.append_value(row.x);
            ys.append_value(row.y);
            sick.append_value(row.sick);
            radii.append_value(row.radius);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(trials.finish()),
                Arc::new(ticks.finish()),
                Arc::new(elapsed.finish()),
                Arc::new(ids.finish()),
                Arc::new(kinds.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(sick.finish()),
                Arc::new(radii.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_results(&mut self, rows: &[HumanResultRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.results.as_mut() else {
            return Ok(());
        };

        let mut trials   = UInt32Builder::new();
        let mut ids      = UInt32Builder::new();
        let mut cases    = UInt32Builder::new();
        let mut animal   = Float64Builder::new();
        let mut human    = Float64Builder::new();
        let mut p        = Float64Builder::new();
        let mut episodes = UInt32Builder::new();

        for row in rows {
            trials.append_value(row.trial);
            ids.append_value(row.agent_id);
            cases.append_value(row.secondary_cases);
            animal.append_value(row.animal_hazard);
            human.append_value(row.human_hazard);
            p.append_value(row.p_zoonotic);
            episodes.append_value(row.episodes);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.results_schema),
            vec![
                Arc::new(trials.finish()),
                Arc::new(ids.finish()),
                Arc::new(cases.finish()),
                Arc::new(animal.finish()),
                Arc::new(human.finish()),
                Arc::new(p.finish()),
                Arc::new(episodes.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.episodes.as_mut() else {
            return Ok(());
        };

        let mut trials  = UInt32Builder::new();
        let mut ids     = UInt32Builder::new();
        let mut index   = UInt32Builder::new();
        let mut starts  = UInt64Builder::new();
        let mut ends    = UInt64Builder::new();
        let mut animal  = Float64Builder::new();
        let mut human   = Float64Builder::new();
        let mut cases   = UInt32Builder::new();
        let mut p       = Float64Builder::new();

        for row in rows {
            trials.append_value(row.trial);
            ids.append_value(row.agent_id);
            index.append_value(row.episode);
            starts.append_value(row.start_tick);
            ends.append_option(row.end_tick);
            animal.append_value(row.animal_hazard);
            human.append_value(row.human_hazard);
            cases.append_value(row.secondary_cases);
            p.append_value(row.p_zoonotic);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.episodes_schema),
            vec![
                Arc::new(trials.finish()),
                Arc::new(ids.finish()),
                Arc::new(index.finish()),
                Arc::new(starts.finish()),
                Arc::new(ends.finish()),
                Arc::new(animal.finish()),
                Arc::new(human.finish()),
                Arc::new(cases.finish()),
                Arc::new(p.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        for writer in [self.results.take(), self.episodes.take(), self.snapshots.take()]
            .into_iter()
            .flatten()
        {
            writer.close()?;
        }
        Ok(())
    }
}

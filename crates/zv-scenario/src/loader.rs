//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per waypoint or self-report.  Unused columns are left empty.
//!
//! ```csv
//! kind,agent_id,time_secs,x,y,status,radius,hazard_rate
//! human,0,0,50,150,,,
//! human,0,300,300,150,,,
//! report,0,310,,,sick,,
//! reservoir,100,0,200,150,,40,0.2
//! ```
//!
//! | `kind`      | Required columns                              |
//! |-------------|-----------------------------------------------|
//! | `human`     | `x`, `y`                                      |
//! | `report`    | `status` (`healthy` / `sick`)                 |
//! | `reservoir` | `x`, `y`, `radius`, `hazard_rate`             |
//!
//! Every row of one reservoir must carry the same `radius` and
//! `hazard_rate`.  A `report` row may name a human with no waypoints; that
//! human starts at the origin.  Agents are emitted in ascending id order.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use zv_core::{AgentId, HealthStatus, Position};

use crate::{HumanSpec, ReservoirSpec, Scenario, ScenarioError, ScenarioResult, SelfReport, Waypoint};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    kind:        String,
    agent_id:    u32,
    time_secs:   f64,
    x:           Option<f32>,
    y:           Option<f32>,
    status:      Option<String>,
    radius:      Option<f32>,
    hazard_rate: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a CSV file.  The scenario is named after the file
/// stem.
pub fn load_scenario_csv(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "custom".to_string());
    load_scenario_reader(file, name)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R, name: impl Into<String>) -> ScenarioResult<Scenario> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut humans: BTreeMap<u32, HumanSpec> = BTreeMap::new();
    let mut reservoirs: BTreeMap<u32, ReservoirSpec> = BTreeMap::new();

    for (line, result) in csv_reader.deserialize::<ScenarioRecord>().enumerate() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        // Header is line 1.
        let at = line + 2;
        match row.kind.to_ascii_lowercase().as_str() {
            "human" => {
                let waypoint = Waypoint { time_secs: row.time_secs, position: position(&row, at)? };
                human_entry(&mut humans, row.agent_id).waypoints.push(waypoint);
            }
            "report" => {
                let label = row.status.as_deref().unwrap_or("");
                let status = HealthStatus::parse(label).ok_or_else(|| {
                    ScenarioError::Parse(format!("line {at}: invalid status {label:?}"))
                })?;
                human_entry(&mut humans, row.agent_id)
                    .reports
                    .push(SelfReport { time_secs: row.time_secs, status });
            }
            "reservoir" => {
                let (Some(radius), Some(hazard_rate)) = (row.radius, row.hazard_rate) else {
                    return Err(ScenarioError::Parse(format!(
                        "line {at}: reservoir rows need radius and hazard_rate"
                    )));
                };
                let waypoint = Waypoint { time_secs: row.time_secs, position: position(&row, at)? };
                let spec = reservoirs.entry(row.agent_id).or_insert_with(|| ReservoirSpec {
                    id: AgentId(row.agent_id),
                    waypoints: Vec::new(),
                    radius,
                    hazard_rate,
                });
                if spec.radius != radius || spec.hazard_rate != hazard_rate {
                    return Err(ScenarioError::Parse(format!(
                        "line {at}: reservoir {} changes radius or hazard_rate",
                        row.agent_id
                    )));
                }
                spec.waypoints.push(waypoint);
            }
            other => {
                return Err(ScenarioError::Parse(format!(
                    "line {at}: unknown kind {other:?}: expected \"human\", \"report\" or \"reservoir\""
                )));
            }
        }
    }

    Ok(Scenario {
        name: name.into(),
        humans: humans.into_values().collect(),
        reservoirs: reservoirs.into_values().collect(),
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn human_entry(humans: &mut BTreeMap<u32, HumanSpec>, id: u32) -> &mut HumanSpec {
    humans.entry(id).or_insert_with(|| HumanSpec {
        id: AgentId(id),
        waypoints: Vec::new(),
        reports: Vec::new(),
    })
}

fn position(row: &ScenarioRecord, at: usize) -> ScenarioResult<Position> {
    match (row.x, row.y) {
        (Some(x), Some(y)) => Ok(Position::new(x, y)),
        _ => Err(ScenarioError::Parse(format!("line {at}: {} row needs x and y", row.kind))),
    }
}

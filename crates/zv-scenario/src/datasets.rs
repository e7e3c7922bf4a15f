//! Built-in scripted scenarios.
//!
//! Times are real seconds on a 600 × 600 field.  Reservoir ids start at
//! [`RESERVOIR_ID_OFFSET`] so they never collide with human ids.
//!
//! | Name | Humans | Reservoirs | Self-reports          |
//! |------|--------|------------|-----------------------|
//! | `RD` | 2      | 2          | H0 sick @310, H1 @450 |
//! | `D0` | 2      | 1          | H0 sick @380, H1 @500 |
//! | `D3` | 6      | 4          | none                  |
//! | `D4` | 2      | 2          | H0 sick @550, H1 @500 |

use zv_core::{AgentId, HealthStatus};

use crate::{HumanSpec, ReservoirSpec, ScenarioError, ScenarioResult, SelfReport, Scenario, Waypoint};

pub const RESERVOIR_ID_OFFSET: u32 = 100;

/// Names accepted by [`by_name`], in canonical case.
pub const NAMES: [&str; 4] = ["RD", "D0", "D3", "D4"];

/// Look up a built-in scenario by name (case-insensitive).
pub fn by_name(name: &str) -> ScenarioResult<Scenario> {
    match name.to_ascii_uppercase().as_str() {
        "RD" => Ok(rd()),
        "D0" => Ok(d0()),
        "D3" => Ok(d3()),
        "D4" => Ok(d4()),
        _ => Err(ScenarioError::UnknownDataset(name.to_string())),
    }
}

fn human(id: u32, path: &[(f64, f32, f32)], sick_at: &[f64]) -> HumanSpec {
    HumanSpec {
        id:        AgentId(id),
        waypoints: path.iter().map(|&(t, x, y)| Waypoint::new(t, x, y)).collect(),
        reports:   sick_at
            .iter()
            .map(|&t| SelfReport { time_secs: t, status: HealthStatus::Sick })
            .collect(),
    }
}

fn reservoir(n: u32, path: &[(f64, f32, f32)], radius: f32, hazard_rate: f64) -> ReservoirSpec {
    ReservoirSpec {
        id: AgentId(RESERVOIR_ID_OFFSET + n),
        waypoints: path.iter().map(|&(t, x, y)| Waypoint::new(t, x, y)).collect(),
        radius,
        hazard_rate,
    }
}

/// Two humans walking past one reservoir each, both reporting sick.
pub fn rd() -> Scenario {
    Scenario {
        name: "RD".into(),
        humans: vec![
            human(0, &[
                (0.0, 50.0, 150.0), (30.0, 200.0, 150.0), (290.0, 200.0, 150.0),
                (300.0, 300.0, 150.0), (400.0, 300.0, 200.0), (500.0, 300.0, 275.0),
            ], &[310.0]),
            human(1, &[
                (0.0, 50.0, 350.0), (260.0, 200.0, 350.0), (300.0, 300.0, 350.0),
                (400.0, 300.0, 275.0), (500.0, 300.0, 200.0),
            ], &[450.0]),
        ],
        reservoirs: vec![
            reservoir(0, &[(0.0, 200.0, 150.0)], 40.0, 0.2),
            reservoir(1, &[(0.0, 200.0, 350.0)], 40.0, 0.05),
        ],
    }
}

pub fn d0() -> Scenario {
    Scenario {
        name: "D0".into(),
        humans: vec![
            human(0, &[
                (0.0, 100.0, 100.0), (200.0, 500.0, 100.0), (400.0, 500.0, 500.0), (600.0, 100.0, 500.0),
            ], &[380.0]),
            human(1, &[
                (0.0, 200.0, 100.0), (200.0, 160.0, 100.0), (400.0, 490.0, 500.0), (600.0, 300.0, 500.0),
            ], &[500.0]),
        ],
        reservoirs: vec![reservoir(0, &[(0.0, 450.0, 150.0)], 100.0, 0.05)],
    }
}

/// Six humans on crossing diagonals and four reservoirs, one migrating.
pub fn d3() -> Scenario {
    Scenario {
        name: "D3".into(),
        humans: vec![
            human(0, &[
                (0.0, 100.0, 100.0), (50.0, 175.0, 175.0), (100.0, 250.0, 250.0), (150.0, 325.0, 325.0),
                (200.0, 400.0, 400.0), (250.0, 475.0, 475.0), (300.0, 500.0, 500.0),
            ], &[]),
            human(1, &[
                (0.0, 500.0, 100.0), (50.0, 425.0, 175.0), (100.0, 350.0, 250.0), (150.0, 275.0, 325.0),
                (200.0, 200.0, 400.0), (250.0, 125.0, 475.0), (300.0, 100.0, 500.0),
            ], &[]),
            human(2, &[
                (0.0, 100.0, 500.0), (50.0, 175.0, 425.0), (100.0, 250.0, 350.0), (150.0, 325.0, 275.0),
                (200.0, 400.0, 200.0), (250.0, 475.0, 125.0), (300.0, 500.0, 100.0),
            ], &[]),
            human(3, &[
                (0.0, 300.0, 300.0), (50.0, 300.0, 300.0), (100.0, 300.0, 300.0), (150.0, 300.0, 300.0),
                (200.0, 300.0, 300.0), (250.0, 300.0, 300.0), (300.0, 300.0, 300.0),
            ], &[]),
            human(4, &[
                (200.0, 0.0, 0.0), (300.0, 150.0, 150.0), (400.0, 300.0, 300.0), (500.0, 450.0, 450.0),
                (600.0, 600.0, 600.0), (700.0, 600.0, 600.0), (800.0, 600.0, 600.0),
            ], &[]),
            human(5, &[
                (0.0, 600.0, 0.0), (200.0, 480.0, 120.0), (400.0, 360.0, 240.0),
                (600.0, 240.0, 360.0), (800.0, 120.0, 480.0), (1000.0, 0.0, 600.0),
            ], &[]),
        ],
        reservoirs: vec![
            reservoir(0, &[(0.0, 450.0, 150.0), (50.0, 450.0, 150.0), (100.0, 450.0, 150.0)], 100.0, 0.05),
            reservoir(1, &[
                (100.0, 200.0, 200.0), (150.0, 225.0, 225.0), (200.0, 250.0, 250.0),
                (250.0, 275.0, 275.0), (300.0, 300.0, 300.0), (350.0, 325.0, 325.0),
            ], 80.0, 0.3),
            reservoir(2, &[(0.0, 100.0, 100.0), (100.0, 102.0, 102.0), (200.0, 104.0, 104.0)], 50.0, 0.05),
            reservoir(3, &[(0.0, 500.0, 500.0), (200.0, 400.0, 400.0), (400.0, 300.0, 300.0)], 60.0, 0.0),
        ],
    }
}

pub fn d4() -> Scenario {
    Scenario {
        name: "D4".into(),
        humans: vec![
            human(0, &[
                (0.0, 20.0, 20.0), (200.0, 200.0, 100.0), (210.0, 220.0, 100.0),
                (400.0, 400.0, 100.0), (600.0, 500.0, 100.0),
            ], &[550.0]),
            human(1, &[
                (0.0, 20.0, 200.0), (200.0, 200.0, 300.0), (210.0, 220.0, 300.0),
                (400.0, 400.0, 300.0), (600.0, 500.0, 300.0),
            ], &[500.0]),
        ],
        reservoirs: vec![
            reservoir(0, &[(0.0, 300.0, 100.0)], 45.0, 0.1),
            reservoir(1, &[(0.0, 200.0, 100.0)], 5.0, 0.005),
        ],
    }
}

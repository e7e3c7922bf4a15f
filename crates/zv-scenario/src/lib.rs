//! `zv-scenario`: agent construction requests for `zv-sim`.
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`scenario`]    | `Scenario`, `HumanSpec`, `ReservoirSpec`, `Waypoint`, `SelfReport` |
//! | [`datasets`]    | Built-in `RD`, `D0`, `D3`, `D4` scenarios, `by_name`      |
//! | [`loader`]      | CSV → `Scenario`                                          |
//! | [`error`]       | `ScenarioError`, `ScenarioResult`                         |

pub mod datasets;
pub mod error;
pub mod loader;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario_csv, load_scenario_reader};
pub use scenario::{HumanSpec, ReservoirSpec, Scenario, SelfReport, Waypoint};

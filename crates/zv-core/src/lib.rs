//! `zv-core`: foundational types for the `zv-sim` spillover simulator.
//!
//! This crate is a dependency of every other `zv-*` crate.  It intentionally
//! has no `zv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TrialId`                                  |
//! | [`geo`]         | `Position`, Euclidean distance                        |
//! | [`time`]        | `Tick`, `SimClock`, `seconds_to_ticks`                |
//! | [`config`]      | `SimConfig`, `SecondaryCaseRule`                      |
//! | [`rng`]         | `AgentRng` (per-agent), `trial_seed`                  |
//! | [`status`]      | `HealthStatus` enum                                   |
//! | [`error`]       | `ZvError`, `ZvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Serde derives on all public types (JSON `SimConfig`).      |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SecondaryCaseRule, SimConfig};
pub use error::{ZvError, ZvResult};
pub use geo::Position;
pub use ids::{AgentId, TrialId};
pub use rng::{AgentRng, trial_seed};
pub use status::HealthStatus;
pub use time::{SimClock, Tick, seconds_to_ticks};

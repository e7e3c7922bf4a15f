//! `zv-epi`: the epidemiological core of `zv-sim`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`tracker`]     | `ContactTracker`, `Proximity`, `ContactChanges`           |
//! | [`hazard`]      | `HazardModel` (emission, decay, infection draw)           |
//! | [`ledger`]      | `SicknessLedger`, `Transition`                            |
//! | [`estimator`]   | `ZoonoticEstimator`, `poisson_pmf`                        |
//! | [`model`]       | `EpiModel::update_human`, `HumanUpdate`                   |
//! | [`error`]       | `EpiError`, `EpiResult`                                   |
//!
//! # Per-tick order for one human
//!
//! 1. observe every other agent (distance, in-range flag, status, emission)
//! 2. open / extend / close contact intervals
//! 3. set emitted hazard, decay and accumulate received hazard
//! 4. infection draw (spread enabled, healthy humans only)
//! 5. episode transition, secondary cases, zoonotic posterior

pub mod error;
pub mod estimator;
pub mod hazard;
pub mod ledger;
pub mod model;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use error::{EpiError, EpiResult};
pub use estimator::{ZoonoticEstimator, poisson_pmf};
pub use hazard::HazardModel;
pub use ledger::{SicknessLedger, Transition};
pub use model::{EpiModel, HumanUpdate};
pub use tracker::{ContactChanges, ContactTracker, Proximity};

//! `zv-agent`: agent state and the population registry for `zv-sim`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`exposure`]    | `ExposureState` (emitted / received hazard)               |
//! | [`contact`]     | `ContactRecord`, `ContactLog` (open set + archive)        |
//! | [`sickness`]    | `SicknessEpisode`                                         |
//! | [`human`]       | `Human`                                                   |
//! | [`reservoir`]   | `AnimalReservoir`                                         |
//! | [`agent`]       | `Agent` tagged variant, `AgentKind`                       |
//! | [`store`]       | `Population` (id-indexed arena), `AgentRngs`              |
//! | [`builder`]     | `PopulationBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Registry id index uses `rustc_hash::FxHashMap`.            |
//! | `serde`   | Derives `Serialize`/`Deserialize` on record types.         |

pub mod agent;
pub mod builder;
pub mod contact;
pub mod exposure;
pub mod human;
pub mod reservoir;
pub mod sickness;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentKind};
pub use builder::PopulationBuilder;
pub use contact::{ContactLog, ContactRecord};
pub use exposure::ExposureState;
pub use human::Human;
pub use reservoir::AnimalReservoir;
pub use sickness::SicknessEpisode;
pub use store::{AgentRngs, Population};

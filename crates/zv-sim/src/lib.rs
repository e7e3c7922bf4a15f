//! `zv-sim`: simulation clock and trial runner for zoonotic spillover.
//!
//! # Tick loop
//!
//! ```text
//! while tick <= config.end_tick():
//!   ① Motion:  for each agent in population order:
//!                 scripted waypoint at `tick`?  jump there
//!                 otherwise                     MotionModel step
//!                 humans: apply self-report for `tick`
//!   ② Update:  for each human in population order:
//!                 contacts → hazard → infection draw → sickness ledger
//!   ③ Observe: on_tick_end(TickSummary), on_snapshot every `output_interval_ticks`
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_trials` runs trials on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use zv_core::SimConfig;
//! use zv_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let population = zv_scenario::datasets::rd().build_population(config.tick_duration_secs)?;
//! let mut sim = SimBuilder::new(config).population(population).build()?;
//! sim.run(&mut NoopObserver)?;
//! for (id, r) in sim.results() {
//!     println!("{id}: {} secondary cases, p_zoonotic {:.3}", r.secondary_cases, r.p_zoonotic);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod results;
pub mod sim;
pub mod trials;
pub mod view;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use results::HumanResult;
pub use sim::Simulation;
pub use trials::{TrialOutcome, run_trial, run_trials};
pub use view::{AgentView, Marker, SimView};

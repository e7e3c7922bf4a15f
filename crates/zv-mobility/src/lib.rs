//! `zv-mobility`: the motion resolver for `zv-sim`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`model`]       | `MotionModel` trait (pluggable between-waypoint motion)   |
//! | [`strategies`]  | `NoisyInterpolation` (default), `Stationary`              |
//! | [`resolver`]    | `MotionResolver` (scripted waypoints + self-reports)      |
//!
//! Motion never fails: a missing waypoint is a no-op, not an error, so this
//! crate has no error type.

pub mod model;
pub mod resolver;
pub mod strategies;


pub use model::MotionModel;
pub use resolver::MotionResolver;
pub use strategies::{NoisyInterpolation, Stationary};

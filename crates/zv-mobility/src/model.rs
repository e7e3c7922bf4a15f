//! The `MotionModel` trait, the extension point for movement between waypoints.

use zv_agent::{AnimalReservoir, Human};
use zv_core::{AgentRng, Tick};

/// Pluggable motion strategy.
///
/// The [`MotionResolver`](crate::MotionResolver) only calls into the model on
/// ticks where the agent has no scripted waypoint.  Implementations receive
/// the agent's own [`AgentRng`] so runs stay reproducible regardless of how
/// many other agents draw randomness.
///
/// # Required methods
///
/// Only [`move_human`][Self::move_human] is required.  Reservoirs stay put
/// between migration points unless a model overrides
/// [`move_reservoir`][Self::move_reservoir].
///
/// # Thread safety
///
/// Trial drivers may run many simulations in parallel, each holding a clone
/// of the same model, so implementations must be `Send + Sync`.  Per-agent
/// state belongs on the agent, not in the model.
///
/// # Example
///
/// ```rust
/// use zv_agent::Human;
/// use zv_core::{AgentRng, Tick};
/// use zv_mobility::MotionModel;
///
/// /// Drift one unit east every tick.
/// struct EastwardDrift;
///
/// impl MotionModel for EastwardDrift {
///     fn move_human(&self, human: &mut Human, _now: Tick, _rng: &mut AgentRng) {
///         human.position = human.position.offset(1.0, 0.0);
///     }
/// }
/// ```
pub trait MotionModel: Send + Sync + 'static {
    /// Advance `human` by one tick.  Never fails; doing nothing is valid.
    fn move_human(&self, human: &mut Human, now: Tick, rng: &mut AgentRng);

    /// Advance `reservoir` by one tick.
    ///
    /// Default: no movement.
    fn move_reservoir(&self, _reservoir: &mut AnimalReservoir, _now: Tick, _rng: &mut AgentRng) {}

    /// Short label used in output directory names and logs.
    fn name(&self) -> &str {
        "custom"
    }
}

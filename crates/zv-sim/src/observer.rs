//! Simulation observer trait for progress reporting and data collection.

use zv_core::Tick;
use zv_epi::{HumanUpdate, Transition};

use crate::SimView;

/// What the update phase of one tick did, summed over every human.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Humans whose update logic ran.
    pub humans:          usize,
    pub contacts_opened: usize,
    pub contacts_closed: usize,
    /// Healthy humans made sick by the infection draw.
    pub infections:      usize,
    pub onsets:          usize,
    pub recoveries:      usize,
}

impl TickSummary {
    /// Fold one human's update into the totals.
    pub fn record(&mut self, update: &HumanUpdate) {
        self.humans += 1;
        self.contacts_opened += update.contacts.opened;
        self.contacts_closed += update.contacts.closed;
        self.infections += usize::from(update.infected);
        match update.transition {
            Some(Transition::Onset)    => self.onsets += 1,
            Some(Transition::Recovery) => self.recoveries += 1,
            Some(Transition::Ongoing) | None => {}
        }
    }
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} onsets, {} recoveries", summary.onsets, summary.recoveries);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the totals of its update phase.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// The view is read-only: renderers and output writers record positions
    /// and markers without being able to touch simulation state.
    fn on_snapshot(&mut self, _view: &SimView<'_>) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

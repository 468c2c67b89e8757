//! Simulation observer trait for progress reporting and data collection.

use lift_car::{Elevator, Rider};
use lift_core::{ElevatorId, Tick};
use lift_dispatch::WaitingRiders;

/// Counts for one completed tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:      Tick,
    /// Riders still waiting after boarding.
    pub waiting:   usize,
    /// Riders aboard any car after boarding.
    pub onboard:   usize,
    /// Riders who boarded this tick.
    pub boarded:   usize,
    /// Riders who got off this tick.
    pub alighted:  usize,
    /// Riders delivered since the building was built.
    pub delivered: u64,
}

/// Callbacks invoked by [`Building::step`][crate::Building::step] at key
/// points in the tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example - progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.is_every(self.interval) {
///             println!("{}: {} waiting, {} delivered", summary.tick, summary.waiting, summary.delivered);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the start of the first tick after a rider was requested.
    /// The rider is still in the waiting pool at this point.
    fn on_rider_created(&mut self, _tick: Tick, _rider: &Rider) {}

    /// Called after `rider` stepped into car `elevator`.
    fn on_rider_boarded(&mut self, _tick: Tick, _rider: &Rider, _elevator: ElevatorId) {}

    /// Called after `rider` got off car `elevator` at its destination.  The
    /// rider is discarded once this returns.
    fn on_rider_alighted(&mut self, _tick: Tick, _rider: &Rider, _elevator: ElevatorId) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals with read-only access to every car and
    /// the waiting pool.
    fn on_snapshot(&mut self, _tick: Tick, _elevators: &[Elevator], _waiting: &WaitingRiders) {}

    /// Called once by [`Building::run`][crate::Building::run] after its last tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! The view of the building handed to a dispatch policy each tick.

use lift_car::Elevator;
use lift_core::Tick;

use crate::WaitingRiders;

/// Everything a [`DispatchPolicy`][crate::DispatchPolicy] may see and touch
/// during one tick.
///
/// Cars are lent mutably so the policy can set destinations and open doors.
/// The waiting pool is read-only: riders only move during the boarding phase
/// that follows.
pub struct DispatchContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Floors are numbered `1..=floor_count`.
    pub floor_count: u32,

    /// Every car, in `ElevatorId` order.
    pub elevators: &'a mut [Elevator],

    /// Riders not yet aboard, oldest first.
    pub waiting: &'a WaitingRiders,
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(
        tick:        Tick,
        floor_count: u32,
        elevators:   &'a mut [Elevator],
        waiting:     &'a WaitingRiders,
    ) -> Self {
        Self { tick, floor_count, elevators, waiting }
    }
}

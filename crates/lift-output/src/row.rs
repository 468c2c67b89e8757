//! Plain data row types written by output backends.

use lift_car::{DoorState, Elevator};
use lift_core::Tick;
use lift_sim::TickSummary;

/// The state of one car at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevatorSnapshotRow {
    pub tick:           u64,
    pub elevator_id:    u32,
    pub height:         f64,
    /// `None` while in transit.
    pub floor:          Option<u32>,
    pub door:           DoorState,
    pub percent_closed: f64,
    pub riders:         u32,
    pub destination:    Option<u32>,
}

impl ElevatorSnapshotRow {
    pub fn capture(tick: Tick, car: &Elevator) -> Self {
        Self {
            tick:           tick.0,
            elevator_id:    car.id().0,
            height:         car.height(),
            floor:          car.floor().map(|f| f.0),
            door:           car.door_state(),
            percent_closed: car.door().percent_closed(),
            riders:         u32::try_from(car.rider_count()).unwrap_or(u32::MAX),
            destination:    car.destination().map(|f| f.0),
        }
    }
}

/// Rider flow for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub waiting:   u64,
    pub onboard:   u64,
    pub boarded:   u64,
    pub alighted:  u64,
    pub delivered: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:      s.tick.0,
            waiting:   s.waiting as u64,
            onboard:   s.onboard as u64,
            boarded:   s.boarded as u64,
            alighted:  s.alighted as u64,
            delivered: s.delivered,
        }
    }
}

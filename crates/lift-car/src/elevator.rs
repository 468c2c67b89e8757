//! A single elevator car.

use lift_core::{ElevatorId, Floor};
use tracing::{debug, warn};

use crate::{Door, DoorState, Motion, Rider};

/// One car: a door, a motion controller and the riders aboard.
///
/// Riders only enter through [`add_rider`](Self::add_rider) and only leave
/// through [`update`](Self::update), both driven by the building.
#[derive(Clone, Debug)]
pub struct Elevator {
    id:          ElevatorId,
    height:      f64,
    floor_count: u32,
    capacity:    usize,
    riders:      Vec<Rider>,
    destination: Option<Floor>,
    door:        Door,
    motion:      Motion,
    /// Ticks left in the post-boarding / post-alighting lock.
    delay:       u32,
}

impl Elevator {
    /// A stationary, empty car at `floor` with its doors closed, serving
    /// floors `1..=floor_count`.
    pub fn new(
        id:               ElevatorId,
        floor:            Floor,
        floor_count:      u32,
        capacity:         usize,
        door_delay_ticks: u32,
        max_speed:        f64,
    ) -> Self {
        debug_assert!(capacity > 0, "elevator capacity must be positive");
        Self {
            id,
            height: floor.height(),
            floor_count,
            capacity,
            riders: Vec::with_capacity(capacity),
            destination: None,
            door: Door::new(door_delay_ticks),
            motion: Motion::new(max_speed),
            delay: 0,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    /// Continuous position in floor units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The floor the car is stopped at, or `None` while in transit.
    pub fn floor(&self) -> Option<Floor> {
        if self.motion.velocity() != 0.0 {
            return None;
        }
        Floor::from_height(self.height)
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.floor().is_some()
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.motion.velocity()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Onboard riders in boarding order.
    #[inline]
    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    #[inline]
    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.riders.len())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.riders.len() >= self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    #[inline]
    pub fn destination(&self) -> Option<Floor> {
        self.destination
    }

    #[inline]
    pub fn door(&self) -> &Door {
        &self.door
    }

    #[inline]
    pub fn door_state(&self) -> DoorState {
        self.door.state()
    }

    #[inline]
    pub fn is_delayed(&self) -> bool {
        self.delay > 0
    }

    /// `true` if a rider aboard wants to get off at `floor`.
    pub fn has_rider_for(&self, floor: Floor) -> bool {
        self.riders.iter().any(|r| r.destination == floor)
    }

    /// `true` if someone aboard still has to get off where the car stands.
    fn alighting_pending(&self) -> bool {
        self.floor().is_some_and(|floor| self.has_rider_for(floor))
    }

    /// Stopped at a floor with doors open and room aboard, with nobody left
    /// to get off here and no lock from a previous boarding or alighting.
    /// Exactly the cars [`add_rider`](Self::add_rider) accepts from.
    pub fn can_board(&self) -> bool {
        self.is_stationary()
            && self.door.is_open()
            && !self.is_full()
            && !self.is_delayed()
            && !self.alighting_pending()
    }

    /// Stopped, empty, doors closed and nowhere to go.
    pub fn is_idle(&self) -> bool {
        self.is_stationary() && self.is_empty() && self.door.is_closed() && self.destination.is_none()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Take `rider` aboard.
    ///
    /// Refused while someone aboard still has to get off at the current
    /// floor, while the car is full, or during an action delay.  On refusal
    /// the rider is handed back unchanged in `Err`.  On success the car is
    /// locked for the rider's `action_delay`.
    pub fn add_rider(&mut self, rider: Rider) -> Result<(), Rider> {
        if self.alighting_pending() || self.is_full() || self.is_delayed() {
            return Err(rider);
        }
        debug!(elevator = %self.id, rider = %rider.id, destination = %rider.destination, "rider boarded");
        self.delay = rider.action_delay;
        self.riders.push(rider);
        Ok(())
    }

    /// Command the car toward `destination`.
    ///
    /// A floor always replaces the previous destination, unless it lies
    /// outside `1..=floor_count`, in which case it is refused.  Clearing it
    /// (`None`) is only honoured while the car is stopped at a floor.
    /// Returns `false` when the request is ignored.
    pub fn set_destination(&mut self, destination: Option<Floor>) -> bool {
        match destination {
            Some(floor) if !floor.within(self.floor_count) => {
                warn!(elevator = %self.id, %floor, floor_count = self.floor_count, "destination out of range");
                return false;
            }
            None if !self.is_stationary() => return false,
            _ => {}
        }
        self.destination = destination;
        true
    }

    /// Ask the doors to open.  Ignored unless the car is stopped at a floor.
    /// See [`Door::open`].
    pub fn open_doors(&mut self) -> bool {
        self.is_stationary() && self.door.open()
    }

    /// Ask the doors to close.  See [`Door::close`].
    #[inline]
    pub fn close_doors(&mut self) -> bool {
        self.door.close()
    }

    /// Advance one tick.
    ///
    /// Returns the rider who got off this tick, if any.  At most one rider
    /// leaves per tick, in boarding order.
    pub fn update(&mut self) -> Option<Rider> {
        if self.delay > 0 {
            self.delay -= 1;
            return None;
        }

        let mut alighted = None;
        if let Some(floor) = self.floor() {
            match self.riders.iter().position(|r| r.destination == floor) {
                Some(pos) if self.door.is_open() => {
                    let rider = self.riders.remove(pos);
                    debug!(elevator = %self.id, rider = %rider.id, %floor, "rider alighted");
                    self.delay = rider.action_delay;
                    alighted = Some(rider);
                }
                Some(_) => {
                    self.door.open();
                }
                None if self.door.is_open() => {
                    self.door.close();
                }
                None => {}
            }
        }

        self.motion.update(&mut self.height, &mut self.destination, self.door.is_closed());
        self.door.update();
        alighted
    }
}

//! Unit tests for lift-car.

#[cfg(test)]
fn rider(id: u64, start: u32, destination: u32, action_delay: u32) -> crate::Rider {
    use lift_core::{Floor, RiderId};
    crate::Rider::new(RiderId(id), Floor(start), Floor(destination), action_delay, crate::RiderTag(0))
}

// ── Door ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod door_tests {
    use crate::{Door, DoorState};

    fn assert_counter_invariant(door: &Door) {
        assert_eq!(
            door.remaining_ticks() > 0,
            door.state().is_moving(),
            "state {:?} with {} ticks left",
            door.state(),
            door.remaining_ticks()
        );
    }

    #[test]
    fn starts_closed() {
        let door = Door::new(12);
        assert_eq!(door.state(), DoorState::Closed);
        assert_eq!(door.remaining_ticks(), 0);
        assert_eq!(door.percent_closed(), 100.0);
    }

    #[test]
    fn open_takes_delay_ticks() {
        let mut door = Door::new(12);
        assert!(door.open());
        assert_eq!(door.state(), DoorState::Opening);
        assert_eq!(door.remaining_ticks(), 12);
        for _ in 0..11 {
            door.update();
            assert_eq!(door.state(), DoorState::Opening);
        }
        door.update();
        assert_eq!(door.state(), DoorState::Open);
        assert_eq!(door.percent_closed(), 0.0);
    }

    #[test]
    fn second_open_is_noop() {
        let mut door = Door::new(12);
        assert!(door.open());
        door.update();
        let before = door.clone();
        assert!(!door.open());
        assert_eq!(door, before);
    }

    #[test]
    fn close_ignored_unless_open() {
        let mut door = Door::new(3);
        assert!(!door.close());
        assert_eq!(door.state(), DoorState::Closed);

        door.open();
        assert!(!door.close(), "opening door must finish opening first");
        assert_eq!(door.state(), DoorState::Opening);
    }

    #[test]
    fn full_cycle() {
        let mut door = Door::new(3);
        door.open();
        for _ in 0..3 {
            door.update();
        }
        assert!(door.is_open());
        assert!(door.close());
        assert!(!door.close());
        for _ in 0..3 {
            door.update();
        }
        assert!(door.is_closed());
    }

    #[test]
    fn reopen_while_closing() {
        let mut door = Door::new(4);
        door.open();
        for _ in 0..4 {
            door.update();
        }
        door.close();
        door.update();
        assert!(door.open());
        assert_eq!(door.state(), DoorState::Opening);
        assert_eq!(door.remaining_ticks(), 4);
    }

    #[test]
    fn counter_invariant_over_cycle() {
        let mut door = Door::new(5);
        assert_counter_invariant(&door);
        door.open();
        for _ in 0..7 {
            assert_counter_invariant(&door);
            door.update();
        }
        door.close();
        for _ in 0..7 {
            assert_counter_invariant(&door);
            door.update();
        }
        assert_counter_invariant(&door);
    }

    #[test]
    fn percent_closed_interpolates() {
        let mut door = Door::new(4);
        door.open();
        door.update(); // 3 of 4 ticks left
        assert_eq!(door.percent_closed(), 75.0);
        for _ in 0..3 {
            door.update();
        }
        door.close();
        door.update(); // 3 of 4 ticks left
        assert_eq!(door.percent_closed(), 25.0);
    }

    #[test]
    fn zero_delay_raised_to_one() {
        let mut door = Door::new(0);
        door.open();
        assert_eq!(door.remaining_ticks(), 1);
        door.update();
        assert!(door.is_open());
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_tests {
    use lift_core::Floor;

    use crate::Motion;

    #[test]
    fn arrives_exactly_after_forty_ticks() {
        let mut motion = Motion::new(0.05);
        let mut height = 1.0;
        let mut destination = Some(Floor(3));
        for tick in 1..=40 {
            let before = height;
            motion.update(&mut height, &mut destination, true);
            assert!(height >= before, "tick {tick} moved backwards");
            assert!(height - before <= 0.05 + 1e-9, "tick {tick} exceeded max speed");
            if tick < 40 {
                assert_eq!(destination, Some(Floor(3)), "arrived early at tick {tick}");
            }
        }
        assert_eq!(height, 3.0);
        assert_eq!(destination, None);
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn moves_down() {
        let mut motion = Motion::new(0.25);
        let mut height = 3.0;
        let mut destination = Some(Floor(2));
        motion.update(&mut height, &mut destination, true);
        assert_eq!(motion.velocity(), -0.25);
        assert_eq!(height, 2.75);
        for _ in 0..3 {
            motion.update(&mut height, &mut destination, true);
        }
        assert_eq!(height, 2.0);
        assert_eq!(destination, None);
    }

    #[test]
    fn holds_when_not_permitted() {
        let mut motion = Motion::new(0.05);
        let mut height = 1.0;
        let mut destination = Some(Floor(2));
        motion.update(&mut height, &mut destination, false);
        assert_eq!(height, 1.0);
        assert_eq!(destination, Some(Floor(2)));
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn holds_without_destination() {
        let mut motion = Motion::new(0.05);
        let mut height = 2.0;
        let mut destination = None;
        motion.update(&mut height, &mut destination, true);
        assert_eq!(height, 2.0);
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn destination_at_current_height_clears_immediately() {
        let mut motion = Motion::new(0.05);
        let mut height = 2.0;
        let mut destination = Some(Floor(2));
        motion.update(&mut height, &mut destination, true);
        assert_eq!(height, 2.0);
        assert_eq!(destination, None);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_tests {
    use lift_core::{ElevatorId, Floor};

    use super::rider;
    use crate::{DoorState, Elevator};

    fn car(capacity: usize) -> Elevator {
        Elevator::new(ElevatorId(0), Floor(1), 4, capacity, 4, 0.05)
    }

    /// Tick until the car stops at `floor`, failing after `limit` ticks.
    fn run_to(e: &mut Elevator, floor: Floor, limit: usize) {
        for _ in 0..limit {
            if e.floor() == Some(floor) && e.destination().is_none() {
                return;
            }
            e.update();
        }
        panic!("car never reached {floor}");
    }

    #[test]
    fn new_car_is_idle_at_start_floor() {
        let e = car(2);
        assert_eq!(e.floor(), Some(Floor(1)));
        assert_eq!(e.height(), 1.0);
        assert!(e.is_idle());
        assert_eq!(e.door_state(), DoorState::Closed);
    }

    #[test]
    fn add_rider_respects_capacity() {
        let mut e = car(2);
        assert!(e.add_rider(rider(0, 1, 3, 0)).is_ok());
        assert!(e.add_rider(rider(1, 1, 3, 0)).is_ok());
        let refused = e.add_rider(rider(2, 1, 3, 0));
        assert_eq!(refused.map_err(|r| r.id.0), Err(2));
        assert_eq!(e.rider_count(), 2);
        assert!(e.is_full());
    }

    #[test]
    fn add_rider_refused_during_action_delay() {
        let mut e = car(3);
        assert!(e.add_rider(rider(0, 1, 3, 2)).is_ok());
        assert!(e.is_delayed());
        assert!(e.add_rider(rider(1, 1, 3, 0)).is_err());
        e.update();
        e.update();
        assert!(!e.is_delayed());
        assert!(e.add_rider(rider(1, 1, 3, 0)).is_ok());
    }

    #[test]
    fn action_delay_freezes_everything() {
        let mut e = car(3);
        e.open_doors();
        assert!(e.add_rider(rider(0, 1, 3, 2)).is_ok());
        let door_before = e.door().clone();
        e.update();
        e.update();
        assert_eq!(e.door(), &door_before);
        e.update();
        assert_ne!(e.door(), &door_before);
    }

    #[test]
    fn set_destination_none_ignored_in_transit() {
        let mut e = car(1);
        assert!(e.set_destination(Some(Floor(3))));
        e.update();
        assert_eq!(e.floor(), None);
        assert!(!e.set_destination(None));
        assert_eq!(e.destination(), Some(Floor(3)));
        assert!(e.set_destination(Some(Floor(4))));
        assert_eq!(e.destination(), Some(Floor(4)));
    }

    #[test]
    fn set_destination_none_honoured_when_stopped() {
        let mut e = car(1);
        e.set_destination(Some(Floor(2)));
        assert!(e.set_destination(None));
        assert_eq!(e.destination(), None);
    }

    #[test]
    fn does_not_move_with_doors_open() {
        let mut e = car(1);
        e.open_doors();
        e.set_destination(Some(Floor(2)));
        // 4 ticks opening, 1 tick to start closing, 3 more until closed.
        for _ in 0..8 {
            e.update();
        }
        assert_eq!(e.height(), 1.0);
        assert_eq!(e.door_state(), DoorState::Closed);
        e.update();
        assert!(e.height() > 1.0);
    }

    #[test]
    fn boarding_blocked_until_arrivals_alight() {
        let mut e = car(2);
        assert!(e.add_rider(rider(0, 1, 3, 0)).is_ok());
        e.set_destination(Some(Floor(3)));
        run_to(&mut e, Floor(3), 100);

        let mut guard = 0;
        while !e.is_empty() {
            assert!(e.add_rider(rider(1, 3, 1, 0)).is_err());
            e.update();
            guard += 1;
            assert!(guard < 50, "rider never alighted");
        }
        assert!(e.add_rider(rider(1, 3, 1, 0)).is_ok());
    }

    #[test]
    fn one_rider_alights_per_tick_in_boarding_order() {
        let mut e = car(3);
        assert!(e.add_rider(rider(10, 1, 2, 0)).is_ok());
        assert!(e.add_rider(rider(11, 1, 4, 0)).is_ok());
        assert!(e.add_rider(rider(12, 1, 2, 0)).is_ok());
        e.set_destination(Some(Floor(2)));
        run_to(&mut e, Floor(2), 100);

        let mut exits = Vec::new();
        for _ in 0..20 {
            if let Some(r) = e.update() {
                exits.push(r.id.0);
            }
        }
        assert_eq!(exits, [10, 12]);
        assert_eq!(e.riders().iter().map(|r| r.id.0).collect::<Vec<_>>(), [11]);
    }

    #[test]
    fn alighting_waits_for_action_delay() {
        let mut e = car(2);
        assert!(e.add_rider(rider(0, 1, 2, 0)).is_ok());
        assert!(e.add_rider(rider(1, 1, 2, 0)).is_ok());
        e.set_destination(Some(Floor(2)));
        run_to(&mut e, Floor(2), 100);

        let mut ticks = Vec::new();
        for t in 0..30 {
            if e.update().is_some() {
                ticks.push(t);
            }
        }
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1] - ticks[0], 1, "zero-delay riders leave on consecutive ticks");
    }

    #[test]
    fn closes_doors_after_last_exit() {
        let mut e = car(1);
        assert!(e.add_rider(rider(0, 1, 2, 3)).is_ok());
        for _ in 0..3 {
            e.update();
        }
        e.set_destination(Some(Floor(2)));
        run_to(&mut e, Floor(2), 100);
        for _ in 0..40 {
            e.update();
        }
        assert!(e.is_empty());
        assert_eq!(e.door_state(), DoorState::Closed);
        assert!(e.is_idle());
    }

    #[test]
    fn set_destination_rejects_missing_floor() {
        let mut e = car(1);
        assert!(!e.set_destination(Some(Floor(5))));
        assert!(!e.set_destination(Some(Floor(0))));
        assert_eq!(e.destination(), None);
        for _ in 0..100 {
            e.update();
        }
        assert_eq!(e.height(), 1.0);

        assert!(e.set_destination(Some(Floor(4))));
        assert!(!e.set_destination(Some(Floor(9))));
        assert_eq!(e.destination(), Some(Floor(4)));
    }

    #[test]
    fn open_doors_refused_in_transit() {
        let mut e = car(1);
        e.set_destination(Some(Floor(3)));
        while e.height() < 1.5 {
            e.update();
        }
        assert!(!e.open_doors());
        assert_eq!(e.door_state(), DoorState::Closed);
        run_to(&mut e, Floor(3), 100);
        assert!(e.open_doors());
    }

    #[test]
    fn spare_capacity_counts_free_places() {
        let mut e = car(3);
        assert_eq!(e.spare_capacity(), 3);
        assert!(e.add_rider(rider(0, 1, 2, 0)).is_ok());
        assert!(e.add_rider(rider(1, 1, 2, 0)).is_ok());
        assert_eq!(e.spare_capacity(), 1);
    }

    #[test]
    fn cannot_board_while_arrivals_pending() {
        let mut e = car(2);
        assert!(e.add_rider(rider(0, 1, 2, 0)).is_ok());
        e.set_destination(Some(Floor(2)));
        run_to(&mut e, Floor(2), 100);
        while e.door_state() != DoorState::Open {
            e.update();
        }
        assert_eq!(e.rider_count(), 1);
        assert!(!e.can_board());
        assert!(e.add_rider(rider(1, 2, 1, 0)).is_err());

        assert!(e.update().is_some());
        assert!(e.can_board());
    }

    #[test]
    fn can_board_requires_open_doors() {
        let mut e = car(1);
        assert!(!e.can_board());
        e.open_doors();
        for _ in 0..4 {
            e.update();
        }
        assert!(e.can_board());
    }
}

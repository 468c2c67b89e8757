//! Distance-greedy dispatch.

use lift_core::Floor;

use crate::{DispatchContext, DispatchPolicy};

/// Sends every car to the closest useful stop.
///
/// - Stopped with room aboard and riders waiting here: open the doors.
/// - Carrying riders: the closest onboard destination (ties go to the rider
///   who boarded first).
/// - Empty: the closest floor with waiting riders that no other car is
///   already heading for.  With every such floor claimed the car stays put.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestCar;

/// Pick the floor in `candidates` closest to `height`; first wins ties.
fn closest(height: f64, candidates: impl Iterator<Item = Floor>) -> Option<Floor> {
    candidates.min_by(|a, b| {
        let da = (a.height() - height).abs();
        let db = (b.height() - height).abs();
        da.total_cmp(&db)
    })
}

impl DispatchPolicy for NearestCar {
    fn direct_elevators(&self, ctx: &mut DispatchContext<'_>) {
        let waiting = ctx.waiting;
        let mut claimed: Vec<Option<Floor>> =
            ctx.elevators.iter().map(|car| car.destination()).collect();

        for (i, car) in ctx.elevators.iter_mut().enumerate() {
            match car.floor() {
                Some(floor) if !car.is_full() && waiting.has_waiting_at(floor) => {
                    car.open_doors();
                    continue;
                }
                _ => {}
            }

            let next = if car.is_empty() {
                let taken_elsewhere = |floor: Floor| {
                    claimed
                        .iter()
                        .enumerate()
                        .any(|(j, dest)| j != i && *dest == Some(floor))
                };
                closest(
                    car.height(),
                    waiting.iter().map(|r| r.start).filter(|&f| !taken_elsewhere(f)),
                )
            } else {
                closest(car.height(), car.riders().iter().map(|r| r.destination))
            };

            if car.set_destination(next) {
                claimed[i] = next;
            }
        }
    }

    fn name(&self) -> &'static str {
        "nearest-car"
    }
}

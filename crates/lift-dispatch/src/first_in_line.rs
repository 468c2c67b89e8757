//! The default "first in line" policy.
//!
//! For each car, in order:
//!
//! 1. stopped at a floor, room aboard, someone waiting here → open the doors;
//! 2. otherwise, empty → head for the start floor of the longest-waiting
//!    rider, or clear the destination if nobody is waiting;
//! 3. otherwise → head for the destination of the rider who boarded first.
//!
//! The tie-breaks (oldest waiting rider, first onboard rider) are fixed
//! behaviour and not load-optimal: every empty car chases the same rider,
//! and a loaded car serves everyone aboard before it considers new requests.
//! A rider at a floor no car ever stops at can wait indefinitely.

use crate::{DispatchContext, DispatchPolicy};

/// Myopic FIFO baseline.  See the module docs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstInLine;

impl DispatchPolicy for FirstInLine {
    fn direct_elevators(&self, ctx: &mut DispatchContext<'_>) {
        let oldest_start = ctx.waiting.front().map(|r| r.start);

        for car in ctx.elevators.iter_mut() {
            match car.floor() {
                Some(floor) if !car.is_full() && ctx.waiting.has_waiting_at(floor) => {
                    car.open_doors();
                }
                _ if car.is_empty() => {
                    car.set_destination(oldest_start);
                }
                _ => {
                    let next = car.riders().first().map(|r| r.destination);
                    car.set_destination(next);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "first-in-line"
    }
}

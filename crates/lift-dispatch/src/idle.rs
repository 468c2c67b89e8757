//! A policy that never directs any car.

use crate::{DispatchContext, DispatchPolicy};

/// A [`DispatchPolicy`] that leaves every car alone.
///
/// Cars still discharge riders already aboard at their current floor, and
/// riders may still board a car whose doors happen to be open.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdlePolicy;

impl DispatchPolicy for IdlePolicy {
    fn direct_elevators(&self, _ctx: &mut DispatchContext<'_>) {}

    fn name(&self) -> &'static str {
        "idle"
    }
}

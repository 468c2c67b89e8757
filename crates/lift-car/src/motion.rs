//! Bounded-rate vertical motion.
//!
//! Each tick the car moves toward its destination by at most `max_speed`
//! floors.  When the remaining gap fits inside one step the car snaps to the
//! destination height exactly and the destination is cleared, so arrival
//! never overshoots and never leaves fractional residue behind.

use lift_core::Floor;

/// Absorbs the rounding error accumulated over many `max_speed` steps, so a
/// gap that is one step wide "on paper" still counts as one step.
const SNAP_EPSILON: f64 = 1e-9;

/// Velocity controller for one car.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    max_speed: f64,
    velocity:  f64,
}

impl Motion {
    pub fn new(max_speed: f64) -> Self {
        Self { max_speed: max_speed.abs(), velocity: 0.0 }
    }

    /// Signed velocity applied on the last update, in floors per tick.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Advance one tick.
    ///
    /// With `may_move == false` or no destination the car holds still and
    /// `destination` is left untouched.
    pub fn update(&mut self, height: &mut f64, destination: &mut Option<Floor>, may_move: bool) {
        let target = match *destination {
            Some(floor) if may_move => floor.height(),
            _ => {
                self.velocity = 0.0;
                return;
            }
        };

        let gap = target - *height;
        if gap.abs() <= self.max_speed + SNAP_EPSILON {
            *height = target;
            *destination = None;
            self.velocity = 0.0;
        } else {
            self.velocity = self.max_speed.copysign(gap);
            *height += self.velocity;
        }
    }
}

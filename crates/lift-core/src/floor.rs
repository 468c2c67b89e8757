//! 1-based floor numbers.
//!
//! Heights are measured in floor units: a car whose `height` is exactly
//! `3.0` is level with floor 3.  This keeps the conversion between the
//! continuous motion model and discrete floors trivial.

use std::fmt;

/// A floor of the building, numbered from 1.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor.
    pub const GROUND: Floor = Floor(1);

    /// The height (in floor units) at which a car is level with this floor.
    #[inline]
    pub fn height(self) -> f64 {
        f64::from(self.0)
    }

    /// The floor a car is level with at `height`, if `height` is integral and
    /// at least 1.
    pub fn from_height(height: f64) -> Option<Floor> {
        if height.fract() != 0.0 || height < 1.0 || height > f64::from(u32::MAX) {
            return None;
        }
        Some(Floor(height as u32))
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// `true` if this floor exists in a building with `floor_count` floors.
    #[inline]
    pub fn within(self, floor_count: u32) -> bool {
        (1..=floor_count).contains(&self.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

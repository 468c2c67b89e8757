//! Riders - passive travel requests.

use std::fmt;

use lift_core::{Floor, RiderId};

/// Opaque identity tag carried for renderers (an `0xRRGGBB` colour in the
/// bundled driver).  The engine never inspects it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiderTag(pub u32);

impl fmt::Display for RiderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Someone who wants to travel from `start` to `destination`.
///
/// A rider lives in exactly one place at a time: the building's waiting pool
/// or one car's onboard list.  It is deliberately not `Copy`, so moving it
/// between the two is a move, never a duplicate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    pub id:           RiderId,
    pub start:        Floor,
    pub destination:  Floor,
    /// Ticks the car is locked after this rider boards or alights.
    pub action_delay: u32,
    pub tag:          RiderTag,
}

impl Rider {
    pub fn new(
        id:           RiderId,
        start:        Floor,
        destination:  Floor,
        action_delay: u32,
        tag:          RiderTag,
    ) -> Self {
        Self { id, start, destination, action_delay, tag }
    }
}

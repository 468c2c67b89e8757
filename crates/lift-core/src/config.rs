//! Construction-time configuration.
//!
//! Every constant the engine depends on lives in [`BuildingConfig`] rather
//! than in literals scattered across the crates.  Drivers typically build one
//! with struct-update syntax over [`BuildingConfig::default`], or load it from
//! JSON with the `serde` feature enabled.

use std::fmt;
use std::str::FromStr;

use crate::{Floor, LiftError, LiftResult};

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// Names of the dispatch policies shipped with `lift-dispatch`.
///
/// Selection is a closed enum rather than a string lookup into a mutable
/// table: adding a policy means adding a variant here and an arm in
/// `lift_dispatch::NamedPolicy`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    /// Serve the longest-waiting rider first; cars finish their onboard
    /// riders in boarding order before picking anyone else up.
    #[default]
    FirstInLine,
    /// Empty cars head for the closest waiting rider; loaded cars stop at the
    /// closest onboard destination.
    NearestCar,
    /// Never directs any car.  Useful as a baseline in tests.
    Idle,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::FirstInLine, PolicyKind::NearestCar, PolicyKind::Idle];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::FirstInLine => "first-in-line",
            PolicyKind::NearestCar  => "nearest-car",
            PolicyKind::Idle        => "idle",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = LiftError;

    fn from_str(s: &str) -> LiftResult<Self> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| LiftError::UnknownPolicy(s.to_owned()))
    }
}

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Number of floors, numbered `1..=floor_count`.
    pub floor_count: u32,

    /// Number of elevator cars.
    pub elevator_count: u32,

    /// Maximum riders per car.
    pub capacity: usize,

    /// Ticks a door takes to fully open or fully close.
    pub door_delay_ticks: u32,

    /// Maximum vertical travel per tick, in floors.
    pub max_speed: f64,

    /// Which dispatch policy directs idle cars.
    pub policy: PolicyKind,

    /// Lower bound (inclusive) of a rider's boarding/alighting delay.
    pub min_action_delay: u32,

    /// Upper bound (inclusive) of a rider's boarding/alighting delay.
    pub max_action_delay: u32,

    /// Floor every car starts at.
    pub start_floor: Floor,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floor_count:      4,
            elevator_count:   2,
            capacity:         5,
            door_delay_ticks: 12,
            max_speed:        0.05,
            policy:           PolicyKind::FirstInLine,
            min_action_delay: 5,
            max_action_delay: 15,
            start_floor:      Floor::GROUND,
            seed:             42,
        }
    }
}

impl BuildingConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "floor_count must be at least 2 (got {})",
                self.floor_count
            )));
        }
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be positive".into()));
        }
        if self.capacity == 0 {
            return Err(LiftError::Config("capacity must be positive".into()));
        }
        if self.door_delay_ticks == 0 {
            return Err(LiftError::Config("door_delay_ticks must be positive".into()));
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(LiftError::Config(format!(
                "max_speed must be a positive number (got {})",
                self.max_speed
            )));
        }
        if self.min_action_delay > self.max_action_delay {
            return Err(LiftError::Config(format!(
                "min_action_delay {} exceeds max_action_delay {}",
                self.min_action_delay, self.max_action_delay
            )));
        }
        self.check_floor(self.start_floor)
    }

    /// `Ok` if `floor` exists in this building.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<()> {
        if floor.within(self.floor_count) {
            Ok(())
        } else {
            Err(LiftError::FloorOutOfRange { floor, floor_count: self.floor_count })
        }
    }
}

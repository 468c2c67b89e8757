//! Fluent builder for constructing a [`Building`].

use lift_car::Elevator;
use lift_core::{BuildingConfig, ElevatorId, Floor, SimRng, Tick};
use lift_dispatch::{DispatchPolicy, NamedPolicy, WaitingRiders};
use tracing::info;

use crate::{Building, SimError, SimResult};

/// Fluent builder for [`Building<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.initial_floors(v)`    | every car at `config.start_floor`|
/// | `.snapshot_interval(n)` | `1` (every tick); `0` disables   |
///
/// # Example
///
/// ```rust,ignore
/// let building = BuildingBuilder::new(config, FirstInLine)
///     .initial_floors(vec![Floor(1), Floor(4)])
///     .build()?;
/// ```
pub struct BuildingBuilder<P: DispatchPolicy> {
    config:            BuildingConfig,
    policy:            P,
    floors:            Option<Vec<Floor>>,
    snapshot_interval: u64,
}

impl BuildingBuilder<NamedPolicy> {
    /// A builder using the built-in policy named by `config.policy`.
    pub fn from_config(config: BuildingConfig) -> Self {
        let policy = NamedPolicy::from(config.policy);
        Self::new(config, policy)
    }
}

impl<P: DispatchPolicy> BuildingBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: BuildingConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            floors: None,
            snapshot_interval: 1,
        }
    }

    /// Starting floor of each car (must be length `elevator_count`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Call `SimObserver::on_snapshot` every `n` ticks.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate inputs and return a ready-to-run [`Building`].
    pub fn build(self) -> SimResult<Building<P>> {
        self.config.validate()?;
        let car_count = self.config.elevator_count as usize;

        let floors = match self.floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(SimError::ElevatorCountMismatch {
                        expected: car_count,
                        got:      f.len(),
                    });
                }
                for &floor in &f {
                    self.config.check_floor(floor)?;
                }
                f
            }
            None => vec![self.config.start_floor; car_count],
        };

        let mut elevators = Vec::with_capacity(car_count);
        for (i, floor) in floors.into_iter().enumerate() {
            let id = ElevatorId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many elevators ({car_count})")))?;
            elevators.push(Elevator::new(
                id,
                floor,
                self.config.floor_count,
                self.config.capacity,
                self.config.door_delay_ticks,
                self.config.max_speed,
            ));
        }

        info!(
            floors    = self.config.floor_count,
            elevators = car_count,
            capacity  = self.config.capacity,
            policy    = self.policy.name(),
            seed      = self.config.seed,
            "building ready"
        );

        Ok(Building {
            rng:               SimRng::new(self.config.seed),
            config:            self.config,
            tick:              Tick::ZERO,
            elevators,
            waiting:           WaitingRiders::new(),
            policy:            self.policy,
            next_rider:        0,
            delivered:         0,
            snapshot_interval: self.snapshot_interval,
            fresh:             Vec::new(),
        })
    }
}

//! `lift-sim` - the building and its tick loop.
//!
//! # Three-phase tick
//!
//! ```text
//! Building::update():
//!   ① Cars      - every Elevator::update(), in ElevatorId order
//!                 (action delay, discharge one rider, doors, motion).
//!   ② Dispatch  - DispatchPolicy::direct_elevators() sets destinations
//!                 and opens doors.
//!   ③ Boarding  - waiting riders, oldest first, step into a car stopped at
//!                 their floor with open doors and room aboard.
//! ```
//!
//! A tick runs to completion synchronously; `Building` is driven through
//! `&mut self`, so nothing can observe or start another tick half-way.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, Floor};
//! use lift_sim::{BuildingBuilder, NoopObserver};
//!
//! let mut building = BuildingBuilder::from_config(BuildingConfig::default()).build()?;
//! building.request_ride(Floor(1), Floor(4))?;
//! building.run(1_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod building;
pub mod error;
pub mod observer;


pub use builder::BuildingBuilder;
pub use building::Building;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};

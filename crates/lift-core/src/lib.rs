//! `lift-core` - foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RiderId`, `ElevatorId`                               |
//! | [`floor`]       | `Floor` (1-based floor index)                         |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (building-level deterministic RNG)           |
//! | [`config`]      | `BuildingConfig`, `PolicyKind`                        |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, PolicyKind};
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::{ElevatorId, RiderId};
pub use rng::SimRng;
pub use time::Tick;

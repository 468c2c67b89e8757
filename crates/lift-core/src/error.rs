//! Shared error type.
//!
//! Errors only arise where external input enters the core: configuration at
//! construction time and ride requests naming floors.  Everything that happens
//! inside a tick reports its outcome through `bool` returns instead.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("floor {floor} is outside the building's range 1..={floor_count}")]
    FloorOutOfRange { floor: Floor, floor_count: u32 },

    #[error("ride starts and ends at the same floor ({0})")]
    SameFloor(Floor),

    #[error("unknown dispatch policy `{0}`")]
    UnknownPolicy(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;

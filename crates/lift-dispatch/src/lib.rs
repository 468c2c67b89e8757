//! `lift-dispatch` - who goes where.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`waiting`]       | `WaitingRiders` - FIFO pool with a per-floor index         |
//! | [`context`]       | `DispatchContext<'a>` - what a policy may see and touch    |
//! | [`policy`]        | `DispatchPolicy` trait                                     |
//! | [`first_in_line`] | `FirstInLine` - the default policy                         |
//! | [`nearest_car`]   | `NearestCar` - distance-greedy alternative                 |
//! | [`idle`]          | `IdlePolicy` - never directs anything                      |
//! | [`named`]         | `NamedPolicy` - built-in policies selected by `PolicyKind` |
//!
//! # Design notes
//!
//! Policies only ever *direct* cars: set destinations and open doors.  They
//! never move riders.  Boarding is done by the building after the policy
//! runs, so swapping policies cannot break the rider partition invariant.

pub mod context;
pub mod first_in_line;
pub mod idle;
pub mod named;
pub mod nearest_car;
pub mod policy;
pub mod waiting;


pub use context::DispatchContext;
pub use first_in_line::FirstInLine;
pub use idle::IdlePolicy;
pub use named::NamedPolicy;
pub use nearest_car::NearestCar;
pub use policy::DispatchPolicy;
pub use waiting::WaitingRiders;

//! `lift-car` - a single elevator car and the state machines it owns.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`rider`]    | `Rider`, `RiderTag` - passive travel requests                 |
//! | [`door`]     | `Door`, `DoorState` - timed open/close state machine          |
//! | [`motion`]   | `Motion` - bounded-rate vertical position controller          |
//! | [`elevator`] | `Elevator` - owns one door, one motion controller, its riders |
//!
//! # Per-tick order inside [`Elevator::update`]
//!
//! ```text
//! ① action delay active?  → count it down, nothing else moves this tick
//! ② at a floor with an arriving rider → open doors / discharge one rider
//!    at a floor, doors open, nobody to discharge → start closing
//! ③ motion step (allowed only while doors report Closed)
//! ④ door step
//! ```
//!
//! Door commands issued in ② therefore only affect whether the car may move
//! from the *next* tick's motion step onward.

pub mod door;
pub mod elevator;
pub mod motion;
pub mod rider;

#[cfg(test)]
mod tests;

pub use door::{Door, DoorState};
pub use elevator::Elevator;
pub use motion::Motion;
pub use rider::{Rider, RiderTag};

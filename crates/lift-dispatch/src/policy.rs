//! The `DispatchPolicy` trait - the extension point for car scheduling.

use crate::DispatchContext;

/// Pluggable car scheduling.
///
/// Called once per tick, after every car has updated and before waiting
/// riders board.  This is the only place destinations are chosen for cars
/// that are not already carrying someone to a stop.
///
/// A policy communicates only through the cars in `ctx.elevators`:
/// [`set_destination`][lift_car::Elevator::set_destination] and
/// [`open_doors`][lift_car::Elevator::open_doors].  Both report refusal with
/// `false`; the building never needs to know what the policy decided.
///
/// # Example
///
/// ```rust,ignore
/// struct Lobby;
///
/// impl DispatchPolicy for Lobby {
///     fn direct_elevators(&self, ctx: &mut DispatchContext<'_>) {
///         for car in ctx.elevators.iter_mut().filter(|c| c.is_empty()) {
///             car.set_destination(Some(Floor::GROUND));
///         }
///     }
/// }
/// ```
pub trait DispatchPolicy: Send + 'static {
    /// Direct every car for this tick.
    fn direct_elevators(&self, ctx: &mut DispatchContext<'_>);

    /// Human-readable name, used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

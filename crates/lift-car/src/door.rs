//! Door state machine.
//!
//! ```text
//!            open()                 (delay ticks)
//!   Closed ─────────▶ Opening ─────────────────────▶ Open
//!     ▲                  ▲                            │
//!     │ (delay ticks)    │ open()                     │ close()
//!     │                  │                            ▼
//!     └──────────────────┴──────────────────────── Closing
//! ```
//!
//! `remaining_ticks` is non-zero exactly while the door is `Opening` or
//! `Closing`.

use std::fmt;

use tracing::trace;

/// Where a door is in its open/close cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DoorState {
    pub fn name(self) -> &'static str {
        match self {
            DoorState::Closed  => "closed",
            DoorState::Opening => "opening",
            DoorState::Open    => "open",
            DoorState::Closing => "closing",
        }
    }

    /// `true` while a transition is in progress.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, DoorState::Opening | DoorState::Closing)
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The doors of one car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Door {
    state:     DoorState,
    remaining: u32,
    delay:     u32,
}

impl Door {
    /// A closed door taking `delay_ticks` per transition.
    ///
    /// A zero delay is raised to one tick so transitions stay observable.
    pub fn new(delay_ticks: u32) -> Self {
        Self {
            state:     DoorState::Closed,
            remaining: 0,
            delay:     delay_ticks.max(1),
        }
    }

    #[inline]
    pub fn state(&self) -> DoorState {
        self.state
    }

    #[inline]
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == DoorState::Closed
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    /// Start opening.  Accepted from `Closed` or `Closing` (a closing door
    /// reverses and reloads the full delay).
    ///
    /// Returns `false`, changing nothing, if the door is already open or
    /// opening.
    pub fn open(&mut self) -> bool {
        match self.state {
            DoorState::Closed | DoorState::Closing => {
                trace!(from = %self.state, "door opening");
                self.state = DoorState::Opening;
                self.remaining = self.delay;
                true
            }
            DoorState::Opening | DoorState::Open => false,
        }
    }

    /// Start closing.  Accepted only from `Open`.
    ///
    /// Returns `false`, changing nothing, otherwise.
    pub fn close(&mut self) -> bool {
        match self.state {
            DoorState::Open => {
                trace!("door closing");
                self.state = DoorState::Closing;
                self.remaining = self.delay;
                true
            }
            DoorState::Closed | DoorState::Opening | DoorState::Closing => false,
        }
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        if !self.state.is_moving() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = match self.state {
                DoorState::Opening => DoorState::Open,
                _                  => DoorState::Closed,
            };
            trace!(to = %self.state, "door settled");
        }
    }

    /// How closed the door is, from `0.0` (open) to `100.0` (closed).
    ///
    /// Interpolates linearly while a transition is in progress.
    pub fn percent_closed(&self) -> f64 {
        let fraction_left = f64::from(self.remaining) / f64::from(self.delay);
        match self.state {
            DoorState::Closed  => 100.0,
            DoorState::Open    => 0.0,
            DoorState::Opening => 100.0 * fraction_left,
            DoorState::Closing => 100.0 * (1.0 - fraction_left),
        }
    }
}

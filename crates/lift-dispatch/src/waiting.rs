//! `WaitingRiders` - the building's queue of riders not yet aboard.
//!
//! Riders are kept in arrival order.  Alongside the queue a per-floor count
//! is maintained so policies can ask "is anyone waiting at floor F?" in O(1)
//! on every car, every tick, without scanning the queue.

use lift_car::Rider;
use lift_core::{Floor, RiderId};
use rustc_hash::FxHashMap;

/// Riders waiting to be picked up, oldest first.
#[derive(Clone, Debug, Default)]
pub struct WaitingRiders {
    queue:    Vec<Rider>,
    by_floor: FxHashMap<Floor, usize>,
}

impl WaitingRiders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rider` to the back of the queue.
    pub fn push(&mut self, rider: Rider) {
        *self.by_floor.entry(rider.start).or_default() += 1;
        self.queue.push(rider);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The longest-waiting rider.
    #[inline]
    pub fn front(&self) -> Option<&Rider> {
        self.queue.first()
    }

    /// All waiting riders, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[Rider] {
        &self.queue
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Rider> {
        self.queue.iter()
    }

    /// Number of riders waiting at `floor`.
    #[inline]
    pub fn count_at(&self, floor: Floor) -> usize {
        self.by_floor.get(&floor).copied().unwrap_or(0)
    }

    #[inline]
    pub fn has_waiting_at(&self, floor: Floor) -> bool {
        self.count_at(floor) > 0
    }

    /// Riders waiting at `floor`, oldest first.
    pub fn at_floor(&self, floor: Floor) -> impl Iterator<Item = &Rider> + '_ {
        self.queue.iter().filter(move |r| r.start == floor)
    }

    pub fn contains(&self, id: RiderId) -> bool {
        self.queue.iter().any(|r| r.id == id)
    }

    /// Offer every rider, oldest first, to `board`.
    ///
    /// `board` either takes the rider (`Ok`) or hands it back (`Err`); riders
    /// handed back keep their place in the queue.  Returns how many riders
    /// left the pool.
    pub fn board_with<F>(&mut self, mut board: F) -> usize
    where
        F: FnMut(Rider) -> Result<(), Rider>,
    {
        let offered = std::mem::take(&mut self.queue);
        let before = offered.len();
        for rider in offered {
            let start = rider.start;
            match board(rider) {
                Ok(()) => self.forget_one_at(start),
                Err(rider) => self.queue.push(rider),
            }
        }
        before - self.queue.len()
    }

    fn forget_one_at(&mut self, floor: Floor) {
        if let Some(count) = self.by_floor.get_mut(&floor) {
            *count -= 1;
            if *count == 0 {
                self.by_floor.remove(&floor);
            }
        }
    }
}

impl<'a> IntoIterator for &'a WaitingRiders {
    type Item = &'a Rider;
    type IntoIter = std::slice::Iter<'a, Rider>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.iter()
    }
}

//! Seeded randomness for rider generation.
//!
//! A building holds one `SimRng`, seeded from `BuildingConfig::seed`.  Each
//! new rider draws its start and destination floors, then its action delay
//! and colour tag, in request order.  Two buildings built from the same
//! config and fed the same requests therefore produce identical riders.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Spreads small stream offsets across the whole seed space.
const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// The building's random source.
///
/// A driver that wants randomness of its own, such as deciding on which
/// ticks to spawn riders, splits off a [`child`](Self::child) stream.
/// Drawing from the building's stream directly would shift every rider
/// generated afterwards.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  Consumes one draw from `self`, so
    /// do it once at setup rather than per tick.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ stream.wrapping_mul(STREAM_SPREAD);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform draw from `range`; the building uses inclusive ranges for
    /// floors, action delays and tags.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

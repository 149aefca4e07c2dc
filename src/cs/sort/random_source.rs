//! Sources of uniformly distributed pivot positions.
//!
//! Randomized partitioning only needs one capability from its random number
//! generator: a uniform draw from a closed range of positions. [`UniformSource`]
//! captures exactly that, so callers can plug in the thread-local generator, a
//! seeded stream for reproducible runs, or a scripted source in tests.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A generator of uniformly distributed positions.
pub trait UniformSource {
    /// Returns a value drawn uniformly from the closed range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`. Implementations must never return a
    /// value outside the range.
    fn uniform(&mut self, low: usize, high: usize) -> usize;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform(low, high)
    }
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
///
/// # Example
/// ```
/// use randselect::sort::{RngSource, UniformSource};
///
/// let mut source = RngSource::seeded(7);
/// let r = source.uniform(3, 9);
/// assert!((3..=9).contains(&r));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the source and returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source: the same seed always yields the same stream,
    /// independent of platform.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high, "empty range [{low}, {high}]");
        self.rng.gen_range(low..=high)
    }
}

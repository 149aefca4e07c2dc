use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;

use super::random_source::{RngSource, UniformSource};
use super::randomized_quickselect::select_with;
use crate::cs::error::{Error, Result};

/// Repeated selections sharing one random source.
///
/// A `Selector` is configured once with where its pivots come from and can
/// then serve any number of queries:
///
/// ```rust
/// use randselect::sort::Selector;
///
/// let mut selector = Selector::seeded(2024);
/// let mut arr = vec![50, 70, 60, 90, 10, 30, 20, 40];
///
/// assert_eq!(selector.select_rank(&mut arr, 1).unwrap(), 10);
/// assert_eq!(selector.select(&mut arr, 1, 8, 8).unwrap(), 90);
/// assert_eq!(selector.median(&mut arr).unwrap(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct Selector<S> {
    source: S,
}

impl Selector<RngSource<ThreadRng>> {
    /// Selector drawing pivots from the thread-local generator.
    pub fn new() -> Self {
        Self::with_source(RngSource::thread())
    }
}

impl Default for Selector<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector<RngSource<ChaCha8Rng>> {
    /// Selector with a reproducible pivot sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl<S: UniformSource> Selector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Element of 1-based `rank` within `arr[low..=high]` (1-based bounds).
    ///
    /// Errors as [`select`](super::select).
    pub fn select<T: Ord + Clone>(
        &mut self,
        arr: &mut [T],
        low: usize,
        high: usize,
        rank: usize,
    ) -> Result<T> {
        select_with(arr, low, high, rank, &mut self.source)
    }

    /// Element of 1-based `rank` within the whole slice.
    pub fn select_rank<T: Ord + Clone>(&mut self, arr: &mut [T], rank: usize) -> Result<T> {
        let len = arr.len();
        self.select(arr, 1, len, rank)
    }

    /// Lower median of the slice.
    pub fn median<T: Ord + Clone>(&mut self, arr: &mut [T]) -> Result<T> {
        let len = arr.len();
        if len == 0 {
            return Err(Error::EmptySequence);
        }
        self.select(arr, 1, len, (len + 1) / 2)
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let original = vec![12, 3, 45, 7, 7, 0, 19, 33, 2, 8];
        let mut a = original.clone();
        let mut b = original.clone();
        let mut sa = Selector::seeded(5);
        let mut sb = Selector::seeded(5);
        for rank in 1..=original.len() {
            assert_eq!(
                sa.select_rank(&mut a, rank).unwrap(),
                sb.select_rank(&mut b, rank).unwrap()
            );
            // Same seed, same pivots, same permutation.
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_select_rank_matches_sorted() {
        let original = vec![5, -2, 9, 9, 0, 14, -7, 3];
        let mut sorted = original.clone();
        sorted.sort();
        let mut selector = Selector::new();
        for (i, expected) in sorted.iter().enumerate() {
            let mut arr = original.clone();
            assert_eq!(selector.select_rank(&mut arr, i + 1).unwrap(), *expected);
        }
    }

    #[test]
    fn test_median_and_empty() {
        let mut selector = Selector::default();
        let mut arr = [4, 1, 3, 2];
        assert_eq!(selector.median(&mut arr).unwrap(), 2);
        let mut empty: [i32; 0] = [];
        assert_eq!(selector.median(&mut empty), Err(Error::EmptySequence));
        assert_eq!(selector.select_rank(&mut empty, 1), Err(Error::EmptySequence));
    }

    #[test]
    fn test_with_borrowed_source() {
        let mut source = RngSource::seeded(77);
        let mut arr = [3, 1, 2];
        {
            let mut selector = Selector::with_source(&mut source);
            assert_eq!(selector.select(&mut arr, 1, 3, 3).unwrap(), 3);
        }
        let mut selector = Selector::with_source(source);
        assert_eq!(selector.select(&mut arr, 1, 3, 1).unwrap(), 1);
        let _source = selector.into_source();
    }
}

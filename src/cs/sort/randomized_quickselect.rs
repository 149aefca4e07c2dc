//! Randomized selection (quickselect).
//!
//! Finds the i-th smallest element of a slice, or of an inclusive subrange of
//! it, without sorting. Each step partitions the active range around a random
//! pivot and keeps only the side that holds the requested rank, giving expected
//! linear time regardless of the input order.
//!
//! The public entry points take 1-based bounds and ranks, following the usual
//! textbook formulation:
//!
//! ```
//! use randselect::sort::select;
//!
//! let mut arr = [50, 70, 60, 90, 10, 30, 20, 40];
//! assert_eq!(select(&mut arr, 1, 8, 1).unwrap(), 10);
//! assert_eq!(select(&mut arr, 1, 8, 4).unwrap(), 40);
//! assert_eq!(select(&mut arr, 1, 8, 8).unwrap(), 90);
//! ```
//!
//! The slice is permuted in place; its multiset of values never changes.

use std::cmp::Ordering;

use log::{debug, trace};

use super::partition::random_partition;
use super::random_source::{RngSource, UniformSource};
use crate::cs::error::{Error, Result};

/// Returns the element of rank `rank` within `arr[low..=high]` (1-based bounds).
///
/// Uses the thread-local random generator to choose pivots. See
/// [`select_with`] to supply another source.
///
/// # Errors
/// * [`Error::EmptySequence`] if `arr` is empty
/// * [`Error::EmptyRange`] if `low == 0` or `low > high`
/// * [`Error::RangeOutOfBounds`] if `high > arr.len()`
/// * [`Error::RankOutOfRange`] if `rank` is not in `1..=high - low + 1`
pub fn select<T: Ord + Clone>(arr: &mut [T], low: usize, high: usize, rank: usize) -> Result<T> {
    select_with(arr, low, high, rank, &mut RngSource::thread())
}

/// Like [`select`], drawing pivot positions from `source`.
///
/// # Example
/// ```
/// use randselect::sort::{select_with, RngSource};
///
/// let mut arr = [9, 2, 7, 4, 5];
/// let mut source = RngSource::seeded(11);
/// // Third smallest among positions 2..=5, i.e. of [2, 7, 4, 5].
/// assert_eq!(select_with(&mut arr, 2, 5, 3, &mut source).unwrap(), 5);
/// ```
pub fn select_with<T, S>(
    arr: &mut [T],
    low: usize,
    high: usize,
    rank: usize,
    source: &mut S,
) -> Result<T>
where
    T: Ord + Clone,
    S: UniformSource + ?Sized,
{
    check_bounds(arr.len(), low, high, rank)?;
    debug!(
        "select: rank {} in [{}, {}] of {} elements",
        rank,
        low,
        high,
        arr.len()
    );
    let index = narrow(arr, low - 1, high - 1, rank, source);
    Ok(arr[index].clone())
}

/// Returns the `k`-th smallest element of `arr`, counting from zero.
///
/// # Errors
/// * [`Error::EmptySequence`] if `arr` is empty
/// * [`Error::InvalidInput`] if `k >= arr.len()`
///
/// # Example
/// ```
/// use randselect::sort::randomized_quickselect;
///
/// let mut arr = [7, 1, 3, 4, 6, 2, 5];
/// assert_eq!(randomized_quickselect(&mut arr, 3).unwrap(), 4);
/// ```
pub fn randomized_quickselect<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    if arr.is_empty() {
        return Err(Error::EmptySequence);
    }
    if k >= arr.len() {
        return Err(Error::InvalidInput(format!(
            "k = {} is out of bounds for a slice of length {}",
            k,
            arr.len()
        )));
    }
    let len = arr.len();
    select(arr, 1, len, k + 1)
}

/// Returns the lower median of `arr`: the element of rank `(n + 1) / 2`.
///
/// # Errors
/// [`Error::EmptySequence`] if `arr` is empty.
pub fn median<T: Ord + Clone>(arr: &mut [T]) -> Result<T> {
    let len = arr.len();
    if len == 0 {
        return Err(Error::EmptySequence);
    }
    select(arr, 1, len, (len + 1) / 2)
}

/// Validates 1-based `low`, `high` and `rank` against a sequence of length `len`.
pub(crate) fn check_bounds(len: usize, low: usize, high: usize, rank: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptySequence);
    }
    if low == 0 || low > high {
        return Err(Error::EmptyRange { low, high });
    }
    if high > len {
        return Err(Error::RangeOutOfBounds { high, len });
    }
    let size = high - low + 1;
    if rank == 0 || rank > size {
        return Err(Error::RankOutOfRange { rank, size });
    }
    Ok(())
}

/// Narrows the inclusive 0-based range `[low, high]` until the element of
/// 1-based `rank` within it is in place, and returns its index.
///
/// Callers guarantee `low <= high < arr.len()` and `1 <= rank <= high - low + 1`.
fn narrow<T, S>(
    arr: &mut [T],
    mut low: usize,
    mut high: usize,
    mut rank: usize,
    source: &mut S,
) -> usize
where
    T: Ord,
    S: UniformSource + ?Sized,
{
    loop {
        if low == high {
            debug_assert_eq!(rank, 1, "singleton range [{low}, {high}] reached with rank {rank}");
            return low;
        }

        let q = low + random_partition(&mut arr[low..=high], source);
        // Rank of the pivot within the current range.
        let k = q - low + 1;

        match rank.cmp(&k) {
            Ordering::Equal => {
                trace!("pivot at {} has rank {}: done", q, k);
                return q;
            }
            Ordering::Less => {
                high = q - 1;
                trace!("pivot at {} has rank {}: going left to [{}, {}]", q, k, low, high);
            }
            Ordering::Greater => {
                low = q + 1;
                rank -= k;
                trace!(
                    "pivot at {} has rank {}: going right to [{}, {}] for rank {}",
                    q,
                    k,
                    low,
                    high,
                    rank
                );
            }
        }
    }
}

//! Errors reported by the selection entry points.

use thiserror::Error;

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations detected at a public entry point.
///
/// Bounds and ranks in these variants are reported exactly as the caller
/// passed them (1-based for [`select`](crate::sort::select), 0-based for
/// [`randomized_quickselect`](crate::sort::randomized_quickselect)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot select from an empty sequence")]
    EmptySequence,

    #[error("empty range: low = {low}, high = {high}")]
    EmptyRange { low: usize, high: usize },

    #[error("range end {high} is past the end of a sequence of length {len}")]
    RangeOutOfBounds { high: usize, len: usize },

    #[error("rank {rank} is outside 1..={size}")]
    RankOutOfRange { rank: usize, size: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

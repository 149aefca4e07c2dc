//! Selection by randomized partitioning.
//!
//! - [`partition`] / [`random_partition`]: Lomuto partitioning, optionally
//!   around a random pivot
//! - [`select`] / [`select_with`]: i-th smallest element of a subrange
//! - [`randomized_quickselect`]: 0-based k-th order statistic of a whole slice
//! - [`Selector`]: repeated selections sharing a configured random source

pub mod partition;
pub mod random_source;
pub mod randomized_quickselect;
pub mod selector;


pub use partition::{partition, random_partition};
pub use random_source::{RngSource, UniformSource};
pub use randomized_quickselect::{median, randomized_quickselect, select, select_with};
pub use selector::Selector;

//! A module containing [`Direction`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The side of a point or interval asked about in
/// [`BoundedInterval::is()`](crate::BoundedInterval::is) and
/// [`BoundedInterval::is_interval()`](crate::BoundedInterval::is_interval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
	/// Entirely to the left of, smaller than.
	Before,
	/// Entirely to the right of, greater than.
	After,
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Direction::Before => f.write_str("before"),
			Direction::After => f.write_str("after"),
		}
	}
}

//! A module containing [`BoundaryClosure`] and [`IntervalClosure`].

use core::fmt;
use core::ops::Bound;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a bound value is itself a member of its interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryClosure {
	/// The bound value is excluded from the interval.
	Open,
	/// The bound value is included in the interval.
	#[default]
	Closed,
}

impl BoundaryClosure {
	/// Returns `true` if the bound value is included.
	///
	/// # Examples
	/// ```
	/// use intervalic::BoundaryClosure;
	///
	/// assert_eq!(BoundaryClosure::Closed.is_closed(), true);
	/// assert_eq!(BoundaryClosure::Open.is_closed(), false);
	/// ```
	pub fn is_closed(self) -> bool {
		self == BoundaryClosure::Closed
	}

	/// Returns `true` if the bound value is excluded.
	pub fn is_open(self) -> bool {
		self == BoundaryClosure::Open
	}

	/// Wraps `point` in the [`Bound`] variant matching this closure.
	pub fn bound<T>(self, point: T) -> Bound<T> {
		match self {
			BoundaryClosure::Open => Bound::Excluded(point),
			BoundaryClosure::Closed => Bound::Included(point),
		}
	}
}

impl fmt::Display for BoundaryClosure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BoundaryClosure::Open => f.write_str("open"),
			BoundaryClosure::Closed => f.write_str("closed"),
		}
	}
}

/// The closure configuration of both sides of an interval.
///
/// # Examples
/// ```
/// use intervalic::interval::ei;
/// use intervalic::{BoundaryClosure, BoundedInterval, IntervalClosure};
///
/// assert_eq!(ei(10, 20).closure(), IntervalClosure::OPEN_CLOSED);
/// assert_eq!(IntervalClosure::OPEN_CLOSED.start, BoundaryClosure::Open);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalClosure {
	/// The closure of the start bound.
	pub start: BoundaryClosure,
	/// The closure of the end bound.
	pub end: BoundaryClosure,
}

impl IntervalClosure {
	/// Both bounds included, `[a, b]`.
	pub const CLOSED: IntervalClosure =
		IntervalClosure::new(BoundaryClosure::Closed, BoundaryClosure::Closed);
	/// Both bounds excluded, `(a, b)`.
	pub const OPEN: IntervalClosure =
		IntervalClosure::new(BoundaryClosure::Open, BoundaryClosure::Open);
	/// Start included and end excluded, `[a, b)`.
	pub const CLOSED_OPEN: IntervalClosure =
		IntervalClosure::new(BoundaryClosure::Closed, BoundaryClosure::Open);
	/// Start excluded and end included, `(a, b]`.
	pub const OPEN_CLOSED: IntervalClosure =
		IntervalClosure::new(BoundaryClosure::Open, BoundaryClosure::Closed);

	/// Makes a new [`IntervalClosure`] from the closures of each side.
	pub const fn new(start: BoundaryClosure, end: BoundaryClosure) -> Self {
		IntervalClosure { start, end }
	}
}

/// Closed-open, the conventional shape for half-open time ranges.
impl Default for IntervalClosure {
	fn default() -> Self {
		IntervalClosure::CLOSED_OPEN
	}
}

#[cfg(test)]
mod tests {
	use core::ops::Bound;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn named_closures_tests() {
		assert_eq!(
			IntervalClosure::CLOSED_OPEN,
			IntervalClosure {
				start: BoundaryClosure::Closed,
				end: BoundaryClosure::Open,
			}
		);
		assert_eq!(IntervalClosure::default(), IntervalClosure::CLOSED_OPEN);
		assert_eq!(BoundaryClosure::default(), BoundaryClosure::Closed);
	}

	#[test]
	fn bound_tests() {
		assert_eq!(BoundaryClosure::Closed.bound(4), Bound::Included(4));
		assert_eq!(BoundaryClosure::Open.bound(4), Bound::Excluded(4));
	}
}

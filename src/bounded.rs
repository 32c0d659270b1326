//! A module containing the [`BoundedInterval`] trait.

use crate::bound_position::BoundPosition;
use crate::closure::IntervalClosure;
use crate::direction::Direction;

/// The trait for interval types, providing the comparison algebra
/// between intervals and points of the point type `T`.
///
/// Implementors only supply their bounds and closure configuration,
/// every predicate is provided. Intervals of different implementing
/// types over the same `T` can be compared with each other.
///
/// Implementors must uphold `start() <= end()`, the predicates are
/// unspecified otherwise. [`Interval`](crate::Interval) upholds this at
/// construction.
pub trait BoundedInterval<T>
where
	T: Ord,
{
	/// The start bound of the interval.
	fn start(&self) -> &T;
	/// The end bound of the interval.
	fn end(&self) -> &T;
	/// The closure configuration of both bounds.
	fn closure(&self) -> IntervalClosure;

	/// Returns `true` if the whole interval lies strictly on the given
	/// side of `point`.
	///
	/// `is(After, point)` holds when `point` is smaller than the start,
	/// or equal to an open start. `is(Before, point)` holds when `point`
	/// is greater than the end, or equal to an open end.
	///
	/// # Examples
	/// ```
	/// use intervalic::interval::{ei, ie};
	/// use intervalic::{BoundedInterval, Direction};
	///
	/// assert_eq!(ie(10, 20).is(Direction::After, &9), true);
	/// assert_eq!(ie(10, 20).is(Direction::After, &10), false);
	/// assert_eq!(ei(10, 20).is(Direction::After, &10), true);
	///
	/// assert_eq!(ie(10, 20).is(Direction::Before, &20), true);
	/// assert_eq!(ei(10, 20).is(Direction::Before, &20), false);
	/// ```
	fn is(&self, direction: Direction, point: &T) -> bool {
		let point = BoundPosition::point(point);
		match direction {
			Direction::After => point < start_position::<T, _>(self),
			Direction::Before => point > end_position::<T, _>(self),
		}
	}

	/// Shorthand for [`is(Direction::Before, point)`](BoundedInterval::is).
	fn is_before(&self, point: &T) -> bool {
		self.is(Direction::Before, point)
	}

	/// Shorthand for [`is(Direction::After, point)`](BoundedInterval::is).
	fn is_after(&self, point: &T) -> bool {
		self.is(Direction::After, point)
	}

	/// Returns `true` if the whole interval lies strictly on the given
	/// side of the whole `other` interval.
	///
	/// Two intervals sharing a bound value are ordered unless both of
	/// them include that value.
	///
	/// # Examples
	/// ```
	/// use intervalic::interval::{ei, ie, ii};
	/// use intervalic::{BoundedInterval, Direction};
	///
	/// assert_eq!(ie(10, 20).is_interval(Direction::Before, &ie(20, 30)), true);
	/// assert_eq!(ii(10, 20).is_interval(Direction::Before, &ei(20, 40)), true);
	/// assert_eq!(ii(10, 20).is_interval(Direction::Before, &ii(20, 30)), false);
	///
	/// assert_eq!(ei(20, 40).is_interval(Direction::After, &ii(10, 20)), true);
	/// ```
	fn is_interval<Q>(&self, direction: Direction, other: &Q) -> bool
	where
		Q: BoundedInterval<T> + ?Sized,
	{
		match direction {
			Direction::Before => {
				end_position::<T, _>(self) < start_position::<T, _>(other)
			}
			Direction::After => {
				end_position::<T, _>(other) < start_position::<T, _>(self)
			}
		}
	}

	/// Returns `true` if `point` is a member of the interval.
	///
	/// # Examples
	/// ```
	/// use intervalic::interval::{ei, ie};
	/// use intervalic::BoundedInterval;
	///
	/// assert_eq!(ie(10, 20).contains(&10), true);
	/// assert_eq!(ie(10, 20).contains(&20), false);
	///
	/// assert_eq!(ei(10, 20).contains(&10), false);
	/// assert_eq!(ei(10, 20).contains(&20), true);
	/// ```
	fn contains(&self, point: &T) -> bool {
		!self.is(Direction::After, point) && !self.is(Direction::Before, point)
	}

	/// Returns `true` if every member of `other` is a member of this
	/// interval.
	///
	/// # Examples
	/// ```
	/// use intervalic::interval::{ee, ie, ii};
	/// use intervalic::BoundedInterval;
	///
	/// assert_eq!(ie(10, 20).contains_interval(&ie(12, 18)), true);
	/// assert_eq!(ie(10, 20).contains_interval(&ie(15, 25)), false);
	///
	/// assert_eq!(ii(10, 20).contains_interval(&ee(10, 20)), true);
	/// assert_eq!(ee(10, 20).contains_interval(&ii(10, 20)), false);
	/// ```
	fn contains_interval<Q>(&self, other: &Q) -> bool
	where
		Q: BoundedInterval<T> + ?Sized,
	{
		start_position::<T, _>(self) <= start_position::<T, _>(other)
			&& end_position::<T, _>(self) >= end_position::<T, _>(other)
	}

	/// Returns `true` if neither interval is before the other.
	///
	/// This relation is symmetric.
	///
	/// # Examples
	/// ```
	/// use intervalic::interval::{ie, ii, instant};
	/// use intervalic::{BoundaryClosure, BoundedInterval};
	///
	/// assert_eq!(ie(10, 20).overlaps(&ie(20, 30)), false);
	/// assert_eq!(ii(10, 20).overlaps(&ii(20, 30)), true);
	///
	/// assert_eq!(ie(10, 20).overlaps(&instant(10, BoundaryClosure::Closed)), true);
	/// assert_eq!(ie(10, 20).overlaps(&instant(20, BoundaryClosure::Open)), false);
	/// ```
	fn overlaps<Q>(&self, other: &Q) -> bool
	where
		Q: BoundedInterval<T> + ?Sized,
	{
		!self.is_interval(Direction::Before, other)
			&& !self.is_interval(Direction::After, other)
	}

	/// Returns `true` if the start and end bounds are equal.
	///
	/// An instant may still contain no points if one of its sides is
	/// open.
	fn is_instant(&self) -> bool {
		self.start() == self.end()
	}
}

fn start_position<T, K>(interval: &K) -> BoundPosition<&T>
where
	T: Ord,
	K: BoundedInterval<T> + ?Sized,
{
	BoundPosition::start(interval.start(), interval.closure().start)
}

fn end_position<T, K>(interval: &K) -> BoundPosition<&T>
where
	T: Ord,
	K: BoundedInterval<T> + ?Sized,
{
	BoundPosition::end(interval.end(), interval.closure().end)
}

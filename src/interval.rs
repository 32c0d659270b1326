//! A module containing [`Interval`] and it's various constructor functions.

use core::fmt::{self, Debug, Display};
use core::ops::{Bound, Range, RangeBounds, RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounded::BoundedInterval;
use crate::closure::{BoundaryClosure, IntervalClosure};
use crate::error::InvalidBoundsError;
use crate::utils::invalid_bounds_panic;

/// The interval type used throughout this crate both for the examples and
/// for use by library users if they don't wish to create their own
/// interval types.
///
/// An [`Interval`] is immutable: its bounds are validated once at
/// construction (`start <= end`) and can only be read afterwards.
///
/// Equality is structural, `[10, 10]` and `[10, 10)` are different values
/// even though they are both instants at `10`.
///
/// # Examples
/// ```
/// use intervalic::{BoundaryClosure, BoundedInterval, Interval};
///
/// let interval = Interval::new(
/// 	10,
/// 	BoundaryClosure::Open,
/// 	20,
/// 	BoundaryClosure::Closed,
/// )
/// .unwrap();
///
/// assert_eq!(interval.contains(&10), false);
/// assert_eq!(interval.contains(&20), true);
/// assert_eq!(interval.to_string(), "(10, 20]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
	feature = "serde",
	serde(
		try_from = "UncheckedInterval<T>",
		bound(deserialize = "T: Ord + Debug + Deserialize<'de>")
	)
)]
pub struct Interval<T> {
	start: T,
	end: T,
	start_closure: BoundaryClosure,
	end_closure: BoundaryClosure,
}

impl<T> Interval<T>
where
	T: Ord,
{
	/// Makes a new [`Interval`] from its bounds and the closure of each
	/// bound.
	///
	/// Returns an [`InvalidBoundsError`] holding the given bounds if
	/// `start > end`. `start == end` is allowed with any closures.
	///
	/// # Examples
	/// ```
	/// use intervalic::{BoundaryClosure, Interval, InvalidBoundsError};
	///
	/// assert!(Interval::new(1, BoundaryClosure::Closed, 4, BoundaryClosure::Open).is_ok());
	/// assert!(Interval::new(4, BoundaryClosure::Open, 4, BoundaryClosure::Closed).is_ok());
	/// assert_eq!(
	/// 	Interval::new(4, BoundaryClosure::Closed, 1, BoundaryClosure::Closed),
	/// 	Err(InvalidBoundsError { start: 4, end: 1 })
	/// );
	/// ```
	pub fn new(
		start: T,
		start_closure: BoundaryClosure,
		end: T,
		end_closure: BoundaryClosure,
	) -> Result<Self, InvalidBoundsError<T>> {
		if start > end {
			tracing::debug!(
				%start_closure,
				%end_closure,
				"rejected interval with start after end"
			);
			return Err(InvalidBoundsError { start, end });
		}

		Ok(Interval {
			start,
			end,
			start_closure,
			end_closure,
		})
	}

	/// Makes a new [`Interval`] with the given closure configuration.
	///
	/// # Examples
	/// ```
	/// use intervalic::{BoundedInterval, Interval, IntervalClosure};
	///
	/// let interval = Interval::with_closure(0, 5, IntervalClosure::OPEN).unwrap();
	///
	/// assert_eq!(interval.closure(), IntervalClosure::OPEN);
	/// ```
	pub fn with_closure(
		start: T,
		end: T,
		closure: IntervalClosure,
	) -> Result<Self, InvalidBoundsError<T>> {
		Interval::new(start, closure.start, end, closure.end)
	}

	/// Makes a new closed-open [`Interval`], `[start, end)`, the default
	/// shape for "thick" intervals.
	///
	/// # Examples
	/// ```
	/// use intervalic::{BoundedInterval, Interval, IntervalClosure};
	///
	/// let interval = Interval::closed_open(10, 20).unwrap();
	///
	/// assert_eq!(interval.closure(), IntervalClosure::CLOSED_OPEN);
	/// assert!(Interval::closed_open(20, 10).is_err());
	/// ```
	pub fn closed_open(start: T, end: T) -> Result<Self, InvalidBoundsError<T>> {
		Interval::with_closure(start, end, IntervalClosure::CLOSED_OPEN)
	}

	/// Makes a new zero-width [`Interval`] at `point` with both sides
	/// using the given `closure`.
	///
	/// `Closed` gives the single-point interval `[point, point]` and
	/// `Open` gives `(point, point)` which contains no points but still
	/// takes part in comparisons.
	///
	/// # Examples
	/// ```
	/// use intervalic::interval::ie;
	/// use intervalic::{BoundaryClosure, BoundedInterval, Interval};
	///
	/// let opening = Interval::instant(10, BoundaryClosure::Closed);
	/// let closing = Interval::instant(20, BoundaryClosure::Open);
	///
	/// assert_eq!(ie(10, 20).overlaps(&opening), true);
	/// assert_eq!(ie(10, 20).overlaps(&closing), false);
	/// ```
	pub fn instant(point: T, closure: BoundaryClosure) -> Self
	where
		T: Clone,
	{
		Interval {
			start: point.clone(),
			end: point,
			start_closure: closure,
			end_closure: closure,
		}
	}
}

impl<T> Interval<T> {
	/// The closure of the start bound.
	pub fn start_closure(&self) -> BoundaryClosure {
		self.start_closure
	}

	/// The closure of the end bound.
	pub fn end_closure(&self) -> BoundaryClosure {
		self.end_closure
	}

	/// Consumes the interval returning its `(start, end)` bounds.
	pub fn into_bounds(self) -> (T, T) {
		(self.start, self.end)
	}
}

impl<T> BoundedInterval<T> for Interval<T>
where
	T: Ord,
{
	fn start(&self) -> &T {
		&self.start
	}

	fn end(&self) -> &T {
		&self.end
	}

	fn closure(&self) -> IntervalClosure {
		IntervalClosure::new(self.start_closure, self.end_closure)
	}
}

impl<T> RangeBounds<T> for Interval<T> {
	fn start_bound(&self) -> Bound<&T> {
		self.start_closure.bound(&self.start)
	}

	fn end_bound(&self) -> Bound<&T> {
		self.end_closure.bound(&self.end)
	}
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
	T: Ord,
{
	type Error = InvalidBoundsError<T>;

	fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
		Interval::closed_open(range.start, range.end)
	}
}

impl<T> TryFrom<RangeInclusive<T>> for Interval<T>
where
	T: Ord,
{
	type Error = InvalidBoundsError<T>;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
		let (start, end) = range.into_inner();
		Interval::with_closure(start, end, IntervalClosure::CLOSED)
	}
}

impl<T> Display for Interval<T>
where
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = match self.start_closure {
			BoundaryClosure::Closed => '[',
			BoundaryClosure::Open => '(',
		};
		let close = match self.end_closure {
			BoundaryClosure::Closed => ']',
			BoundaryClosure::Open => ')',
		};
		write!(f, "{open}{}, {}{close}", self.start, self.end)
	}
}

/// The shape an [`Interval`] is deserialized through before its bounds
/// are validated.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedInterval<T> {
	start: T,
	end: T,
	start_closure: BoundaryClosure,
	end_closure: BoundaryClosure,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<UncheckedInterval<T>> for Interval<T>
where
	T: Ord,
{
	type Error = InvalidBoundsError<T>;

	fn try_from(unchecked: UncheckedInterval<T>) -> Result<Self, Self::Error> {
		Interval::new(
			unchecked.start,
			unchecked.start_closure,
			unchecked.end,
			unchecked.end_closure,
		)
	}
}

#[track_caller]
fn checked<T>(start: T, end: T, closure: IntervalClosure) -> Interval<T>
where
	T: Ord + Debug,
{
	match Interval::with_closure(start, end, closure) {
		Ok(interval) => interval,
		Err(error) => invalid_bounds_panic(error),
	}
}

/// An included-included interval, `[x1, x2]`.
///
/// # Panics
///
/// Panics if `x1 > x2`.
#[track_caller]
pub fn ii<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord + Debug,
{
	checked(x1, x2, IntervalClosure::CLOSED)
}
/// An included-excluded interval, `[x1, x2)`.
///
/// # Panics
///
/// Panics if `x1 > x2`.
#[track_caller]
pub fn ie<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord + Debug,
{
	checked(x1, x2, IntervalClosure::CLOSED_OPEN)
}
/// An excluded-included interval, `(x1, x2]`.
///
/// # Panics
///
/// Panics if `x1 > x2`.
#[track_caller]
pub fn ei<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord + Debug,
{
	checked(x1, x2, IntervalClosure::OPEN_CLOSED)
}
/// An excluded-excluded interval, `(x1, x2)`.
///
/// # Panics
///
/// Panics if `x1 > x2`.
#[track_caller]
pub fn ee<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord + Debug,
{
	checked(x1, x2, IntervalClosure::OPEN)
}
/// An instant interval at `x`, see [`Interval::instant()`].
pub fn instant<T>(x: T, closure: BoundaryClosure) -> Interval<T>
where
	T: Ord + Clone,
{
	Interval::instant(x, closure)
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;
	use std::string::ToString;
	use std::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn new_tests() {
		let interval =
			Interval::new(10, BoundaryClosure::Open, 20, BoundaryClosure::Closed)
				.unwrap();
		assert_eq!(interval.start(), &10);
		assert_eq!(interval.end(), &20);
		assert_eq!(interval.start_closure(), BoundaryClosure::Open);
		assert_eq!(interval.end_closure(), BoundaryClosure::Closed);
		assert_eq!(interval.closure(), IntervalClosure::OPEN_CLOSED);

		assert_eq!(
			Interval::new(3, BoundaryClosure::Closed, 2, BoundaryClosure::Closed),
			Err(InvalidBoundsError { start: 3, end: 2 })
		);
		assert!(
			Interval::new(3, BoundaryClosure::Open, 3, BoundaryClosure::Open)
				.is_ok()
		);
	}

	#[test]
	fn constructors_tests() {
		assert_eq!(Interval::closed_open(10, 20), Ok(ie(10, 20)));
		assert_eq!(
			Interval::with_closure(10, 20, IntervalClosure::CLOSED),
			Ok(ii(10, 20))
		);
		assert_eq!(
			instant(10, BoundaryClosure::Closed),
			Interval::with_closure(10, 10, IntervalClosure::CLOSED).unwrap()
		);
		assert_eq!(
			instant(20, BoundaryClosure::Open),
			Interval::with_closure(20, 20, IntervalClosure::OPEN).unwrap()
		);
		assert_eq!(ei(1, 2).into_bounds(), (1, 2));
	}

	#[test]
	fn non_copy_points_tests() {
		let interval = ie("apple".to_string(), "cherry".to_string());
		//RangeBounds::contains is also in scope here
		assert!(BoundedInterval::contains(&interval, &"banana".to_string()));
		assert!(!BoundedInterval::contains(&interval, &"cherry".to_string()));

		let error = Interval::closed_open("b".to_string(), "a".to_string())
			.unwrap_err();
		assert_eq!(error.start, "b");
		assert_eq!(error.end, "a");
	}

	#[test]
	fn structural_equality_tests() {
		assert!(ii(10, 10) != ie(10, 10));
		assert!(ii(10, 10) == instant(10, BoundaryClosure::Closed));
	}

	#[test]
	#[should_panic(expected = "start 20 is after end 10")]
	fn shorthand_constructors_panic_tests() {
		ie(20, 10);
	}

	#[test]
	fn range_bounds_tests() {
		let interval = ei(2, 5);
		assert_eq!(interval.start_bound(), Bound::Excluded(&2));
		assert_eq!(interval.end_bound(), Bound::Included(&5));

		let map = BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c'), (5, 'd'), (6, 'e')]);
		assert_eq!(
			map.range(interval).map(|(_, v)| *v).collect::<Vec<_>>(),
			['c', 'd']
		);
	}

	#[test]
	fn try_from_ranges_tests() {
		assert_eq!(Interval::<i32>::try_from(10..20), Ok(ie(10, 20)));
		assert_eq!(Interval::<i32>::try_from(10..=20), Ok(ii(10, 20)));
		#[allow(clippy::reversed_empty_ranges)]
		let reversed = 20..10;
		assert_eq!(
			Interval::<i32>::try_from(reversed),
			Err(InvalidBoundsError { start: 20, end: 10 })
		);
	}

	#[test]
	fn display_tests() {
		assert_eq!(ie(10, 20).to_string(), "[10, 20)");
		assert_eq!(ei(20, 40).to_string(), "(20, 40]");
		assert_eq!(ii(1, 1).to_string(), "[1, 1]");
		assert_eq!(ee(-3, 3).to_string(), "(-3, 3)");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		let json = serde_json::to_string(&ei(1, 2)).unwrap();
		assert_eq!(
			json,
			r#"{"start":1,"end":2,"start_closure":"Open","end_closure":"Closed"}"#
		);
		assert_eq!(serde_json::from_str::<Interval<i32>>(&json).unwrap(), ei(1, 2));

		let error = serde_json::from_str::<Interval<i32>>(
			r#"{"start":2,"end":1,"start_closure":"Open","end_closure":"Closed"}"#,
		)
		.unwrap_err();
		assert!(error.to_string().contains("start 2 is after end 1"));
	}
}

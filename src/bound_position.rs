use core::cmp::Ordering;

use crate::closure::BoundaryClosure;

/// Where a bound actually sits on the line once its closure is taken
/// into account.
///
/// A closed bound sits exactly on its value, an open start sits
/// infinitesimally after its value and an open end infinitesimally
/// before it. Every predicate in [`BoundedInterval`] is a single
/// comparison of these positions, so this [`Ord`] implementation is the
/// whole boundary table of the crate.
///
/// [`BoundedInterval`]: crate::BoundedInterval
#[derive(Debug, Clone, Copy)]
pub(crate) enum BoundPosition<T> {
	/// A closed bound of either side, or a plain point.
	/// There is no need for different Start and End variations as the
	/// Ord implementations are equivalent.
	Closed(T),
	/// An open start bound.
	StartOpen(T),
	/// An open end bound.
	EndOpen(T),
}

impl<T> BoundPosition<T> {
	pub(crate) fn point(point: T) -> Self {
		BoundPosition::Closed(point)
	}
	pub(crate) fn start(point: T, closure: BoundaryClosure) -> Self {
		match closure {
			BoundaryClosure::Closed => BoundPosition::Closed(point),
			BoundaryClosure::Open => BoundPosition::StartOpen(point),
		}
	}
	pub(crate) fn end(point: T, closure: BoundaryClosure) -> Self {
		match closure {
			BoundaryClosure::Closed => BoundPosition::Closed(point),
			BoundaryClosure::Open => BoundPosition::EndOpen(point),
		}
	}
}

impl<T> Ord for BoundPosition<T>
where
	T: Ord,
{
	#[rustfmt::skip]
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(BoundPosition::Closed(x1), BoundPosition::Closed(x2)) => x1.cmp(x2),
			(BoundPosition::Closed(x1), BoundPosition::StartOpen(x2)) => cmp_with_priority(x1, x2, true),
			(BoundPosition::Closed(x1), BoundPosition::EndOpen(x2)) => cmp_with_priority(x1, x2, false),

			(BoundPosition::StartOpen(x1), BoundPosition::StartOpen(x2)) => x1.cmp(x2),
			(BoundPosition::StartOpen(x1), BoundPosition::Closed(x2)) => cmp_with_priority(x1, x2, false),
			(BoundPosition::StartOpen(x1), BoundPosition::EndOpen(x2)) => cmp_with_priority(x1, x2, false),

			(BoundPosition::EndOpen(x1), BoundPosition::EndOpen(x2)) => x1.cmp(x2),
			(BoundPosition::EndOpen(x1), BoundPosition::Closed(x2)) => cmp_with_priority(x1, x2, true),
			(BoundPosition::EndOpen(x1), BoundPosition::StartOpen(x2)) => cmp_with_priority(x1, x2, true),
		}
	}
}

impl<T> PartialOrd for BoundPosition<T>
where
	T: Ord,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> PartialEq for BoundPosition<T>
where
	T: Ord,
{
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}

impl<T> Eq for BoundPosition<T> where T: Ord {}

/// If they are equal say the item with priority is larger
/// where false means left has priority and true means right.
fn cmp_with_priority<T>(left: &T, right: &T, priority: bool) -> Ordering
where
	T: Ord,
{
	let result = left.cmp(right);

	match result {
		Ordering::Equal => match priority {
			false => Ordering::Greater,
			true => Ordering::Less,
		},
		x => x,
	}
}

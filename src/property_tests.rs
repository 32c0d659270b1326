//! Property-based tests for the algebraic laws of [`BoundedInterval`].

use proptest::prelude::*;

use crate::closure::BoundaryClosure;
use crate::direction::Direction::{After, Before};
use crate::interval::{ee, ii, Interval};
use crate::BoundedInterval;

fn closure() -> impl Strategy<Value = BoundaryClosure> {
	prop_oneof![Just(BoundaryClosure::Open), Just(BoundaryClosure::Closed)]
}

// A narrow domain so that shared bounds, abutments and instants come up
// often.
fn interval() -> impl Strategy<Value = Interval<i8>> {
	(-8_i8..8, -8_i8..8, closure(), closure()).prop_map(
		|(x1, x2, start_closure, end_closure)| {
			let (start, end) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
			Interval::new(start, start_closure, end, end_closure)
				.expect("sorted bounds are valid")
		},
	)
}

proptest! {
	#[test]
	fn overlaps_is_symmetric(a in interval(), b in interval()) {
		prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
	}

	#[test]
	fn before_is_dual_to_after(a in interval(), b in interval()) {
		prop_assert_eq!(a.is_interval(Before, &b), b.is_interval(After, &a));
		prop_assert_eq!(a.is_interval(After, &b), b.is_interval(Before, &a));
	}

	#[test]
	fn ordered_intervals_never_overlap(a in interval(), b in interval()) {
		prop_assert!(!(a.is_interval(Before, &b) && a.overlaps(&b)));
		prop_assert!(!(a.is_interval(After, &b) && a.overlaps(&b)));
	}

	#[test]
	fn contains_point_is_neither_before_nor_after(a in interval(), point in -10_i8..10) {
		prop_assert_eq!(
			a.contains(&point),
			!a.is(After, &point) && !a.is(Before, &point)
		);
	}

	#[test]
	fn closed_contains_open_with_same_bounds(x1 in -8_i8..8, x2 in -8_i8..8) {
		let (start, end) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
		prop_assert!(ii(start, end).contains_interval(&ee(start, end)));
		prop_assert!(!ee(start, end).contains_interval(&ii(start, end)));
	}

	#[test]
	fn identical_intervals_contain_each_other(a in interval()) {
		let b = a;
		prop_assert!(a.contains_interval(&b));
		prop_assert!(b.contains_interval(&a));
	}

	#[test]
	fn containment_implies_overlap_for_points(a in interval(), b in interval(), point in -10_i8..10) {
		if a.contains_interval(&b) && b.contains(&point) {
			prop_assert!(a.contains(&point));
		}
	}
}

//! This crate provides [`Interval`], a one-dimensional interval over any
//! totally ordered type, along with the [`BoundedInterval`] trait which
//! answers ordering, containment and overlap questions between intervals
//! and points with exact open/closed boundary semantics.
//!
//! ## Example using closed-open intervals
//!
//! ```rust
//! use intervalic::interval::ie;
//! use intervalic::{BoundedInterval, Direction};
//!
//! let morning = ie(9, 12);
//! let afternoon = ie(12, 17);
//!
//! // 12 belongs to the afternoon only, so the two abut without overlapping
//! assert_eq!(morning.overlaps(&afternoon), false);
//! assert_eq!(morning.is_interval(Direction::Before, &afternoon), true);
//!
//! assert_eq!(morning.contains(&9), true);
//! assert_eq!(morning.contains(&12), false);
//! ```
//!
//! ## Example using a custom interval type
//!
//! ```rust
//! use intervalic::interval::ii;
//! use intervalic::{BoundedInterval, IntervalClosure};
//!
//! // A booking always includes both its first and last night
//! struct Booking {
//! 	guest: &'static str,
//! 	first_night: u32,
//! 	last_night: u32,
//! }
//!
//! impl BoundedInterval<u32> for Booking {
//! 	fn start(&self) -> &u32 {
//! 		&self.first_night
//! 	}
//! 	fn end(&self) -> &u32 {
//! 		&self.last_night
//! 	}
//! 	fn closure(&self) -> IntervalClosure {
//! 		IntervalClosure::CLOSED
//! 	}
//! }
//!
//! let booking = Booking {
//! 	guest: "Ferris",
//! 	first_night: 3,
//! 	last_night: 6,
//! };
//!
//! assert_eq!(booking.overlaps(&ii(6, 9)), true);
//! assert_eq!(ii(1, 10).contains_interval(&booking), true);
//! println!("{} stays {} nights", booking.guest, booking.last_night - booking.first_night + 1);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Boundary Closure
//!
//! Every interval has a start bound and an end bound and each bound is
//! either [`Closed`] (the bound value is a member of the interval) or
//! [`Open`] (the bound value is excluded). Both sides are configured
//! independently so all four classic shapes `[a, b]`, `[a, b)`, `(a, b]`
//! and `(a, b)` are the same type.
//!
//! ### Continuous-ness
//!
//! Unlike discrete interval crates, nothing here assumes the point type
//! has a "next" value. `[1, 2]` and `[3, 4]` are *not* touching, there
//! could always be a value in between. Only the ordering of `T` is used.
//!
//! ### Instants
//!
//! An interval whose start equals its end is an "instant". `[4, 4]` is
//! the single point `4`. Instants with an open side, such as `[4, 4)`,
//! are allowed even though they contain no points, which lets callers
//! build an instant from a single closure flag with
//! [`Interval::instant()`].
//!
//! ### Before, After and Abutment
//!
//! An interval is "before" another when every one of its points is
//! smaller than every point of the other. Two intervals sharing a bound
//! value are ordered unless *both* include that value: `[10, 20)` is
//! before `[20, 30)`, `[10, 20]` is before `(20, 30]`, but `[10, 20]` and
//! `[20, 30]` overlap at `20`.
//!
//! ### Overlap
//!
//! Two intervals "overlap" if neither is before the other. Overlap is
//! always symmetric.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! [`Closed`]: BoundaryClosure::Closed
//! [`Open`]: BoundaryClosure::Open

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub(crate) mod bound_position;
pub(crate) mod utils;

pub mod bounded;
pub mod closure;
pub mod direction;
pub mod error;
pub mod interval;

#[cfg(test)]
mod property_tests;

pub use crate::bounded::BoundedInterval;
pub use crate::closure::{BoundaryClosure, IntervalClosure};
pub use crate::direction::Direction;
pub use crate::error::InvalidBoundsError;
pub use crate::interval::Interval;

//! A module containing [`InvalidBoundsError`].

use thiserror::Error;

/// The error returned when constructing an interval whose start is
/// greater than its end. Contains the bounds that were rejected so no
/// values are lost.
///
/// # Examples
/// ```
/// use intervalic::{Interval, InvalidBoundsError};
///
/// assert_eq!(
/// 	Interval::closed_open(20, 10),
/// 	Err(InvalidBoundsError { start: 20, end: 10 })
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid interval bounds: start {start:?} is after end {end:?}")]
pub struct InvalidBoundsError<T> {
	/// The start bound which was not used.
	pub start: T,
	/// The end bound which was not used.
	pub end: T,
}

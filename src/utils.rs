use core::fmt::Debug;

use crate::error::InvalidBoundsError;

/// Panics with the message of the given [`InvalidBoundsError`], used by
/// the infallible shorthand constructors.
#[track_caller]
pub(crate) fn invalid_bounds_panic<T>(error: InvalidBoundsError<T>) -> !
where
	T: Debug,
{
	panic!("{error}")
}

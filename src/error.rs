use std::ops::Range;

use thiserror::Error;

/// Returned by [`IntervalTree::try_insert()`] when the lower bound of the
/// interval is greater than its upper bound.
///
/// The rejected interval and value are handed back to the caller unchanged.
///
/// [`IntervalTree::try_insert()`]: crate::IntervalTree::try_insert
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid interval: lower bound is greater than the upper bound")]
pub struct InvalidInterval<R, V> {
    /// The rejected interval.
    pub range: Range<R>,
    /// The value that was to be associated with `range`.
    pub value: V,
}

impl<R, V> InvalidInterval<R, V> {
    /// Recover the rejected `(range, value)` tuple.
    pub fn into_inner(self) -> (Range<R>, V) {
        (self.range, self.value)
    }
}

use std::ops::Range;

/// A half-open interval `[low, high)` backed by a [`Range`].
///
/// A point `p` is contained by the interval iff `low <= p < high`. An interval
/// with `low > high` is accepted but contains no point.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Interval<T>(Range<T>);

impl<T> Interval<T> {
    /// The inclusive lower bound, used as the tree ordering key.
    pub(crate) fn low(&self) -> &T {
        &self.0.start
    }

    /// The exclusive upper bound.
    pub(crate) fn high(&self) -> &T {
        &self.0.end
    }

    pub(crate) fn as_range(&self) -> &Range<T> {
        &self.0
    }

    pub(crate) fn into_range(self) -> Range<T> {
        self.0
    }

    /// Returns true if `point` lies within `[low, high)`.
    pub(crate) fn contains_point(&self, point: &T) -> bool
    where
        T: Ord,
    {
        self.low() <= point && point < self.high()
    }

    /// Returns true if the lower bound does not exceed the upper bound.
    pub(crate) fn is_well_formed(&self) -> bool
    where
        T: Ord,
    {
        self.low() <= self.high()
    }
}

impl<T> PartialEq<Range<T>> for Interval<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Range<T>) -> bool {
        self.0.start == other.start && self.0.end == other.end
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self(value)
    }
}

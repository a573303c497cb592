use std::ops::Range;

use crate::interval::Interval;

/// A single `(interval, value)` record stored in an
/// [`IntervalTree`](crate::IntervalTree).
///
/// The value is opaque to the tree: it is never inspected or mutated, only
/// carried through insertion and handed back by queries and iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<R, V> {
    interval: Interval<R>,
    value: V,
}

impl<R, V> Entry<R, V> {
    pub(crate) fn new(interval: Interval<R>, value: V) -> Self {
        Self { interval, value }
    }

    /// The half-open `[start, end)` interval of this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use augavl::IntervalTree;
    ///
    /// let mut tree = IntervalTree::default();
    /// tree.insert(4..10, "bananas");
    ///
    /// let hits = tree.query_entries(&5);
    /// assert_eq!(hits[0].interval(), &(4..10));
    /// ```
    pub fn interval(&self) -> &Range<R> {
        self.interval.as_range()
    }

    /// The value associated with the interval.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Explode this [`Entry`] into the [`Range`] and value `V` it contains.
    pub fn into_tuple(self) -> (Range<R>, V) {
        (self.interval.into_range(), self.value)
    }

    pub(crate) fn bounds(&self) -> &Interval<R> {
        &self.interval
    }
}

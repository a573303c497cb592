use std::ops::Range;

use crate::{
    entry::Entry,
    error::InvalidInterval,
    interval::Interval,
    iter::{OwnedIter, RefIter},
    node::Node,
};

/// An [`IntervalTree`] stores `(interval, value)` tuples, enabling efficient
/// lookup of every interval containing a given point (a "stabbing" query).
///
/// This [`IntervalTree`] stores half-open intervals `[start, end)`: a point `p`
/// is contained by an interval iff `start <= p < end`.
///
/// # Read Optimised
///
/// This [`IntervalTree`] is backed by an augmented AVL tree ordered by the
/// interval lower bound. Each node caches the maximum upper bound of its
/// subtree, allowing queries to skip entire subtrees that end at or before the
/// query point.
///
/// The internal tree structure is modified during inserts to ensure the tree
/// always remains balanced. This bound on the worst-case tree height maintains
/// a logarithmic lookup time complexity at the cost of constant-time subtree
/// rotations during insert operations.
///
/// ## Shared Lower Bounds
///
/// Intervals sharing a lower bound are stored in the same tree node, in
/// insertion order. Inserting the same interval twice stores two entries; no
/// entry is ever replaced or merged.
///
/// ## Invalid Intervals
///
/// [`IntervalTree::insert()`] accepts invalid intervals such as `[42, 0)`
/// without panicking. Such an interval contains no point and is never returned
/// by a query, but is still yielded when iterating. Use
/// [`IntervalTree::try_insert()`] to reject them instead.
#[derive(Debug, Clone)]
pub struct IntervalTree<R, V> {
    root: Option<Box<Node<R, V>>>,
    len: usize,
}

impl<R, V> Default for IntervalTree<R, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<R, V> IntervalTree<R, V> {
    /// Construct an empty [`IntervalTree`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries stored in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The AVL height of the tree, where a single node has height 0.
    ///
    /// Returns [`None`] for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|v| v.height() as usize)
    }

    /// Iterate over references of all `(interval, value)` tuples stored in this
    /// tree.
    ///
    /// # Ordering
    ///
    /// The returned [`Iterator`] yields values from lowest to highest ordered
    /// by the interval lower bound. Entries sharing a lower bound are yielded
    /// in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Range<R>, &V)> {
        RefIter::new(self.root.as_deref()).map(|v| (v.interval(), v.value()))
    }

    /// Collect all `(interval, value)` tuples stored in this tree, in the
    /// order described by [`IntervalTree::iter()`].
    ///
    /// ```
    /// use augavl::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    /// t.insert(5..8, "b");
    /// t.insert(1..3, "a");
    /// t.insert(5..6, "c");
    ///
    /// assert_eq!(
    ///     t.to_ordered_vec(),
    ///     [(&(1..3), &"a"), (&(5..8), &"b"), (&(5..6), &"c")]
    /// );
    /// ```
    pub fn to_ordered_vec(&self) -> Vec<(&Range<R>, &V)> {
        self.iter().collect()
    }
}

impl<R, V> IntervalTree<R, V>
where
    R: Ord,
{
    /// Insert an `(interval, value)` tuple into the tree.
    ///
    /// Insertion always succeeds and increases [`IntervalTree::len()`] by
    /// exactly one.
    pub fn insert(&mut self, range: Range<R>, value: V)
    where
        R: Clone,
    {
        self.insert_entry(Entry::new(Interval::from(range), value));
    }

    /// Insert an `(interval, value)` tuple into the tree, rejecting intervals
    /// with a lower bound greater than the upper bound.
    ///
    /// ```
    /// use augavl::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    ///
    /// assert!(t.try_insert(1..4, "ok").is_ok());
    ///
    /// let err = t.try_insert(9..2, "backwards").unwrap_err();
    /// assert_eq!(err.into_inner(), (9..2, "backwards"));
    ///
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn try_insert(&mut self, range: Range<R>, value: V) -> Result<(), InvalidInterval<R, V>>
    where
        R: Clone,
    {
        let interval = Interval::from(range);
        if !interval.is_well_formed() {
            #[cfg(feature = "tracing")]
            tracing::debug!("try_insert: rejecting interval with start > end");

            return Err(InvalidInterval {
                range: interval.into_range(),
                value,
            });
        }

        self.insert_entry(Entry::new(interval, value));
        Ok(())
    }

    fn insert_entry(&mut self, entry: Entry<R, V>)
    where
        R: Clone,
    {
        match self.root {
            Some(ref mut v) => {
                v.insert(entry);
            }
            None => self.root = Some(Box::new(Node::new(entry))),
        }

        self.len += 1;
    }

    /// Return the values of all intervals containing `point`.
    ///
    /// The result is not ordered. Use [`IntervalTree::query_entries()`] to
    /// obtain the matching intervals too.
    ///
    /// ```
    /// use augavl::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    /// t.insert(1..5, "a");
    /// t.insert(2..3, "b");
    /// t.insert(8..10, "c");
    ///
    /// let mut got = t.query(&2);
    /// got.sort();
    /// assert_eq!(got, [&"a", &"b"]);
    ///
    /// assert!(t.query(&6).is_empty());
    /// ```
    pub fn query(&self, point: &R) -> Vec<&V> {
        self.query_entries(point)
            .into_iter()
            .map(|v| v.value())
            .collect()
    }

    /// Return all entries with an interval containing `point`.
    ///
    /// The result is not ordered.
    pub fn query_entries(&self, point: &R) -> Vec<&Entry<R, V>> {
        let mut out = vec![];
        if let Some(root) = self.root.as_deref() {
            root.stab(point, &mut out);
        }
        out
    }
}

impl<R, V> IntoIterator for IntervalTree<R, V> {
    type Item = (Range<R>, V);
    type IntoIter = OwnedIter<R, V>;

    /// Consume the tree, yielding all `(interval, value)` tuples in the order
    /// described by [`IntervalTree::iter()`].
    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root)
    }
}

impl<R, V> Extend<(Range<R>, V)> for IntervalTree<R, V>
where
    R: Ord + Clone,
{
    fn extend<T: IntoIterator<Item = (Range<R>, V)>>(&mut self, iter: T) {
        for (range, value) in iter {
            self.insert(range, value);
        }
    }
}

impl<R, V> FromIterator<(Range<R>, V)> for IntervalTree<R, V>
where
    R: Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = (Range<R>, V)>>(iter: T) -> Self {
        let mut t = IntervalTree::new();
        t.extend(iter);
        t
    }
}

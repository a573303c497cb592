use std::cmp::Ordering;

use crate::entry::Entry;

/// Describes how an insert changed the subtree it descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// A new [`Node`] was linked into the subtree, which may have changed the
    /// subtree height.
    Linked,

    /// The entry shares a lower bound with an existing [`Node`] and was
    /// appended to its duplicate list. The shape of the tree is unchanged.
    Duplicate,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<R, V> {
    /// Child nodes pointers.
    left: Option<Box<Node<R, V>>>,
    right: Option<Box<Node<R, V>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an empty subtree is treated as -1 when
    /// computing balance factors.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The maximum upper bound of all intervals (duplicates included) for the
    /// subtree rooted at this [`Node`].
    subtree_max: R,

    /// The first entry inserted with this lower bound.
    entry: Entry<R, V>,

    /// Later entries with the same lower bound, in insertion order.
    duplicates: Vec<Entry<R, V>>,
}

impl<R, V> Node<R, V> {
    pub(crate) fn new(entry: Entry<R, V>) -> Self
    where
        R: Clone,
    {
        Self {
            subtree_max: entry.bounds().high().clone(),
            entry,
            duplicates: Vec::new(),
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Insert `entry` into the subtree rooted at `self`, rebalancing it if
    /// necessary.
    pub(crate) fn insert(self: &mut Box<Self>, entry: Entry<R, V>) -> InsertResult
    where
        R: Ord + Clone,
    {
        let key = entry.bounds().low().clone();
        insert_recurse(self, &key, entry)
    }

    /// Append all entries in this subtree whose interval contains `point` to
    /// `out`.
    ///
    /// The walk visits this node, then the right subtree, then the left
    /// subtree, so the output is not ordered.
    pub(crate) fn stab<'a>(&'a self, point: &R, out: &mut Vec<&'a Entry<R, V>>)
    where
        R: Ord,
    {
        // All entries in this node share the lower bound.
        if self.low() <= point {
            out.extend(self.entries().filter(|e| e.bounds().contains_point(point)));
        }

        // Prune this subtree from the search if every interval within it ends
        // at or before the query point.
        if point >= self.subtree_max() {
            return;
        }

        // The right subtree holds strictly greater lower bounds, none of which
        // can start at or before a point that lies below this node.
        if point >= self.low() {
            if let Some(right) = self.right() {
                right.stab(point, out);
            }
        }

        if let Some(left) = self.left() {
            left.stab(point, out);
        }
    }

    /// The lower bound shared by every entry in this node.
    pub(crate) fn low(&self) -> &R {
        self.entry.bounds().low()
    }

    pub(crate) fn entry(&self) -> &Entry<R, V> {
        &self.entry
    }

    pub(crate) fn duplicates(&self) -> &[Entry<R, V>] {
        &self.duplicates
    }

    /// The primary entry followed by the duplicates, in insertion order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry<R, V>> {
        std::iter::once(&self.entry).chain(self.duplicates.iter())
    }

    pub(crate) fn subtree_max(&self) -> &R {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the primary [`Entry`] and its duplicates.
    pub(crate) fn into_entries(self) -> (Entry<R, V>, Vec<Entry<R, V>>) {
        (self.entry, self.duplicates)
    }
}

fn insert_recurse<R, V>(n: &mut Box<Node<R, V>>, key: &R, entry: Entry<R, V>) -> InsertResult
where
    R: Ord + Clone,
{
    let child = match key.cmp(n.low()) {
        Ordering::Less => &mut n.left,
        Ordering::Greater => &mut n.right,
        Ordering::Equal => {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                n_duplicates = n.duplicates.len() + 1,
                "insert: appending entry with existing lower bound"
            );

            n.duplicates.push(entry);
            update_subtree_max(n);
            return InsertResult::Duplicate;
        }
    };

    let inserted = match child {
        Some(v) => insert_recurse(v, key, entry),
        None => {
            // Insert the value as a new immediate descendent of n.
            *child = Some(Box::new(Node::new(entry)));
            InsertResult::Linked
        }
    };

    if inserted == InsertResult::Duplicate {
        // The tree structure has not been modified, so it does not require
        // rebalancing, but the appended upper bound may raise the subtree max
        // of every node on the path back to the root.
        update_subtree_max(n);
        return inserted;
    }

    update_height(n);
    update_subtree_max(n);

    // Determine the balance factor of the subtree rooted at n and correct it
    // if the absolute difference in height between branches is > 1.
    let skew = balance(n);
    rebalance(n, skew, key);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);

    inserted
}

/// Restore the AVL balance of the subtree rooted at `n` after inserting the
/// entry with lower bound `key` into it.
///
/// The inserted key is compared against the heavy child to pick between a
/// single and a double rotation. This is only valid immediately after an
/// insert, where the new node is known to sit below the heavy child.
fn rebalance<R, V>(n: &mut Box<Node<R, V>>, balance: i16, key: &R)
where
    R: Ord + Clone,
{
    match (balance, n.left(), n.right()) {
        // Left-heavy, inserted into the left subtree of the left child.
        (2.., Some(l), _) if key < l.low() => {
            #[cfg(feature = "tracing")]
            tracing::trace!(balance, "rebalance: left-left, rotating right");

            rotate_right(n);
        }
        // Left-heavy, inserted into the right subtree of the left child.
        (2.., Some(_l), _) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(balance, "rebalance: left-right, double rotation");

            if let Some(l) = n.left_mut() {
                rotate_left(l);
            }
            rotate_right(n);
        }
        // Right-heavy, inserted into the right subtree of the right child.
        (..=-2, _, Some(r)) if key > r.low() => {
            #[cfg(feature = "tracing")]
            tracing::trace!(balance, "rebalance: right-right, rotating left");

            rotate_left(n);
        }
        // Right-heavy, inserted into the left subtree of the right child.
        (..=-2, _, Some(_r)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(balance, "rebalance: right-left, double rotation");

            if let Some(r) = n.right_mut() {
                rotate_right(r);
            }
            rotate_left(n);
        }
        (-1..=1, _, _) => { /* The tree is well balanced */ }
        _ => unreachable!(),
    }
}

fn height<R, V>(n: Option<&Node<R, V>>) -> i16 {
    n.map(|v| v.height() as i16).unwrap_or(-1)
}

fn update_height<R, V>(n: &mut Node<R, V>) {
    // Correctness: both children heights are >= -1, so the result is >= 0.
    n.height = (1 + height(n.left()).max(height(n.right()))) as u8;
}

fn update_subtree_max<R, V>(n: &mut Node<R, V>)
where
    R: Ord + Clone,
{
    let new_max = n
        .entries()
        .map(|e| e.bounds().high())
        .chain(n.left().map(|v| v.subtree_max()))
        .chain(n.right().map(|v| v.subtree_max()))
        .max()
        .cloned();

    if let Some(new_max) = new_max {
        n.subtree_max = new_max;
    }
}

/// Recompute the cached height and subtree max of `n` from its children.
fn refresh<R, V>(n: &mut Node<R, V>)
where
    R: Ord + Clone,
{
    update_height(n);
    update_subtree_max(n);
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<R, V>(n: &Node<R, V>) -> i16 {
    height(n.left()) - height(n.right())
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<R, V>(x: &mut Box<Node<R, V>>)
where
    R: Ord + Clone,
{
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    // "x" now holds the pivot and "p" the demoted subtree root, which adopts
    // the pivot's inner subtree "2".
    p.right = x.left.take();

    // Children before parents: each refresh reads only cached child state.
    if let Some(inner) = p.right.as_mut() {
        refresh(inner);
    }
    refresh(&mut p);

    x.left = Some(p);
    refresh(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<R, V>(y: &mut Box<Node<R, V>>)
where
    R: Ord + Clone,
{
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();

    if let Some(inner) = p.left.as_mut() {
        refresh(inner);
    }
    refresh(&mut p);

    y.right = Some(p);
    refresh(y);
}

use std::{ops::Range, vec};

use crate::{entry::Entry, node::Node};

/// An iterator of owned `(range, value)` tuples as the underlying tree
/// `into_iter()` impl.
///
/// Tuples are yielded in ascending lower bound order, and entries sharing a
/// lower bound are yielded in insertion order.
#[derive(Debug)]
pub struct OwnedIter<R, V> {
    stack: Vec<Box<Node<R, V>>>,
    duplicates: vec::IntoIter<Entry<R, V>>,
}

impl<R, V> OwnedIter<R, V> {
    pub(crate) fn new(root: Option<Box<Node<R, V>>>) -> Self {
        let mut this = Self {
            stack: vec![],
            duplicates: Default::default(),
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<R, V>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<R, V> Iterator for OwnedIter<R, V> {
    type Item = (Range<R>, V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.duplicates.next() {
            return Some(v.into_tuple());
        }

        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        let (entry, duplicates) = v.into_entries();
        self.duplicates = duplicates.into_iter();

        Some(entry.into_tuple())
    }
}

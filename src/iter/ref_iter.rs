use std::slice;

use crate::{entry::Entry, node::Node};

/// An in-order walk over the [`Entry`] instances of a subtree.
///
/// Entries are yielded in ascending lower bound order. Entries sharing a lower
/// bound are yielded in insertion order.
#[derive(Debug)]
pub(crate) struct RefIter<'a, R, V> {
    stack: Vec<&'a Node<R, V>>,

    /// The remaining duplicates of the most recently yielded node.
    duplicates: slice::Iter<'a, Entry<R, V>>,
}

impl<'a, R, V> RefIter<'a, R, V> {
    pub(crate) fn new(root: Option<&'a Node<R, V>>) -> Self {
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

    fn push_subtree(&mut self, subtree_root: &'a Node<R, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, R, V> Iterator for RefIter<'a, R, V> {
    type Item = &'a Entry<R, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.duplicates.next() {
            return Some(v);
        }

        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        self.duplicates = v.duplicates().iter();
        Some(v.entry())
    }
}

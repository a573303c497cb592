//! An augmented AVL interval tree for point "stabbing" queries.
//!
//! An [`IntervalTree`] stores half-open `[start, end)` intervals, each mapped
//! to an opaque value, and returns every interval containing a given point in
//! logarithmic time instead of scanning all entries.
//!
//! ```
//! use augavl::IntervalTree;
//!
//! let mut t = IntervalTree::default();
//!
//! t.insert(9..17, "work");
//! t.insert(12..13, "lunch");
//! t.insert(19..23, "evening");
//!
//! let mut busy = t.query(&12);
//! busy.sort();
//! assert_eq!(busy, [&"lunch", &"work"]);
//!
//! // The upper bound is exclusive.
//! assert!(t.query(&17).is_empty());
//!
//! // Iteration yields entries ordered by the interval lower bound.
//! let order = t.iter().map(|(_range, v)| *v).collect::<Vec<_>>();
//! assert_eq!(order, ["work", "lunch", "evening"]);
//! ```
//!
//! # Features
//!
//! * `tracing`: emit [`tracing`] events describing tree rotations, duplicate
//!   lower bound appends and rejected intervals.
//!
//! [`tracing`]: https://docs.rs/tracing

mod entry;
mod error;
mod interval;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use entry::*;
pub use error::*;
pub use iter::OwnedIter;
pub use tree::*;


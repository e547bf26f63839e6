//! Priority queue built on an unbalanced binary search tree.
//!
//! Entries are `(priority, value)` pairs. The lowest priority is served
//! first and entries sharing a priority are served first-in-first-out.
//! Each distinct priority owns exactly one tree node; further entries at
//! that priority queue up on the node's chain.
//!
//! All "pointers" are `Option<u32>` indices into a `Vec`-backed arena, so
//! the parent back-links used for in-order traversal never own anything
//! and copy, comparison and teardown never recurse.
//!
//! The tree is never rebalanced: enqueueing priorities in sorted order
//! produces a list-shaped tree and O(n) operations. This is accepted.
//!
//! # Example
//!
//! ```
//! use bst_prqueue::{PrQueue, PrQueueError};
//!
//! let mut pq = PrQueue::new();
//! pq.enqueue("A", 1);
//! pq.enqueue("B", 2);
//! pq.enqueue("C", 2);
//! pq.enqueue("D", 3);
//!
//! assert_eq!(pq.to_string(), "1 value: A\n2 value: B\n2 value: C\n3 value: D\n");
//! assert_eq!(pq.dequeue(), Ok("A"));
//! assert_eq!(pq.peek(), Ok(&"B"));
//! assert_eq!(pq.size(), 3);
//!
//! pq.clear();
//! assert_eq!(pq.dequeue(), Err(PrQueueError::EmptyQueue));
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, comparator alias |
//! [`util`] | `first`, `next`, `insert`, `remove`, `relocate` over the arena |
//! [`node`] | [`PqNode`]: one priority and its FIFO chain |
//! [`queue`] | [`PrQueue`] |
//! [`cursor`] | [`Cursor`] state machine behind `begin()` / `next()` |
//! [`iter`] | [`Iter`], [`IntoIter`] |
//! [`print`] | tree-shape dump |

pub mod cursor;
pub mod error;
pub mod iter;
pub mod node;
pub mod print;
pub mod queue;
pub mod types;
pub mod util;

pub use cursor::Cursor;
pub use error::PrQueueError;
pub use iter::{IntoIter, Iter};
pub use node::PqNode;
pub use queue::PrQueue;
pub use types::{Comparator, Node};

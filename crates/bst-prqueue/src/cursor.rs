//! Ascending-order traversal state machine.
//!
//! The same [`Cursor`] drives both the container's embedded
//! `begin()` / `next()` protocol and the independent [`crate::Iter`].

use crate::node::PqNode;
use crate::queue::PrQueue;
use crate::util::{first, next};

/// Position of a traversal.
///
/// `At` addresses a chain slot of a live node. The embedded cursor is reset
/// to `Idle` by every mutation, so it never outlives the node it points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// `begin()` has not been called since the last mutation.
    #[default]
    Idle,
    At {
        node: u32,
        slot: usize,
    },
    Exhausted,
}

impl Cursor {
    /// First chain slot of the lowest priority, or `Exhausted` when empty.
    pub(crate) fn start<K, V>(arena: &[PqNode<K, V>], root: Option<u32>) -> Self {
        match first(arena, root) {
            Some(node) => Cursor::At { node, slot: 0 },
            None => Cursor::Exhausted,
        }
    }

    /// Position following `slot` of `node`: the rest of the chain first,
    /// then the in-order successor.
    pub(crate) fn advance<K, V>(arena: &[PqNode<K, V>], node: u32, slot: usize) -> Self {
        if slot + 1 < arena[node as usize].chain.len() {
            return Cursor::At {
                node,
                slot: slot + 1,
            };
        }
        match next(arena, node) {
            Some(node) => Cursor::At { node, slot: 0 },
            None => Cursor::Exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Cursor::Exhausted)
    }
}

impl<K, V, C> PrQueue<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Positions the embedded cursor on the lowest-priority entry.
    ///
    /// Restartable: calling it again rewinds to the beginning.
    pub fn begin(&mut self) {
        self.cursor = Cursor::start(&self.arena, self.root);
    }

    /// Yields the entry under the embedded cursor and advances it.
    ///
    /// Returns `None` once every entry has been produced, or when `begin()`
    /// has not been called since the last mutation. A full pass yields
    /// exactly `size()` entries in dequeue order.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(&K, &V)> {
        let Cursor::At { node, slot } = self.cursor else {
            return None;
        };
        self.cursor = Cursor::advance(&self.arena, node, slot);
        let n = &self.arena[node as usize];
        n.chain.get(slot).map(|v| (&n.k, v))
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

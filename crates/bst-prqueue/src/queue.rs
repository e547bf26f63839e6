use std::fmt;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::PrQueueError;
use crate::node::{key_of, PqNode};
use crate::types::default_comparator;
use crate::util::{find, first, height, insert, relocate, remove, set_l, set_r};

/// Priority queue over an unbalanced binary search tree keyed by priority.
///
/// The lowest priority is served first; entries sharing a priority are
/// served in the order they were enqueued.
///
/// Storage:
/// - Nodes live in an arena and link to each other by `u32` index.
/// - Same-priority entries are a `VecDeque` on their node, so a priority
///   occupies exactly one tree position however many entries it holds.
pub struct PrQueue<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub comparator: C,
    pub(crate) arena: Vec<PqNode<K, V>>,
    pub(crate) root: Option<u32>,
    pub(crate) size: usize,
    pub(crate) cursor: Cursor,
}

impl<K, V> PrQueue<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Pre-sizes the arena for `capacity` distinct priorities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, default_comparator::<K>)
    }
}

impl<K, V> Default for PrQueue<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> PrQueue<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            comparator,
            arena: Vec::with_capacity(capacity),
            root: None,
            size: 0,
            cursor: Cursor::Idle,
        }
    }

    fn push_node(&mut self, priority: K, value: V) -> u32 {
        self.arena.push(PqNode::new(priority, value));
        (self.arena.len() - 1) as u32
    }

    /// Adds `value` behind every entry already queued at `priority`.
    ///
    /// A new priority becomes a leaf; the tree is never rebalanced.
    pub fn enqueue(&mut self, value: V, priority: K) {
        let existing = find(
            &self.arena,
            self.root,
            &priority,
            key_of,
            &self.comparator,
        );
        match existing {
            Some(node) => {
                let chain = &mut self.arena[node as usize].chain;
                chain.push_back(value);
                trace!(size = self.size + 1, chain_len = chain.len(), "enqueue");
            }
            None => {
                let node = self.push_node(priority, value);
                self.root = insert(&mut self.arena, self.root, node, key_of, &self.comparator);
                trace!(size = self.size + 1, chain_len = 1, "enqueue");
            }
        }
        self.size += 1;
        self.cursor = Cursor::Idle;
    }

    /// Removes and returns the oldest entry of the lowest priority.
    pub fn dequeue(&mut self) -> Result<V, PrQueueError> {
        let node = first(&self.arena, self.root).ok_or(PrQueueError::EmptyQueue)?;
        let value = self.arena[node as usize]
            .chain
            .pop_front()
            .ok_or(PrQueueError::EmptyQueue)?;
        let drained = self.arena[node as usize].chain.is_empty();
        if drained {
            self.root = remove(&mut self.arena, self.root, node);
            self.release(node);
        }
        self.size -= 1;
        self.cursor = Cursor::Idle;
        trace!(size = self.size, drained, "dequeue");
        Ok(value)
    }

    /// Value `dequeue` would return next, without removing it.
    pub fn peek(&self) -> Result<&V, PrQueueError> {
        self.peek_entry()
            .map(|(_, v)| v)
            .ok_or(PrQueueError::EmptyQueue)
    }

    pub fn peek_entry(&self) -> Option<(&K, &V)> {
        let node = &self.arena[first(&self.arena, self.root)? as usize];
        node.chain.front().map(|v| (&node.k, v))
    }

    /// Total number of entries, chained ones included.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        debug!(size = self.size, nodes = self.arena.len(), "clear");
        self.arena.clear();
        self.root = None;
        self.size = 0;
        self.cursor = Cursor::Idle;
    }

    /// Arena index of the tree root. Read-only view for structural checks.
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> Option<&PqNode<K, V>> {
        self.arena.get(idx as usize)
    }

    /// Nodes on the longest root-to-leaf path. Equals the number of distinct
    /// priorities when they were enqueued in sorted order.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Drops the detached node at `node`, moving the last arena node into
    /// its slot.
    fn release(&mut self, node: u32) {
        let moved = (self.arena.len() - 1) as u32;
        self.arena.swap_remove(node as usize);
        if node != moved {
            self.root = relocate(&mut self.arena, self.root, moved, node);
        }
    }

    /// Replaces the contents of `self` with a node-for-node copy of `source`.
    fn copy_tree(&mut self, source: &Self)
    where
        K: Clone,
        V: Clone,
    {
        self.clear();
        self.arena.reserve(source.arena.len());

        // (source index, parent in the copy, attach as left child)
        let mut stack: Vec<(u32, Option<u32>, bool)> = Vec::new();
        if let Some(root) = source.root {
            stack.push((root, None, false));
        }
        while let Some((src, parent, left)) = stack.pop() {
            let from = &source.arena[src as usize];
            self.arena.push(PqNode {
                p: parent,
                l: None,
                r: None,
                k: from.k.clone(),
                chain: from.chain.clone(),
            });
            let idx = (self.arena.len() - 1) as u32;
            match parent {
                None => self.root = Some(idx),
                Some(p) if left => set_l(&mut self.arena, p, Some(idx)),
                Some(p) => set_r(&mut self.arena, p, Some(idx)),
            }
            if let Some(r) = from.r {
                stack.push((r, Some(idx), false));
            }
            if let Some(l) = from.l {
                stack.push((l, Some(idx), true));
            }
        }

        self.size = source.size;
        debug!(size = self.size, nodes = self.arena.len(), "deep copy");
    }
}

impl<K, V, C> Clone for PrQueue<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> i32 + Clone,
{
    fn clone(&self) -> Self {
        let mut out =
            Self::with_capacity_and_comparator(self.arena.len(), self.comparator.clone());
        out.copy_tree(self);
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.comparator = source.comparator.clone();
        self.copy_tree(source);
    }
}

/// Shape-sensitive equality: same size and node-for-node identical trees.
///
/// Two queues holding the same entries can compare unequal when different
/// insertion orders produced different tree shapes, even though they would
/// dequeue identically.
impl<K, V, C> PartialEq for PrQueue<K, V, C>
where
    K: PartialEq,
    V: PartialEq,
    C: Fn(&K, &K) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (x, y) = (&self.arena[a as usize], &other.arena[b as usize]);
                    if x.k != y.k || x.chain != y.chain {
                        return false;
                    }
                    stack.push((x.l, y.l));
                    stack.push((x.r, y.r));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K, V, C> Eq for PrQueue<K, V, C>
where
    K: Eq,
    V: Eq,
    C: Fn(&K, &K) -> i32,
{
}

/// One `"<priority> value: <value>"` line per entry, in dequeue order.
impl<K, V, C> fmt::Display for PrQueue<K, V, C>
where
    K: fmt::Display,
    V: fmt::Display,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.iter() {
            writeln!(f, "{k} value: {v}")?;
        }
        Ok(())
    }
}

impl<K, V, C> fmt::Debug for PrQueue<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Extend<(K, V)> for PrQueue<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for PrQueue<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

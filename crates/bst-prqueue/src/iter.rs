use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::node::PqNode;
use crate::queue::PrQueue;

/// Borrowing ascending-order iterator.
///
/// Holds its own [`Cursor`], so any number of them can walk the same queue
/// at once, independently of the embedded `begin()` / `next()` cursor.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    arena: &'a [PqNode<K, V>],
    pos: Cursor,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let Cursor::At { node, slot } = self.pos else {
            return None;
        };
        self.pos = Cursor::advance(self.arena, node, slot);
        self.remaining = self.remaining.saturating_sub(1);
        let n = &self.arena[node as usize];
        n.chain.get(slot).map(|v| (&n.k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator; every step is a `dequeue`.
pub struct IntoIter<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    queue: PrQueue<K, V, C>,
}

impl<K, V, C> Iterator for IntoIter<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.size(), Some(self.queue.size()))
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> where C: Fn(&K, &K) -> i32 {}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> where C: Fn(&K, &K) -> i32 {}

impl<K, V, C> PrQueue<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Entries as `(priority, value)` in the order repeated `dequeue` calls
    /// would return them.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            pos: Cursor::start(&self.arena, self.root),
            remaining: self.size,
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a PrQueue<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for PrQueue<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = V;
    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

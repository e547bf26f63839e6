use std::collections::VecDeque;

use crate::types::Node;

/// One tree node per distinct priority.
///
/// Every entry enqueued with this priority lives in `chain`, oldest first.
/// A node is only ever present in the tree while its chain is non-empty.
#[derive(Clone, Debug)]
pub struct PqNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub chain: VecDeque<V>,
}

impl<K, V> PqNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        let mut chain = VecDeque::with_capacity(1);
        chain.push_back(v);
        Self {
            p: None,
            l: None,
            r: None,
            k,
            chain,
        }
    }

    pub fn priority(&self) -> &K {
        &self.k
    }

    /// Entries at this priority in FIFO order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.chain.iter()
    }

    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }
}

impl<K, V> Node for PqNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

pub(crate) fn key_of<K, V>(node: &PqNode<K, V>) -> &K {
    &node.k
}

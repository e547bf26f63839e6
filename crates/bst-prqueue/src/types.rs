//! Node link trait and comparator alias.
//!
//! Tree "pointers" are `Option<u32>` indices into a [`Vec`]-backed arena.
//! All link-manipulation helpers in [`crate::util`] take the arena as a
//! slice and work with indices, so the parent back-reference never owns
//! anything.

/// Tree links (`p`, `l`, `r`) of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Priority comparator: negative when `a` is served before `b`, zero when
/// both share a priority, positive otherwise.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Ordering used by [`crate::PrQueue::new`].
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

//! Arena link helpers for the priority tree.
//!
//! Key-based helpers accept a `key_of` accessor closure so they work with
//! any arena node layout that implements [`Node`].

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node, i.e. the lowest priority.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
///
/// Descends into the right subtree when there is one, otherwise climbs
/// until the path turns left.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds the node holding `key`.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Attaches `node` as the left child of `parent`, pushing any existing left
/// child down under `node`.
pub fn insert_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    let l = get_l(arena, parent);
    set_l(arena, node, l);
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
    if let Some(l) = l {
        set_p(arena, l, Some(node));
    }
}

/// Attaches `node` as the right child of `parent`, pushing any existing right
/// child down under `node`.
pub fn insert_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    let r = get_r(arena, parent);
    set_r(arena, node, r);
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
    if let Some(r) = r {
        set_p(arena, r, Some(node));
    }
}

/// Plain BST leaf insert, no rebalancing. Returns the new root.
///
/// Keys comparing equal go right; callers that keep one node per key must
/// [`find`] first.
pub fn insert<N, K, F, C>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(node);
    };

    loop {
        let cmp = comparator(key_of(&arena[node as usize]), key_of(&arena[curr as usize]));
        let child = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };

        match child {
            Some(c) => curr = c,
            None => {
                if cmp < 0 {
                    insert_left(arena, node, curr);
                } else {
                    insert_right(arena, node, curr);
                }
                return root;
            }
        }
    }
}

/// Replaces `node` with `child` in its parent's child slot.
fn replace_in_parent<N: Node>(arena: &mut [N], p: u32, node: u32, child: Option<u32>) {
    if get_l(arena, p) == Some(node) {
        set_l(arena, p, child);
    } else {
        set_r(arena, p, child);
    }
}

/// Unlinks `node` from the tree rooted at `root`, leaving it detached in
/// the arena. Returns the new root.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    let child = match (l, r) {
        (Some(l), Some(r)) => {
            let mut most_right = l;
            while let Some(rr) = get_r(arena, most_right) {
                most_right = rr;
            }
            set_r(arena, most_right, Some(r));
            set_p(arena, r, Some(most_right));
            Some(l)
        }
        (l, r) => l.or(r),
    };

    if let Some(c) = child {
        set_p(arena, c, p);
    }
    match p {
        Some(p) => {
            replace_in_parent(arena, p, node, child);
            root
        }
        None => child,
    }
}

/// Rewires every link that points at `from` so it points at `to`.
///
/// Used after the node stored at `from` has been moved into slot `to`
/// (arena `swap_remove`). The moved node's own links are already correct.
/// Returns the new root.
pub fn relocate<N: Node>(arena: &mut [N], root: Option<u32>, from: u32, to: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, to) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, to) {
        set_p(arena, r, Some(to));
    }
    match get_p(arena, to) {
        Some(p) => {
            replace_in_parent(arena, p, from, Some(to));
            root
        }
        None => Some(to),
    }
}

/// Number of nodes on the longest root-to-leaf path. Iterative, so it is
/// safe on degenerate (list-shaped) trees.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((idx, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestNode {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
        k: i32,
    }

    impl TestNode {
        fn new(k: i32) -> Self {
            Self {
                p: None,
                l: None,
                r: None,
                k,
            }
        }
    }

    impl Node for TestNode {
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

    fn cmp_i32(a: &i32, b: &i32) -> i32 {
        a.cmp(b) as i32
    }

    fn key_of(node: &TestNode) -> &i32 {
        &node.k
    }

    fn build(keys: &[i32]) -> (Vec<TestNode>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &k in keys {
            arena.push(TestNode::new(k));
            let idx = (arena.len() - 1) as u32;
            root = insert(&mut arena, root, idx, key_of, cmp_i32);
        }
        (arena, root)
    }

    fn inorder_keys(arena: &[TestNode], root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].k);
            curr = next(arena, i);
        }
        out
    }

    #[test]
    fn insert_and_walk_in_order() {
        //        10
        //      /    \
        //     5      20
        //      \    /  \
        //       7  15   30
        let (arena, root) = build(&[10, 5, 20, 7, 15, 30]);
        assert_eq!(root, Some(0));
        assert_eq!(inorder_keys(&arena, root), vec![5, 7, 10, 15, 20, 30]);
        assert_eq!(first(&arena, root).map(|i| arena[i as usize].k), Some(5));
        assert_eq!(arena[3].p, Some(1));
        assert_eq!(height(&arena, root), 3);
    }

    #[test]
    fn find_by_key() {
        let (arena, root) = build(&[10, 5, 20, 7]);
        assert_eq!(find(&arena, root, &7, key_of, cmp_i32), Some(3));
        assert_eq!(find(&arena, root, &8, key_of, cmp_i32), None);
        assert_eq!(find(&arena, None, &7, key_of, cmp_i32), None);
    }

    #[test]
    fn remove_leftmost_reattaches_right_subtree() {
        let (mut arena, root) = build(&[10, 5, 20, 7, 6, 8]);
        let min = first(&arena, root).unwrap();
        assert_eq!(arena[min as usize].k, 5);
        let root = remove(&mut arena, root, min);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].l, Some(3));
        assert_eq!(arena[3].p, Some(0));
        assert_eq!(inorder_keys(&arena, root), vec![6, 7, 8, 10, 20]);
    }

    #[test]
    fn remove_root_promotes_child() {
        let (mut arena, root) = build(&[1, 2, 3]);
        let root = remove(&mut arena, root, 0);
        assert_eq!(root, Some(1));
        assert_eq!(arena[1].p, None);
        assert_eq!(inorder_keys(&arena, root), vec![2, 3]);

        let (mut arena, root) = build(&[1]);
        assert_eq!(remove(&mut arena, root, 0), None);
    }

    #[test]
    fn remove_inner_node_with_two_children() {
        let (mut arena, root) = build(&[10, 5, 20, 15, 30]);
        let root = remove(&mut arena, root, 2);
        assert_eq!(inorder_keys(&arena, root), vec![5, 10, 15, 30]);
        assert_eq!(arena[3].p, Some(0));
    }

    #[test]
    fn relocate_after_swap_remove() {
        let (mut arena, root) = build(&[10, 5, 20, 30]);
        let root = remove(&mut arena, root, 1);
        arena.swap_remove(1);
        let root = relocate(&mut arena, root, 3, 1);
        assert_eq!(arena[1].k, 30);
        assert_eq!(arena[2].r, Some(1));
        assert_eq!(inorder_keys(&arena, root), vec![10, 20, 30]);

        let (mut arena, root) = build(&[10, 20]);
        let root = remove(&mut arena, root, 0);
        arena.swap_remove(0);
        let root = relocate(&mut arena, root, 1, 0);
        assert_eq!(root, Some(0));
        assert_eq!(inorder_keys(&arena, root), vec![20]);
    }

    #[test]
    fn ascending_inserts_degrade_to_a_list() {
        let keys: Vec<i32> = (0..64).collect();
        let (arena, root) = build(&keys);
        assert_eq!(height(&arena, root), 64);
        assert_eq!(height(&arena, None), 0);
    }
}

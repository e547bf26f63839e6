//! Box-drawing dump of the tree shape.

use std::fmt::Display;

use crate::queue::PrQueue;

/// Renders one child subtree given the indentation prefix for its lines.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Joins child renderings under `tab` with `├─` / `└─` branches.
///
/// `None` entries are skipped, but still count towards the position of the
/// last child so that trailing gaps do not draw a dangling `├─`.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

impl<K, V, C> PrQueue<K, V, C>
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    fn node_to_tree_string(&self, node: u32, side: &str, tab: &str) -> String {
        let n = &self.arena[node as usize];
        let left = n
            .l
            .map(|l| move |tab: &str| self.node_to_tree_string(l, "← ", tab));
        let right = n
            .r
            .map(|r| move |tab: &str| self.node_to_tree_string(r, "→ ", tab));
        let children: [Option<&PrintChild<'_>>; 2] = [
            left.as_ref().map(|f| f as &PrintChild<'_>),
            right.as_ref().map(|f| f as &PrintChild<'_>),
        ];
        format!(
            "{side}{} ×{}{}",
            n.k,
            n.chain.len(),
            print_tree(tab, &children)
        )
    }

    /// Tree shape with each node's priority and chain length.
    ///
    /// ```text
    /// PrQueue (4)
    /// └─ 2 ×2
    ///    ├─ ← 1 ×1
    ///    └─ → 3 ×1
    /// ```
    ///
    /// Recursion depth equals [`PrQueue::height`]; meant for debugging.
    pub fn to_tree_string(&self) -> String {
        match self.root {
            Some(root) => {
                let render = |tab: &str| self.node_to_tree_string(root, "", tab);
                let children: [Option<&PrintChild<'_>>; 1] = [Some(&render as &PrintChild<'_>)];
                format!("PrQueue ({}){}", self.size, print_tree("", &children))
            }
            None => "PrQueue ∅".to_string(),
        }
    }
}

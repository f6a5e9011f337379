#![forbid(unsafe_code)]

//! `Node` — an acyclic ordered tree of `LayoutBox`es, each carrying a
//! position once laid out.

use std::sync::atomic::{AtomicU64, Ordering};

use tui_core::Position;

use crate::boxed::LayoutBox;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque per-node identity, used only to reject a node being added as
/// its own child. Two nodes built from identical boxes are never equal
/// by `id` even though they may be equal by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(u64);

impl NodeId {
    fn fresh() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A composite tree node: a box, its ordered children, and a position
/// (the origin until laid out by [`crate::LayoutService`]).
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    boxed: LayoutBox,
    children: Vec<Node>,
    position: Position,
}

impl Node {
    /// A leaf node at the origin.
    #[must_use]
    pub fn new(boxed: LayoutBox) -> Self {
        Self {
            id: NodeId::fresh(),
            boxed,
            children: Vec::new(),
            position: Position::origin(),
        }
    }

    /// Append `child`.
    ///
    /// # Panics
    /// Panics if `child` is (by identity) this same node — the tree must
    /// stay acyclic.
    #[must_use]
    pub fn add_child(mut self, child: Node) -> Self {
        assert!(
            child.id != self.id,
            "Node::add_child: cannot add a node as its own child"
        );
        self.children.push(child);
        self
    }

    /// Replace this node's position.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// The box at this node.
    #[must_use]
    pub const fn boxed(&self) -> &LayoutBox {
        &self.boxed
    }

    /// This node's current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// An independent copy of this node's children.
    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.children.clone()
    }

    /// Replace this node's children wholesale, preserving identity,
    /// box, and position. Used by [`crate::LayoutService`] to rebuild a
    /// tree with every descendant positioned.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first preorder visit of this node and all descendants.
    pub fn walk(&self, mut visit: impl FnMut(&Node)) {
        self.walk_with_depth(&mut |n, _depth| visit(n));
    }

    /// Depth-first preorder visit, passing each node's depth (0 for the
    /// root).
    pub fn walk_with_depth(&self, visit: &mut impl FnMut(&Node, usize)) {
        self.walk_with_depth_from(visit, 0);
    }

    fn walk_with_depth_from(&self, visit: &mut impl FnMut(&Node, usize), depth: usize) {
        visit(self, depth);
        for child in &self.children {
            child.walk_with_depth_from(visit, depth + 1);
        }
    }

    /// 0 for a leaf; otherwise `1 + max(child.depth())`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// This node plus every descendant.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(content: &str) -> Node {
        Node::new(LayoutBox::new(content))
    }

    #[test]
    #[should_panic(expected = "cannot add a node as its own child")]
    fn self_as_child_is_rejected() {
        // `clone()` preserves identity, so adding a clone of a node to
        // itself is exactly the self-as-child case the tree must reject.
        let node = leaf("a");
        let clone = node.clone();
        let _ = node.add_child(clone);
    }

    #[test]
    fn structurally_identical_but_distinct_nodes_are_allowed() {
        // Two separately constructed nodes with the same content are not
        // "the same node" — only shared identity via `clone()` is.
        let tree = leaf("a").add_child(leaf("a"));
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn depth_and_node_count() {
        let tree = leaf("root")
            .add_child(leaf("a").add_child(leaf("a1")))
            .add_child(leaf("b"));
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn children_is_an_independent_copy() {
        let tree = leaf("root").add_child(leaf("a"));
        let mut children = tree.children();
        children.push(leaf("b"));
        assert_eq!(tree.children().len(), 1);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn walk_visits_preorder() {
        let tree = leaf("root")
            .add_child(leaf("a"))
            .add_child(leaf("b").add_child(leaf("b1")));
        let mut seen = Vec::new();
        tree.walk(|n| seen.push(n.boxed().content().to_string()));
        assert_eq!(seen, vec!["root", "a", "b", "b1"]);
    }

    #[test]
    fn walk_with_depth_reports_correct_depths() {
        let tree = leaf("root").add_child(leaf("a").add_child(leaf("a1")));
        let mut depths = Vec::new();
        tree.walk_with_depth(&mut |_, d| depths.push(d));
        assert_eq!(depths, vec![0, 1, 2]);
    }
}

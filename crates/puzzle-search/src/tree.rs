//! Search tree bookkeeping and solution path reconstruction.
//!
//! Searching and reconstructing are separate phases. While an engine runs it
//! only appends parent-linked nodes to a [`SearchTree`] arena. Once a solved
//! node is found, [`SearchTree::into_path`] walks the parent links back to the
//! root and rebuilds a forward [`PuzzleNode`] chain in which each node owns
//! the single child that leads to the solution.

use std::fmt;

/// Index of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
struct TreeNode<P> {
    state: P,
    parent: Option<NodeId>,
}

/// Arena of every node created during one search.
///
/// A parent is always inserted before its children, so ids along any path
/// to the root strictly decrease.
#[derive(Debug)]
pub(crate) struct SearchTree<P> {
    nodes: Vec<TreeNode<P>>,
}

impl<P> SearchTree<P> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node for `state`, reached from `parent` (`None` for a root).
    pub(crate) fn insert(&mut self, state: P, parent: Option<NodeId>) -> NodeId {
        debug_assert!(parent.map_or(true, |p| p.0 < self.nodes.len()));
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode { state, parent });
        id
    }

    pub(crate) fn state(&self, id: NodeId) -> &P {
        &self.nodes[id.0].state
    }

    /// Rebuild the path from the root down to `solved`.
    ///
    /// Nodes that are not ancestors of `solved` are dropped.
    pub(crate) fn into_path(mut self, solved: NodeId) -> PuzzleNode<P> {
        self.nodes.truncate(solved.0 + 1);
        let leaf = self.nodes.swap_remove(solved.0);
        let mut cursor = leaf.parent;
        let mut path = PuzzleNode::new(leaf.state);

        // Ancestors have strictly smaller ids, so one reverse pass finds
        // them all in order.
        for (index, node) in self.nodes.into_iter().enumerate().rev() {
            if cursor != Some(NodeId(index)) {
                continue;
            }
            cursor = node.parent;
            let mut ancestor = PuzzleNode::new(node.state);
            ancestor.children.push(path);
            path = ancestor;
        }
        path
    }
}

/// A node of a reconstructed solution path.
///
/// The root wraps the initial state and every node has at most one child, so
/// following [`PuzzleNode::child`] from the root visits the solution one move
/// at a time until the solved leaf.
pub struct PuzzleNode<P> {
    state: P,
    children: Vec<PuzzleNode<P>>,
}

impl<P> PuzzleNode<P> {
    /// A single-node path, used when the initial state is already solved.
    pub fn new(state: P) -> Self {
        Self {
            state,
            children: Vec::new(),
        }
    }

    pub fn state(&self) -> &P {
        &self.state
    }

    pub fn children(&self) -> &[PuzzleNode<P>] {
        &self.children
    }

    /// The next node on the solution path, if any.
    pub fn child(&self) -> Option<&PuzzleNode<P>> {
        self.children.first()
    }

    /// States from this node down to the solved leaf.
    pub fn iter(&self) -> Path<'_, P> {
        Path { next: Some(self) }
    }

    /// Number of states on the path, including this one.
    pub fn state_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of moves (edges) on the path.
    pub fn moves(&self) -> usize {
        self.state_count() - 1
    }

    /// The last state on the path.
    pub fn leaf(&self) -> &P {
        let mut node = self;
        while let Some(child) = node.child() {
            node = child;
        }
        &node.state
    }
}

// Solution paths from depth-first search can be very deep; dropping the
// nested children recursively would overflow the stack.
impl<P> Drop for PuzzleNode<P> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<P: PartialEq> PartialEq for PuzzleNode<P> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<P: Eq> Eq for PuzzleNode<P> {}

impl<P: fmt::Debug> fmt::Debug for PuzzleNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<P: fmt::Display> fmt::Display for PuzzleNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, state) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}

/// Iterator over the states of a solution path, root first.
pub struct Path<'a, P> {
    next: Option<&'a PuzzleNode<P>>,
}

impl<'a, P> Iterator for Path<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.child();
        Some(&node.state)
    }
}

impl<'a, P> IntoIterator for &'a PuzzleNode<P> {
    type Item = &'a P;
    type IntoIter = Path<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_path_keeps_only_ancestors() {
        let mut tree = SearchTree::new();
        let root = tree.insert("a", None);
        let b = tree.insert("b", Some(root));
        let _c = tree.insert("c", Some(root));
        let _d = tree.insert("d", Some(b));
        let e = tree.insert("e", Some(b));

        let path = tree.into_path(e);
        assert_eq!(path.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "e"]);
        assert_eq!(path.state_count(), 3);
        assert_eq!(path.moves(), 2);
        assert_eq!(*path.leaf(), "e");

        let mut node = &path;
        while let Some(child) = node.child() {
            assert_eq!(node.children().len(), 1);
            node = child;
        }
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_into_path_of_root_is_single_node() {
        let mut tree = SearchTree::new();
        let root = tree.insert(7, None);
        tree.insert(8, Some(root));

        let path = tree.into_path(root);
        assert_eq!(path.state_count(), 1);
        assert_eq!(*path.state(), 7);
        assert!(path.child().is_none());
    }

    #[test]
    fn test_display_separates_states() {
        let mut tree = SearchTree::new();
        let root = tree.insert("start", None);
        let end = tree.insert("end", Some(root));
        let path = tree.into_path(end);
        assert_eq!(path.to_string(), "start\n\nend");
    }

    #[test]
    fn test_deep_path_drops_without_recursion() {
        let mut tree = SearchTree::new();
        let mut last = tree.insert(0u32, None);
        for i in 1..200_000u32 {
            last = tree.insert(i, Some(last));
        }
        let path = tree.into_path(last);
        assert_eq!(path.state_count(), 200_000);
        assert_eq!(*path.leaf(), 199_999);
        drop(path);
    }

    #[test]
    fn test_equality_compares_states_along_path() {
        let build = |states: &[u8]| {
            let mut tree = SearchTree::new();
            let mut last = tree.insert(states[0], None);
            for &s in &states[1..] {
                last = tree.insert(s, Some(last));
            }
            tree.into_path(last)
        };
        assert_eq!(build(&[1, 2, 3]), build(&[1, 2, 3]));
        assert_ne!(build(&[1, 2, 3]), build(&[1, 2]));
        assert_ne!(build(&[1, 2, 3]), build(&[1, 4, 3]));
    }
}

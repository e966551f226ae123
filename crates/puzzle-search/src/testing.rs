//! Small explicit-graph puzzle used by the engine tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::puzzle::Puzzle;

/// A state is a vertex of a directed graph; solved at `goal`.
///
/// Every call to `extensions` is logged so tests can check which states the
/// engines actually expanded.
#[derive(Debug, Clone)]
pub(crate) struct GraphPuzzle {
    vertex: u32,
    goal: u32,
    edges: Rc<BTreeMap<u32, Vec<u32>>>,
    expanded: Rc<RefCell<Vec<u32>>>,
}

impl GraphPuzzle {
    pub(crate) fn new(edges: &[(u32, Vec<u32>)], start: u32, goal: u32) -> Self {
        Self {
            vertex: start,
            goal,
            edges: Rc::new(edges.iter().cloned().collect()),
            expanded: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn vertex(&self) -> u32 {
        self.vertex
    }

    /// Vertices whose extensions were requested, in call order.
    pub(crate) fn expanded(&self) -> Vec<u32> {
        self.expanded.borrow().clone()
    }
}

impl PartialEq for GraphPuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.goal == other.goal
    }
}

impl fmt::Display for GraphPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertex)
    }
}

impl Puzzle for GraphPuzzle {
    fn is_solved(&self) -> bool {
        self.vertex == self.goal
    }

    fn extensions(&self) -> Vec<Self> {
        self.expanded.borrow_mut().push(self.vertex);
        self.edges
            .get(&self.vertex)
            .map(|next| {
                next.iter()
                    .map(|&vertex| Self {
                        vertex,
                        ..self.clone()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Vertices along a solution path.
pub(crate) fn vertices(path: &crate::tree::PuzzleNode<GraphPuzzle>) -> Vec<u32> {
    path.iter().map(GraphPuzzle::vertex).collect()
}

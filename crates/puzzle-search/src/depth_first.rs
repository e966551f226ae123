//! Depth-first search over puzzle states.
//!
//! Uses an explicit heap-allocated stack instead of recursion, so the depth
//! of the search is bounded by memory, not by the call stack.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::puzzle::Puzzle;
use crate::solver::{Budget, SearchOutcome};
use crate::tree::{NodeId, PuzzleNode, SearchTree};

/// Find a path from `initial` to a solved state, exploring deepest first.
///
/// Returns the root of the solution path, or `None` when no solved state is
/// reachable. The path is not guaranteed to be the shortest one. Siblings
/// are pushed in [`Puzzle::extensions`] order and popped most recent first,
/// so the last extension of a state is explored first.
pub fn depth_first_solve<P: Puzzle>(initial: P) -> Option<PuzzleNode<P>> {
    depth_first_search(initial, &mut Budget::unlimited()).into_solution()
}

pub(crate) fn depth_first_search<P: Puzzle>(initial: P, budget: &mut Budget) -> SearchOutcome<P> {
    budget.node_created();
    if !budget.try_expand() {
        return SearchOutcome::LimitReached;
    }
    if initial.is_solved() {
        debug!("initial state is already solved");
        return SearchOutcome::Solved(PuzzleNode::new(initial));
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(initial.canonical());

    let mut tree = SearchTree::new();
    let extensions = initial.extensions();
    let root = tree.insert(initial, None);

    // Deque used as a stack: the most recently pushed node is expanded next
    let mut stack: VecDeque<NodeId> = VecDeque::new();
    push_extensions(&mut tree, &mut stack, root, extensions, budget);

    while let Some(id) = stack.pop_back() {
        let key = tree.state(id).canonical();
        if visited.contains(&key) {
            continue;
        }
        if !budget.try_expand() {
            debug!(
                states_expanded = budget.stats.states_expanded,
                "depth-first search stopped at limit"
            );
            return SearchOutcome::LimitReached;
        }
        trace!(state = %key, "expanding");
        visited.insert(key);

        if tree.state(id).is_solved() {
            debug!(
                states_expanded = budget.stats.states_expanded,
                "depth-first search found a solution"
            );
            return SearchOutcome::Solved(tree.into_path(id));
        }

        let extensions = tree.state(id).extensions();
        push_extensions(&mut tree, &mut stack, id, extensions, budget);
    }

    debug!(
        states_expanded = budget.stats.states_expanded,
        "depth-first search exhausted the state space"
    );
    SearchOutcome::Exhausted
}

fn push_extensions<P>(
    tree: &mut SearchTree<P>,
    stack: &mut VecDeque<NodeId>,
    parent: NodeId,
    extensions: Vec<P>,
    budget: &mut Budget,
) {
    // The last extension ends up on top and is explored first
    for state in extensions {
        stack.push_back(tree.insert(state, Some(parent)));
        budget.node_created();
    }
    budget.observe_frontier(stack.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{vertices, GraphPuzzle};

    #[test]
    fn test_already_solved_skips_extensions() {
        let puzzle = GraphPuzzle::new(&[(0, vec![1])], 0, 0);
        let path = depth_first_solve(puzzle.clone()).unwrap();
        assert_eq!(vertices(&path), vec![0]);
        assert!(puzzle.expanded().is_empty());
    }

    #[test]
    fn test_dead_end_has_no_solution() {
        let puzzle = GraphPuzzle::new(&[], 0, 1);
        assert!(depth_first_solve(puzzle).is_none());
    }

    #[test]
    fn test_explores_last_extension_first() {
        // 0 -> 1 -> 2 -> 3 and 0 -> 4 -> 3: 4 is pushed last, so its branch comes first.
        let puzzle = GraphPuzzle::new(
            &[(0, vec![1, 4]), (1, vec![2]), (2, vec![3]), (4, vec![3])],
            0,
            3,
        );
        let path = depth_first_solve(puzzle.clone()).unwrap();
        assert_eq!(vertices(&path), vec![0, 4, 3]);
        assert_eq!(puzzle.expanded(), vec![0, 4]);
    }

    #[test]
    fn test_most_recently_pushed_sibling_wins() {
        let puzzle = GraphPuzzle::new(&[(0, vec![1, 2]), (1, vec![3]), (2, vec![3])], 0, 3);
        let path = depth_first_solve(puzzle.clone()).unwrap();
        assert_eq!(vertices(&path), vec![0, 2, 3]);
        assert_eq!(puzzle.expanded(), vec![0, 2]);
    }

    #[test]
    fn test_successors_explored_before_pending_siblings() {
        let puzzle = GraphPuzzle::new(
            &[(0, vec![2, 1]), (1, vec![3]), (3, vec![]), (2, vec![5])],
            0,
            5,
        );
        let path = depth_first_solve(puzzle.clone()).unwrap();
        assert_eq!(vertices(&path), vec![0, 2, 5]);
        assert_eq!(puzzle.expanded(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_cycles_terminate() {
        let puzzle = GraphPuzzle::new(&[(0, vec![1]), (1, vec![0, 2]), (2, vec![1, 0])], 0, 7);
        assert!(depth_first_solve(puzzle.clone()).is_none());

        let mut expanded = puzzle.expanded();
        let total = expanded.len();
        expanded.sort_unstable();
        expanded.dedup();
        assert_eq!(expanded.len(), total);
    }

    #[test]
    fn test_path_follows_extensions() {
        let puzzle = GraphPuzzle::new(
            &[
                (0, vec![1, 2]),
                (1, vec![0, 3]),
                (2, vec![4]),
                (3, vec![1]),
                (4, vec![5]),
            ],
            0,
            5,
        );
        let path = depth_first_solve(puzzle).unwrap();
        let states: Vec<_> = path.iter().collect();
        assert_eq!(states[0].vertex(), 0);
        assert!(states.last().unwrap().is_solved());
        for pair in states.windows(2) {
            assert!(pair[0].extensions().contains(pair[1]));
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let edges = [
            (0, vec![1, 2, 3]),
            (1, vec![4]),
            (2, vec![4, 5]),
            (3, vec![5]),
            (4, vec![6]),
            (5, vec![6]),
        ];
        let first = depth_first_solve(GraphPuzzle::new(&edges, 0, 6)).unwrap();
        let second = depth_first_solve(GraphPuzzle::new(&edges, 0, 6)).unwrap();
        assert_eq!(first, second);
    }
}

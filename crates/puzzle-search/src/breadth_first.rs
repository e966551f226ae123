//! Breadth-first search over puzzle states.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::puzzle::Puzzle;
use crate::solver::{Budget, SearchOutcome};
use crate::tree::{NodeId, PuzzleNode, SearchTree};

/// Find a path from `initial` to a solved state with the fewest moves.
///
/// Returns the root of the solution path, or `None` when no solved state is
/// reachable. Among several shortest paths, the one discovered first wins,
/// which depends on the order of [`Puzzle::extensions`].
pub fn breadth_first_solve<P: Puzzle>(initial: P) -> Option<PuzzleNode<P>> {
    breadth_first_search(initial, &mut Budget::unlimited()).into_solution()
}

pub(crate) fn breadth_first_search<P: Puzzle>(
    initial: P,
    budget: &mut Budget,
) -> SearchOutcome<P> {
    let mut tree = SearchTree::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(tree.insert(initial, None));
    budget.node_created();

    let mut visited: HashSet<String> = HashSet::new();

    while let Some(id) = queue.pop_front() {
        // A state can be queued by two parents before either copy is
        // dequeued; only the first copy is expanded.
        let key = tree.state(id).canonical();
        if visited.contains(&key) {
            continue;
        }
        if !budget.try_expand() {
            debug!(
                states_expanded = budget.stats.states_expanded,
                "breadth-first search stopped at limit"
            );
            return SearchOutcome::LimitReached;
        }
        trace!(state = %key, "expanding");
        visited.insert(key);

        if tree.state(id).is_solved() {
            debug!(
                states_expanded = budget.stats.states_expanded,
                "breadth-first search found a solution"
            );
            return SearchOutcome::Solved(tree.into_path(id));
        }

        let extensions = tree.state(id).extensions();
        for state in extensions {
            if visited.contains(&state.canonical()) {
                continue;
            }
            queue.push_back(tree.insert(state, Some(id)));
            budget.node_created();
        }
        budget.observe_frontier(queue.len());
    }

    debug!(
        states_expanded = budget.stats.states_expanded,
        "breadth-first search exhausted the state space"
    );
    SearchOutcome::Exhausted
}

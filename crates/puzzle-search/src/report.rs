//! JSON-friendly summary of a solver run.

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;
use crate::solver::{SolverResult, Strategy};

/// Output format for a solve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub solved: bool,
    pub strategy: Strategy,
    /// Rendered states from the initial state to the solved one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<usize>,
    pub search_exhausted: bool,
    pub states_expanded: usize,
    pub nodes_created: usize,
    pub peak_frontier: usize,
    pub time_elapsed_ms: u64,
}

impl SolveReport {
    pub fn new<P: Puzzle>(result: &SolverResult<P>, strategy: Strategy) -> Self {
        let path = result
            .solution
            .as_ref()
            .map(|root| root.iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        Self {
            solved: result.solved(),
            strategy,
            path,
            moves: result.solution.as_ref().map(|root| root.moves()),
            search_exhausted: result.search_exhausted,
            states_expanded: result.stats.states_expanded,
            nodes_created: result.stats.nodes_created,
            peak_frontier: result.stats.peak_frontier,
            time_elapsed_ms: result.time_elapsed_ms,
        }
    }
}

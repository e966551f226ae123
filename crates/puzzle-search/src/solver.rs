//! Bounded solving on top of the depth-first and breadth-first engines.
//!
//! The engines themselves run until they find a solution or exhaust the
//! state space. Callers that need bounded runtime go through [`solve`] with a
//! [`SolverConfig`] carrying a timeout and/or an expansion cap.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::breadth_first::breadth_first_search;
use crate::depth_first::depth_first_search;
use crate::puzzle::Puzzle;
use crate::tree::PuzzleNode;

/// Traversal order used by the solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Last-in-first-out; finds a path quickly but not necessarily a short one
    #[default]
    DepthFirst,
    /// First-in-first-out; finds a path with the fewest moves
    BreadthFirst,
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Stop after this much wall-clock time
    pub timeout: Option<Duration>,
    /// Stop after expanding this many distinct states
    pub max_expansions: Option<usize>,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states taken off the work list and checked
    pub states_expanded: usize,
    /// Search tree nodes created, duplicates included
    pub nodes_created: usize,
    /// Largest size the work list reached
    pub peak_frontier: usize,
}

/// Result of a bounded search
#[derive(Debug)]
pub struct SolverResult<P> {
    /// Root of the solution path, if one was found
    pub solution: Option<PuzzleNode<P>>,
    /// Whether every reachable state was explored without finding a solution
    pub search_exhausted: bool,
    pub stats: SearchStats,
    pub time_elapsed_ms: u64,
}

impl<P> SolverResult<P> {
    pub fn solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// How an engine run ended
#[derive(Debug)]
pub(crate) enum SearchOutcome<P> {
    Solved(PuzzleNode<P>),
    Exhausted,
    LimitReached,
}

impl<P> SearchOutcome<P> {
    pub(crate) fn into_solution(self) -> Option<PuzzleNode<P>> {
        match self {
            SearchOutcome::Solved(path) => Some(path),
            SearchOutcome::Exhausted | SearchOutcome::LimitReached => None,
        }
    }
}

/// Limits and counters threaded through one engine run
#[derive(Debug)]
pub(crate) struct Budget {
    deadline: Option<Instant>,
    max_expansions: Option<usize>,
    pub(crate) stats: SearchStats,
}

impl Budget {
    pub(crate) fn unlimited() -> Self {
        Self {
            deadline: None,
            max_expansions: None,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn from_config(config: &SolverConfig, start: Instant) -> Self {
        Self {
            deadline: config.timeout.map(|timeout| start + timeout),
            max_expansions: config.max_expansions,
            stats: SearchStats::default(),
        }
    }

    /// Account for one more expansion; `false` once a limit has been hit.
    pub(crate) fn try_expand(&mut self) -> bool {
        if let Some(max) = self.max_expansions {
            if self.stats.states_expanded >= max {
                return false;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() > deadline {
                return false;
            }
        }
        self.stats.states_expanded += 1;
        true
    }

    pub(crate) fn node_created(&mut self) {
        self.stats.nodes_created += 1;
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.stats.peak_frontier = self.stats.peak_frontier.max(len);
    }
}

/// Search for a solution from `initial`, honouring the limits in `config`.
pub fn solve<P: Puzzle>(initial: P, config: &SolverConfig) -> SolverResult<P> {
    let start_time = Instant::now();
    let mut budget = Budget::from_config(config, start_time);

    debug!(strategy = ?config.strategy, "starting search");
    let outcome = match config.strategy {
        Strategy::DepthFirst => depth_first_search(initial, &mut budget),
        Strategy::BreadthFirst => breadth_first_search(initial, &mut budget),
    };
    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    let search_exhausted = matches!(outcome, SearchOutcome::Exhausted);
    if matches!(outcome, SearchOutcome::LimitReached) {
        info!(
            states_expanded = budget.stats.states_expanded,
            time_elapsed_ms, "search stopped at configured limit"
        );
    }

    SolverResult {
        solution: outcome.into_solution(),
        search_exhausted,
        stats: budget.stats,
        time_elapsed_ms,
    }
}

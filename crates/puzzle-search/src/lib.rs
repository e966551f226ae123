//! Generic state-space search for puzzles.
//!
//! Any type implementing [`Puzzle`] can be solved with depth-first or
//! breadth-first search. The engines deduplicate visited states by their
//! canonical rendering, so cyclic state graphs terminate, and return the
//! solution as a chain of [`PuzzleNode`]s from the initial state to a solved
//! one.
//!
//! Three puzzle variants ship with the crate: grid peg solitaire, sliding
//! tile puzzles and word ladders.

pub mod breadth_first;
pub mod definition;
pub mod depth_first;
pub mod error;
pub mod peg_solitaire;
pub mod puzzle;
pub mod report;
pub mod sliding_tile;
pub mod solver;
pub mod tree;
pub mod word_ladder;

#[cfg(test)]
mod testing;

// Re-export main types
pub use breadth_first::breadth_first_solve;
pub use definition::PuzzleDefinition;
pub use depth_first::depth_first_solve;
pub use error::PuzzleError;
pub use peg_solitaire::GridPegSolitaire;
pub use puzzle::Puzzle;
pub use report::SolveReport;
pub use sliding_tile::SlidingTilePuzzle;
pub use solver::{solve, SearchStats, SolverConfig, SolverResult, Strategy};
pub use tree::PuzzleNode;
pub use word_ladder::WordLadderPuzzle;

//! The capability contract every searchable puzzle implements.

use std::fmt;

/// One configuration of a puzzle.
///
/// States are treated as immutable values: `extensions` builds fresh states
/// and never mutates `self`.
///
/// Two notions of sameness must agree. `PartialEq` is value equality, used
/// when comparing paths. [`Puzzle::canonical`] is the key the engines hash to
/// deduplicate visited states. A variant whose canonical rendering collides
/// for distinct states will make the engines skip states they never saw.
pub trait Puzzle: PartialEq + fmt::Display + Sized {
    /// Whether this exact state satisfies the puzzle's terminal condition.
    fn is_solved(&self) -> bool;

    /// Every state reachable from this one by exactly one legal move.
    ///
    /// The order is preserved by the engines: depth-first explores the first
    /// extension first and breadth-first enqueues them in this order.
    fn extensions(&self) -> Vec<Self>;

    /// Deterministic deduplication key.
    ///
    /// Defaults to the `Display` rendering. It only has to be injective among
    /// states reachable from a single initial state, so context shared by all
    /// of them (a target grid, a word list) may be left out.
    fn canonical(&self) -> String {
        self.to_string()
    }
}

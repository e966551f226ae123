//! Peg solitaire on a rectangular grid.
//!
//! A move jumps a peg over an orthogonally adjacent peg into an empty cell
//! directly beyond it, removing the jumped peg. The puzzle is solved when a
//! single peg remains.

use std::collections::BTreeSet;
use std::fmt;

use smallvec::SmallVec;

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

pub const PEG: char = '*';
pub const EMPTY: char = '.';
pub const UNUSED: char = '#';

/// Marker set used when a definition does not name one
pub const DEFAULT_MARKERS: &str = "#*.";

type Cell = (usize, usize);

/// Snapshot of a peg solitaire board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridPegSolitaire {
    grid: Vec<Vec<char>>,
    markers: BTreeSet<char>,
}

impl GridPegSolitaire {
    /// Create a board, checking that it is rectangular and only uses `markers`.
    pub fn new(grid: Vec<Vec<char>>, markers: BTreeSet<char>) -> Result<Self, PuzzleError> {
        if let Some(&bad) = markers.iter().find(|&&m| ![PEG, EMPTY, UNUSED].contains(&m)) {
            return Err(PuzzleError::InvalidMarkerSet(bad));
        }
        let width = grid.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != width {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
            if let Some((column, &marker)) =
                cells.iter().enumerate().find(|&(_, &m)| !markers.contains(&m))
            {
                return Err(PuzzleError::InvalidMarker {
                    marker,
                    row,
                    column,
                });
            }
        }
        Ok(Self { grid, markers })
    }

    /// Parse rows such as `"# * * #"` or `"#**#"`; whitespace is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], markers: &str) -> Result<Self, PuzzleError> {
        let grid: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let markers: BTreeSet<char> = markers.chars().filter(|c| !c.is_whitespace()).collect();
        Self::new(grid, markers)
    }

    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Number of pegs left on the board
    pub fn pegs(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|&&c| c == PEG).count())
            .sum()
    }

    fn is_peg(&self, (row, col): Cell) -> bool {
        self.grid[row][col] == PEG
    }

    /// (source, jumped) pairs that could land a peg in the given cell, ordered
    /// from above, below, left, right.
    fn jumps_into(&self, (row, col): Cell) -> SmallVec<[(Cell, Cell); 4]> {
        let height = self.grid.len();
        let width = self.grid[row].len();
        let mut jumps = SmallVec::new();
        if row >= 2 {
            jumps.push(((row - 2, col), (row - 1, col)));
        }
        if row + 2 < height {
            jumps.push(((row + 2, col), (row + 1, col)));
        }
        if col >= 2 {
            jumps.push(((row, col - 2), (row, col - 1)));
        }
        if col + 2 < width {
            jumps.push(((row, col + 2), (row, col + 1)));
        }
        jumps.retain(|&mut (from, over)| self.is_peg(from) && self.is_peg(over));
        jumps
    }

    fn jump(&self, from: Cell, over: Cell, to: Cell) -> Self {
        let mut next = self.clone();
        next.grid[from.0][from.1] = EMPTY;
        next.grid[over.0][over.1] = EMPTY;
        next.grid[to.0][to.1] = PEG;
        next
    }
}

impl fmt::Display for GridPegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}

impl Puzzle for GridPegSolitaire {
    fn is_solved(&self) -> bool {
        self.pegs() == 1
    }

    fn extensions(&self) -> Vec<Self> {
        let mut extensions = Vec::new();
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell != EMPTY {
                    continue;
                }
                for (from, over) in self.jumps_into((row, col)) {
                    extensions.push(self.jump(from, over, (row, col)));
                }
            }
        }
        extensions
    }
}

//! Sliding tile puzzles on an m x n grid, like the 15-puzzle.
//!
//! Each symbol is a single character and the blank is `*`. A move slides a
//! tile next to the blank into it.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

pub const BLANK: char = '*';

type Grid = Vec<Vec<char>>;

/// A sliding tile configuration working towards a fixed target grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlidingTilePuzzle {
    grid: Grid,
    target: Arc<Grid>,
    blank: (usize, usize),
}

impl SlidingTilePuzzle {
    /// Create a puzzle in state `grid`, solved once it matches `target`.
    pub fn new(grid: Grid, target: Grid) -> Result<Self, PuzzleError> {
        let (rows, cols) = shape(&grid)?;
        let (target_rows, target_cols) = shape(&target)?;
        if (rows, cols) != (target_rows, target_cols) {
            return Err(PuzzleError::ShapeMismatch {
                start_rows: rows,
                start_cols: cols,
                target_rows,
                target_cols,
            });
        }
        let blank = find_blank(&grid, "start")?;
        find_blank(&target, "target")?;

        Ok(Self {
            grid,
            target: Arc::new(target),
            blank,
        })
    }

    /// Parse rows such as `"*23"`; whitespace is ignored.
    pub fn from_rows<S: AsRef<str>>(grid: &[S], target: &[S]) -> Result<Self, PuzzleError> {
        Self::new(parse_rows(grid), parse_rows(target))
    }

    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }

    pub fn target(&self) -> &[Vec<char>] {
        &self.target
    }

    /// Cells the blank can swap with, ordered left, right, up, down.
    fn blank_neighbours(&self) -> SmallVec<[(usize, usize); 4]> {
        let (row, col) = self.blank;
        let mut cells = SmallVec::new();
        if col > 0 {
            cells.push((row, col - 1));
        }
        if col + 1 < self.grid[row].len() {
            cells.push((row, col + 1));
        }
        if row > 0 {
            cells.push((row - 1, col));
        }
        if row + 1 < self.grid.len() {
            cells.push((row + 1, col));
        }
        cells
    }

    fn slide_from(&self, (row, col): (usize, usize)) -> Self {
        let mut grid = self.grid.clone();
        let (blank_row, blank_col) = self.blank;
        grid[blank_row][blank_col] = grid[row][col];
        grid[row][col] = BLANK;
        Self {
            grid,
            target: Arc::clone(&self.target),
            blank: (row, col),
        }
    }
}

fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Grid {
    rows.iter()
        .map(|row| row.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
        .collect()
}

fn shape(grid: &Grid) -> Result<(usize, usize), PuzzleError> {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(PuzzleError::EmptyGrid);
    }
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != cols {
            return Err(PuzzleError::RaggedRow {
                row,
                expected: cols,
                got: cells.len(),
            });
        }
    }
    Ok((grid.len(), cols))
}

fn find_blank(grid: &Grid, which: &'static str) -> Result<(usize, usize), PuzzleError> {
    let blanks: Vec<(usize, usize)> = grid
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c == BLANK)
                .map(move |(c, _)| (r, c))
        })
        .collect();
    match blanks.as_slice() {
        [only] => Ok(*only),
        _ => Err(PuzzleError::BlankCount {
            grid: which,
            found: blanks.len(),
        }),
    }
}

impl fmt::Display for SlidingTilePuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            let line: String = row.iter().collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}

impl Puzzle for SlidingTilePuzzle {
    fn is_solved(&self) -> bool {
        self.grid == *self.target
    }

    fn extensions(&self) -> Vec<Self> {
        self.blank_neighbours()
            .into_iter()
            .map(|cell| self.slide_from(cell))
            .collect()
    }
}

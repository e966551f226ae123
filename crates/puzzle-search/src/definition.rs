//! Puzzle definitions read from JSON.
//!
//! A definition names the puzzle variant in its `kind` field:
//!
//! ```json
//! { "kind": "slidingTile", "from": ["*23", "145"], "to": ["123", "45*"] }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::peg_solitaire::{GridPegSolitaire, DEFAULT_MARKERS};
use crate::puzzle::Puzzle;
use crate::report::SolveReport;
use crate::sliding_tile::SlidingTilePuzzle;
use crate::solver::{solve, SolverConfig};
use crate::word_ladder::WordLadderPuzzle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PuzzleDefinition {
    PegSolitaire(PegSolitaireDefinition),
    SlidingTile(SlidingTileDefinition),
    WordLadder(WordLadderDefinition),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegSolitaireDefinition {
    /// One string per row, e.g. `"# * * * #"`
    pub grid: Vec<String>,
    #[serde(default = "default_markers")]
    pub markers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingTileDefinition {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLadderDefinition {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<String>,
    /// Whitespace-separated word list, merged with `words`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
}

fn default_markers() -> String {
    DEFAULT_MARKERS.to_string()
}

impl PuzzleDefinition {
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the puzzle and search it.
    pub fn solve(&self, config: &SolverConfig) -> Result<SolveReport, PuzzleError> {
        match self {
            PuzzleDefinition::PegSolitaire(def) => Ok(run(def.build()?, config)),
            PuzzleDefinition::SlidingTile(def) => Ok(run(def.build()?, config)),
            PuzzleDefinition::WordLadder(def) => Ok(run(def.build()?, config)),
        }
    }
}

fn run<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SolveReport {
    let result = solve(puzzle, config);
    SolveReport::new(&result, config.strategy)
}

impl PegSolitaireDefinition {
    pub fn build(&self) -> Result<GridPegSolitaire, PuzzleError> {
        GridPegSolitaire::from_rows(&self.grid, &self.markers)
    }
}

impl SlidingTileDefinition {
    pub fn build(&self) -> Result<SlidingTilePuzzle, PuzzleError> {
        SlidingTilePuzzle::from_rows(&self.from, &self.to)
    }
}

impl WordLadderDefinition {
    pub fn build(&self) -> Result<WordLadderPuzzle, PuzzleError> {
        let mut words: BTreeSet<String> = self.words.iter().cloned().collect();
        match &self.words_file {
            Some(path) => words.extend(load_words(path)?),
            None if words.is_empty() => return Err(PuzzleError::MissingWords),
            None => {}
        }
        Ok(WordLadderPuzzle::new(&self.from, &self.to, Arc::new(words)))
    }
}

/// Read a whitespace-separated word list.
pub fn load_words(path: &Path) -> Result<BTreeSet<String>, PuzzleError> {
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split_whitespace().map(str::to_owned).collect())
}

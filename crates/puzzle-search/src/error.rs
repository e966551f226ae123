//! Error types for building puzzles from definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing or loading a puzzle.
///
/// Searching never fails: an unsolvable puzzle is reported as `None`,
/// not as an error.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("marker '{marker}' at row {row}, column {column} is not in the marker set")]
    InvalidMarker {
        marker: char,
        row: usize,
        column: usize,
    },

    #[error("marker set may only contain '#', '*' and '.', found '{0}'")]
    InvalidMarkerSet(char),

    #[error("start grid is {start_rows}x{start_cols} but target grid is {target_rows}x{target_cols}")]
    ShapeMismatch {
        start_rows: usize,
        start_cols: usize,
        target_rows: usize,
        target_cols: usize,
    },

    #[error("{grid} grid must contain exactly one blank '*', found {found}")]
    BlankCount { grid: &'static str, found: usize },

    #[error("word ladder needs `words` or `wordsFile`")]
    MissingWords,

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid puzzle definition: {0}")]
    Json(#[from] serde_json::Error),
}

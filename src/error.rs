//! Error types for dictionary, grid and filter construction.
//!
//! Only construction can fail. Searching never returns an error in the
//! permissive mode: empty grids, unmatched filters and a zero result count all
//! produce empty or reduced result lists.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A word that cannot be inserted into the prefix index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word cannot be empty")]
    Empty,

    #[error("invalid Persian letter {letter:?} in word {word:?}")]
    InvalidLetter { word: String, letter: char },
}

/// A rejected dictionary entry. The whole dictionary build is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("invalid dictionary entry #{index} ({word:?}): {source}")]
    InvalidWord {
        /// 0-based position of the entry in the input sequence.
        index: usize,
        word: String,
        #[source]
        source: WordError,
    },

    #[error("invalid dictionary entry #{index} ({word:?}): point must be positive number, got {score}")]
    NonPositiveScore {
        index: usize,
        word: String,
        score: i64,
    },
}

/// Letter input that cannot form a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Input cannot be empty")]
    Empty,

    #[error("Exactly {expected} letters required, found {found}")]
    LetterCount { expected: usize, found: usize },

    #[error("Invalid Persian letter: {0}")]
    InvalidLetter(String),

    #[error("a {rows}x{cols} grid exceeds the maximum of {max} cells")]
    TooLarge { rows: usize, cols: usize, max: usize },
}

/// A cell filter rejected by the strict filter mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("cell filter {0:?} is not a cell number")]
    NotANumber(String),

    #[error("cell {number} is outside 1..={cells}")]
    OutOfRange { number: usize, cells: usize },
}

/// Errors that can occur anywhere in the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The word list file could not be opened or read.
    #[error("Dictionary file not found or is not readable: {}", path.display())]
    DictionaryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process the JSON word list: {0}")]
    Json(#[from] serde_json::Error),
}

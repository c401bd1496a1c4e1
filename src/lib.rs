//! # Letter Mash
//!
//! Finds every dictionary word hidden in a Persian letter-mash grid.
//!
//! Words are spelled by walking from cell to cell in any of the 8 directions
//! without reusing a cell. A prefix index built from the word list prunes
//! every walk that can no longer become a word, and the words found are ranked
//! by their dictionary score.

pub mod alphabet;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod finder;
pub mod grid;
pub mod loader;
pub mod trie;

pub use alphabet::{Letter, ALPHABET, ALPHABET_SIZE};
pub use dictionary::{Dictionary, DictionaryEntry};
pub use error::{DictionaryError, Error, FilterError, GridError, Result, WordError};
pub use finder::{find_top_words, FoundWord, Finder, RankedWord};
pub use grid::{Grid, Position};
pub use trie::{NodeId, PrefixIndex};

/// Rows of a standard grid
pub const ROWS: usize = 4;

/// Columns of a standard grid
pub const COLS: usize = 4;

/// Shortest word a search reports
pub const MIN_WORD_LENGTH: usize = 2;

/// Number of words shown when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 3;

/// Largest grid accepted. Search recursion goes one level deeper per cell.
pub const MAX_CELLS: usize = 64;

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Result<Dictionary> {
    loader::load_embedded()
}

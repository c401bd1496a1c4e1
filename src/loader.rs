//! Word-list loading.
//!
//! Word lists are JSON arrays of `{"word": "...", "point": N}` objects.

use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The word list compiled into the binary.
pub const EMBEDDED_WORDS: &str = include_str!("../dictionary/words.json");

/// Parses a JSON word list without validating the entries.
pub fn parse_entries(json: &str) -> Result<Vec<DictionaryEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_from_str(json: &str) -> Result<Dictionary> {
    let entries = parse_entries(json)?;
    Ok(Dictionary::build(entries)?)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Dictionary> {
    let entries: Vec<DictionaryEntry> = serde_json::from_reader(reader)?;
    Ok(Dictionary::build(entries)?)
}

/// Loads the word list at `path`.
pub fn load_from_path(path: &Path) -> Result<Dictionary> {
    let file = File::open(path).map_err(|source| Error::DictionaryFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loading word list from {}", path.display());
    load_from_reader(BufReader::new(file))
}

/// Loads the embedded word list.
pub fn load_embedded() -> Result<Dictionary> {
    load_from_str(EMBEDDED_WORDS)
}

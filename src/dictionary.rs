//! The scored word list the finder searches against.

use crate::error::DictionaryError;
use crate::trie::{NodeId, PrefixIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `(word, score)` pair of a word list.
///
/// Word lists on disk use the key `point` for the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(alias = "point")]
    pub score: i64,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>, score: i64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

impl<S: Into<String>> From<(S, i64)> for DictionaryEntry {
    fn from((word, score): (S, i64)) -> Self {
        Self::new(word, score)
    }
}

/// An immutable dictionary: a prefix index plus the score of every word.
///
/// Built once and then shared by reference between any number of searches.
#[derive(Debug, Clone)]
pub struct Dictionary {
    index: PrefixIndex,
    scores: HashMap<String, u64>,
}

impl Dictionary {
    /// Builds a dictionary from `entries`, in order.
    ///
    /// Fails on the first entry with an empty word, a letter outside the
    /// alphabet or a score below 1; nothing built so far survives the error.
    /// A word listed twice keeps its last score.
    pub fn build<I, E>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = E>,
        E: Into<DictionaryEntry>,
    {
        let mut index = PrefixIndex::new();
        let mut scores = HashMap::new();

        for (i, entry) in entries.into_iter().enumerate() {
            let DictionaryEntry { word, score } = entry.into();

            if score <= 0 {
                return Err(DictionaryError::NonPositiveScore {
                    index: i,
                    word,
                    score,
                });
            }
            if let Err(source) = index.insert(&word) {
                return Err(DictionaryError::InvalidWord {
                    index: i,
                    word,
                    source,
                });
            }
            scores.insert(word, score as u64);
        }

        log::info!(
            "built dictionary with {} words ({} prefix nodes)",
            scores.len(),
            index.node_count()
        );

        Ok(Self { index, scores })
    }

    /// Score of `word`, matched exactly against whole words.
    pub fn score_of(&self, word: &str) -> Option<u64> {
        self.scores.get(word).copied()
    }

    /// Root of the prefix index, where every traversal starts.
    pub fn root(&self) -> NodeId {
        self.index.root()
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

//! Prefix index over the closed alphabet.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`]. Each
//! node holds one child slot per alphabet letter, so following an edge is a
//! single array lookup. The index is write-once: words are inserted while the
//! dictionary is built and nothing is ever removed.

use crate::alphabet::{Letter, ALPHABET_SIZE};
use crate::error::WordError;

/// Handle to a node inside a [`PrefixIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct PrefixNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    /// Some dictionary word ends exactly here.
    terminal: bool,
}

impl PrefixNode {
    fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            terminal: false,
        }
    }
}

/// A trie answering "does this prefix exist" and "is this prefix a word"
/// one letter at a time.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<PrefixNode>,
    words: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// Creates an index holding only the root (the empty prefix).
    pub fn new() -> Self {
        Self {
            nodes: vec![PrefixNode::new()],
            words: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Inserts `word`, creating missing nodes on the way down.
    ///
    /// The word is validated in full before the index is touched, so a
    /// rejected word leaves no stray nodes behind. Inserting the same word
    /// twice is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<(), WordError> {
        let letters = Self::letters_of(word)?;

        let mut node = self.root();
        for letter in letters {
            node = match self.child(node, letter) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(PrefixNode::new());
                    self.nodes[node.idx()].children[letter.index()] = Some(next);
                    next
                }
            };
        }

        let end = &mut self.nodes[node.idx()];
        if !end.terminal {
            end.terminal = true;
            self.words += 1;
        }
        Ok(())
    }

    /// Follows the edge for `letter` out of `node`.
    ///
    /// `None` means no dictionary word continues this prefix with `letter`;
    /// the search engine prunes the branch on it.
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[node.idx()].children[letter.index()]
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.idx()].terminal
    }

    /// Walks `prefix` from the root, returning the node it ends on.
    fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(self.root(), |node, c| {
            Letter::new(c).and_then(|letter| self.child(node, letter))
        })
    }

    /// True if `word` was inserted as a whole word.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.walk(word).is_some_and(|node| self.is_terminal(node))
    }

    /// True if some inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn letters_of(word: &str) -> Result<Vec<Letter>, WordError> {
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        word.chars()
            .map(|c| {
                Letter::new(c).ok_or_else(|| WordError::InvalidLetter {
                    word: word.to_string(),
                    letter: c,
                })
            })
            .collect()
    }
}

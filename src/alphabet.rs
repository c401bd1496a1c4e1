//! The closed Persian alphabet used by grids and the prefix index.
//!
//! Every grid cell and every trie edge is keyed by a [`Letter`], which is an
//! index into [`ALPHABET`]. Characters outside the alphabet never make it
//! into a `Letter`.

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 32;

/// The 32 legal grid letters, in keyboard order.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'ض', 'ص', 'ث', 'ق', 'ف', 'غ', 'ع', 'ه', 'خ', 'ح', 'ج', 'چ', 'ش', 'س', 'ی', 'ب',
    'ل', 'ا', 'ت', 'ن', 'م', 'ک', 'گ', 'پ', 'ظ', 'ط', 'ز', 'ر', 'ذ', 'د', 'و', 'ژ',
];

/// A single letter of the alphabet, stored as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Returns the letter for `c`, or `None` if `c` is not in the alphabet.
    pub fn new(c: char) -> Option<Self> {
        ALPHABET
            .iter()
            .position(|&a| a == c)
            .map(|i| Letter(i as u8))
    }

    /// Parses a token that must consist of exactly one alphabet character.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// Position of this letter in [`ALPHABET`] (0..ALPHABET_SIZE).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        ALPHABET[self.index()]
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Check whether `c` belongs to the alphabet
pub fn is_valid_letter(c: char) -> bool {
    Letter::new(c).is_some()
}

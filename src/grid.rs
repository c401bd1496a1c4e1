//! The letter grid and its 8-connected adjacency.

use crate::alphabet::Letter;
use crate::error::GridError;
use crate::{COLS, MAX_CELLS, ROWS};
use serde::{Deserialize, Serialize};

/// A 0-indexed `(row, col)` cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 cells surrounding this one.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbor offsets in traversal order: up, down, left, right, up-left,
/// up-right, down-left, down-right.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A fixed-size rectangular grid of letters, filled row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Letter>,
}

impl Grid {
    /// Builds a `rows` x `cols` grid from exactly `rows * cols` single-letter
    /// tokens. Token `i * cols + j` lands in cell `(i, j)`.
    ///
    /// The count is checked before the letters, so a short input reports the
    /// count mismatch even if it also holds an invalid letter.
    pub fn from_letters<I, S>(tokens: I, rows: usize, cols: usize) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expected = rows.saturating_mul(cols);
        if expected > MAX_CELLS {
            return Err(GridError::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            });
        }

        let tokens: Vec<S> = tokens.into_iter().collect();
        if tokens.len() != expected {
            return Err(GridError::LetterCount {
                expected,
                found: tokens.len(),
            });
        }

        let cells = tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                Letter::parse(token).ok_or_else(|| GridError::InvalidLetter(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows, cols, cells })
    }

    /// Parses whitespace-separated letters into a standard `ROWS` x `COLS` grid.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        Self::parse_with_dimensions(input, ROWS, COLS)
    }

    pub fn parse_with_dimensions(input: &str, rows: usize, cols: usize) -> Result<Self, GridError> {
        if input.trim().is_empty() {
            return Err(GridError::Empty);
        }
        Self::from_letters(input.split_whitespace(), rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn at(&self, pos: Position) -> Letter {
        self.cells[self.index_of(pos)]
    }

    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.contains(pos).then(|| self.at(pos))
    }

    /// Row-major index of `pos`.
    pub(crate) fn index_of(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos} is outside the grid");
        pos.row * self.cols + pos.col
    }

    /// In-bounds neighbors of `pos`, in [`DIRECTIONS`] order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position::new(row, col);
            self.contains(next).then_some(next)
        })
    }

    /// Converts a 1-based row-major cell number into a position.
    pub fn position_of(&self, cell_number: usize) -> Option<Position> {
        if cell_number == 0 || cell_number > self.cell_count() {
            return None;
        }
        let i = cell_number - 1;
        Some(Position::new(i / self.cols, i % self.cols))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, letters) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = letters.iter().map(|l| l.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

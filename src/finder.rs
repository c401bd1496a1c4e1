//! Exhaustive grid search guided by the prefix index.
//!
//! Every cell seeds a depth-first traversal. A branch dies as soon as the
//! letters collected so far stop being a dictionary prefix, so only paths that
//! can still spell a word are explored. Found words are deduplicated by text,
//! scored, stably sorted by score and truncated.

use crate::dictionary::Dictionary;
use crate::error::FilterError;
use crate::filter::{parse_cell_filter, resolve_cell_filter};
use crate::grid::{Grid, Position};
use crate::trie::{NodeId, PrefixIndex};
use crate::MIN_WORD_LENGTH;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

/// A word found in the grid, with the cells that spell it in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
}

impl FoundWord {
    pub fn touches(&self, pos: Position) -> bool {
        self.path.contains(&pos)
    }
}

/// A found word with its dictionary score. This is what searches return.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub score: u64,
    pub path: Vec<Position>,
}

/// Mutable state of one search: visited cells, the current path and its text,
/// and the words recorded so far in discovery order.
struct Traversal<'a> {
    index: &'a PrefixIndex,
    grid: &'a Grid,
    visited: Vec<bool>,
    path: Vec<Position>,
    text: String,
    seen: HashSet<String>,
    found: Vec<FoundWord>,
}

/// One cell pushed onto the current path. Dropping it pops the cell again.
struct Step<'t, 'a> {
    traversal: &'t mut Traversal<'a>,
}

impl<'a> Deref for Step<'_, 'a> {
    type Target = Traversal<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.traversal
    }
}

impl DerefMut for Step<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.traversal
    }
}

impl Drop for Step<'_, '_> {
    fn drop(&mut self) {
        self.traversal.leave();
    }
}

impl<'a> Traversal<'a> {
    fn new(index: &'a PrefixIndex, grid: &'a Grid) -> Self {
        Self {
            index,
            grid,
            visited: vec![false; grid.cell_count()],
            path: Vec::with_capacity(grid.cell_count()),
            text: String::new(),
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    fn run(mut self, root: NodeId) -> Vec<FoundWord> {
        let grid = self.grid;
        for pos in grid.positions() {
            self.visit(root, pos);
        }
        debug_assert!(self.path.is_empty() && self.visited.iter().all(|v| !v));
        self.found
    }

    fn visit(&mut self, node: NodeId, pos: Position) {
        let grid = self.grid;
        if !grid.contains(pos) || self.visited[grid.index_of(pos)] {
            return;
        }
        let Some(next) = self.index.child(node, grid.at(pos)) else {
            return;
        };

        let mut step = self.enter(pos);
        step.record_if_word(next);
        for neighbor in grid.neighbors(pos) {
            step.visit(next, neighbor);
        }
    }

    fn enter(&mut self, pos: Position) -> Step<'_, 'a> {
        let i = self.grid.index_of(pos);
        self.visited[i] = true;
        self.path.push(pos);
        self.text.push(self.grid.at(pos).as_char());
        Step { traversal: self }
    }

    fn leave(&mut self) {
        if let Some(pos) = self.path.pop() {
            let i = self.grid.index_of(pos);
            self.visited[i] = false;
            self.text.pop();
        }
    }

    fn record_if_word(&mut self, node: NodeId) {
        if !self.index.is_terminal(node) || self.path.len() < MIN_WORD_LENGTH {
            return;
        }
        if self.seen.insert(self.text.clone()) {
            self.found.push(FoundWord {
                word: self.text.clone(),
                path: self.path.clone(),
            });
        }
    }
}

/// Searches grids against one shared dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Finder<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Finder<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Every distinct word in `grid`, in discovery order: seed cells
    /// row-major, then neighbors in [`crate::grid::DIRECTIONS`] order. Each
    /// word keeps the first path that spelled it.
    pub fn find_all(&self, grid: &Grid) -> Vec<FoundWord> {
        let found = Traversal::new(self.dictionary.index(), grid).run(self.dictionary.root());
        log::debug!(
            "searched {}x{} grid, found {} distinct words",
            grid.rows(),
            grid.cols(),
            found.len()
        );
        found
    }

    /// The `top_n` highest scoring words in `grid`.
    ///
    /// `cell_filter` is a 1-based cell number; only words passing through that
    /// cell are kept. A filter that is blank, not a number or outside the grid
    /// is ignored. Equal scores keep discovery order.
    pub fn find_top_words(&self, grid: &Grid, top_n: usize, cell_filter: Option<&str>) -> Vec<RankedWord> {
        if top_n == 0 {
            return Vec::new();
        }
        let filter = resolve_cell_filter(cell_filter, grid);
        self.rank(grid, top_n, filter)
    }

    /// Like [`Finder::find_top_words`], but an unusable filter is an error.
    pub fn find_top_words_strict(
        &self,
        grid: &Grid,
        top_n: usize,
        cell_filter: Option<&str>,
    ) -> Result<Vec<RankedWord>, FilterError> {
        let filter = match cell_filter {
            Some(input) => parse_cell_filter(input, grid)?,
            None => None,
        };
        if top_n == 0 {
            return Ok(Vec::new());
        }
        Ok(self.rank(grid, top_n, filter))
    }

    /// Runs [`Finder::find_top_words`] on every grid in parallel. Results come
    /// back in the order of `grids`.
    pub fn find_top_words_batch(
        &self,
        grids: &[Grid],
        top_n: usize,
        cell_filter: Option<&str>,
    ) -> Vec<Vec<RankedWord>> {
        grids
            .par_iter()
            .map(|grid| self.find_top_words(grid, top_n, cell_filter))
            .collect()
    }

    fn rank(&self, grid: &Grid, top_n: usize, filter: Option<Position>) -> Vec<RankedWord> {
        let mut ranked: Vec<RankedWord> = self
            .find_all(grid)
            .into_iter()
            .filter(|found| filter.map_or(true, |pos| found.touches(pos)))
            .filter_map(|FoundWord { word, path }| {
                let score = self.dictionary.score_of(&word)?;
                Some(RankedWord { word, score, path })
            })
            .collect();

        if let Some(pos) = filter {
            log::debug!("{} words pass through cell {}", ranked.len(), pos);
        }

        // stable: ties stay in discovery order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(top_n);
        ranked
    }
}

/// Finds the `top_n` best words of `grid`. See [`Finder::find_top_words`].
pub fn find_top_words(
    dictionary: &Dictionary,
    grid: &Grid,
    top_n: usize,
    cell_filter: Option<&str>,
) -> Vec<RankedWord> {
    Finder::new(dictionary).find_top_words(grid, top_n, cell_filter)
}

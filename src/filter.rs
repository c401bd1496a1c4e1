//! Cell filters restrict results to words whose path touches one cell.
//!
//! A filter is typed by the user as a 1-based, row-major cell number. The
//! permissive resolver treats anything it cannot use as "no filter"; the
//! strict parser reports it instead.

use crate::error::FilterError;
use crate::grid::{Grid, Position};

/// Resolves a filter for `grid`, ignoring blank, unparsable and
/// out-of-range input.
pub fn resolve_cell_filter(input: Option<&str>, grid: &Grid) -> Option<Position> {
    let input = input?;
    match parse_cell_filter(input, grid) {
        Ok(pos) => pos,
        Err(err) => {
            log::warn!("ignoring cell filter: {err}");
            None
        }
    }
}

/// Parses a filter for `grid`. Blank input means no filter.
pub fn parse_cell_filter(input: &str, grid: &Grid) -> Result<Option<Position>, FilterError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let number: usize = input
        .parse()
        .map_err(|_| FilterError::NotANumber(input.to_string()))?;

    grid.position_of(number)
        .map(Some)
        .ok_or(FilterError::OutOfRange {
            number,
            cells: grid.cell_count(),
        })
}

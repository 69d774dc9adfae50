//! Range selection and resolution
//!
//! A [`RangeRef`] is the user's column + row-bounds selection exactly as
//! entered; it is resolved lazily against the grid's current shape and
//! never stored as concrete coordinates.

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Convert a zero-based column index to its letter (0 = A, 25 = Z)
pub fn column_letter(index: usize) -> Option<char> {
    if index < 26 {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}

/// A column + row-bounds selection, pre-resolution
///
/// Row bounds are 1-based and inclusive; 0 encodes "not provided". The
/// column is a single letter, case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRef {
    /// Column letter (e.g., "A", "b")
    pub column: String,
    /// First row, 1-based inclusive
    pub row_start: u32,
    /// Last row, 1-based inclusive
    pub row_end: u32,
}

impl RangeRef {
    /// Create a new range selection
    pub fn new<S: Into<String>>(column: S, row_start: u32, row_end: u32) -> Self {
        RangeRef {
            column: column.into(),
            row_start,
            row_end,
        }
    }

    /// Resolve to the ordered list of in-bounds `(row, col)` coordinates
    ///
    /// Fails with [`Error::EmptySelection`] when the column is missing or
    /// either row bound is unset. Out-of-bounds components do NOT fail:
    /// rows past the grid edge are skipped and a column outside A..Z (or
    /// past the grid's width) resolves to no coordinates at all. Callers
    /// treat an empty result as a no-op or a "nothing found" outcome.
    pub fn resolve(&self, grid: &Grid) -> Result<Vec<(usize, usize)>> {
        let Some(letter) = self.column.chars().next() else {
            return Err(Error::EmptySelection("specify a column"));
        };
        if self.row_start == 0 || self.row_end == 0 {
            return Err(Error::EmptySelection("specify a valid row range"));
        }

        // Alphabet position of the first character; anything outside the
        // grid's columns degrades to an empty resolution.
        let col = letter.to_ascii_uppercase() as i64 - 'A' as i64;
        if col < 0 || col as usize >= grid.col_count() {
            return Ok(Vec::new());
        }
        let col = col as usize;

        // Rows past the grid edge are skipped, so the walk stops at
        // whichever comes first: the requested end or the last row.
        let first = self.row_start as usize - 1;
        let last = (self.row_end as usize).min(grid.row_count());

        Ok((first..last).map(|row| (row, col)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), Some('A'));
        assert_eq!(column_letter(25), Some('Z'));
        assert_eq!(column_letter(26), None);
    }

    #[test]
    fn test_resolve_basic() {
        let grid = Grid::with_size(5, 3);
        let coords = RangeRef::new("B", 2, 4).resolve(&grid).unwrap();
        assert_eq!(coords, vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let grid = Grid::with_size(5, 3);
        let coords = RangeRef::new("c", 1, 1).resolve(&grid).unwrap();
        assert_eq!(coords, vec![(0, 2)]);
    }

    #[test]
    fn test_resolve_preconditions() {
        let grid = Grid::with_size(5, 3);
        assert!(matches!(
            RangeRef::new("", 1, 2).resolve(&grid),
            Err(Error::EmptySelection(_))
        ));
        assert!(matches!(
            RangeRef::new("A", 0, 2).resolve(&grid),
            Err(Error::EmptySelection(_))
        ));
        assert!(matches!(
            RangeRef::new("A", 1, 0).resolve(&grid),
            Err(Error::EmptySelection(_))
        ));
    }

    #[test]
    fn test_resolve_clamps_rows_silently() {
        let grid = Grid::with_size(3, 2);
        // Rows 2..10 against a 3-row grid: only rows 2 and 3 exist.
        let coords = RangeRef::new("A", 2, 10).resolve(&grid).unwrap();
        assert_eq!(coords, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_resolve_column_outside_grid_is_empty() {
        let grid = Grid::with_size(3, 2);
        assert!(RangeRef::new("Z", 1, 3).resolve(&grid).unwrap().is_empty());
        // A non-letter column maps outside the alphabet, same outcome.
        assert!(RangeRef::new("1", 1, 3).resolve(&grid).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_inverted_bounds_is_empty() {
        let grid = Grid::with_size(5, 3);
        assert!(RangeRef::new("A", 4, 2).resolve(&grid).unwrap().is_empty());
    }
}

//! Grid type - the owned cell matrix

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::style::{CellStyle, StyleEdit};
use crate::{DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS};

/// The rectangular cell matrix
///
/// Invariants, upheld by every operation:
/// - every row has the same length (rectangularity)
/// - at least one row and one column exist
///
/// Structural operations are all-or-nothing: a rejected operation has
/// touched no cell. The grid is the single owned mutable resource; all
/// other components read through `&Grid` or mutate through the entry
/// points here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create the default 20x10 grid of empty cells
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a grid of empty cells with the given shape
    ///
    /// Dimensions are clamped to at least 1x1 so the floor invariant
    /// holds from birth.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Grid {
            rows: (0..rows)
                .map(|_| (0..cols).map(|_| Cell::empty()).collect())
                .collect(),
        }
    }

    /// Build a grid from prepared rows, validating the invariants
    ///
    /// Used by the import adapter after padding; rejects ragged or
    /// zero-dimension input with [`Error::InvalidFormat`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::invalid_format("grid needs at least one cell")),
        };

        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::invalid_format("rows have unequal lengths"));
        }

        Ok(Grid { rows })
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Get a cell, if the coordinates are in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a cell's text value, if the coordinates are in bounds
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).map(|c| c.value.as_str())
    }

    /// Get a cell's style, if the coordinates are in bounds
    pub fn style(&self, row: usize, col: usize) -> Option<&CellStyle> {
        self.cell(row, col).map(|c| &c.style)
    }

    /// Iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    // === Cell Modification ===

    /// Replace one cell's value, preserving its style
    pub fn set_value<S: Into<String>>(&mut self, row: usize, col: usize, value: S) -> Result<()> {
        self.check_position(row, col)?;
        self.rows[row][col].value = value.into();
        Ok(())
    }

    /// Apply a style edit (toggle or color assignment) to one cell
    ///
    /// The cell's current style is read, mutated, and written back; the
    /// value is untouched.
    pub fn apply_style_edit(&mut self, row: usize, col: usize, edit: StyleEdit) -> Result<()> {
        self.check_position(row, col)?;
        edit.apply(&mut self.rows[row][col].style);
        Ok(())
    }

    // === Structural Operations ===

    /// Append one row of empty cells, as wide as the grid
    pub fn add_row(&mut self) {
        let width = self.col_count();
        self.rows.push((0..width).map(|_| Cell::empty()).collect());
    }

    /// Remove the last row
    pub fn delete_row(&mut self) -> Result<()> {
        if self.rows.len() <= 1 {
            return Err(Error::StructuralLimit(
                "spreadsheet must have at least one row",
            ));
        }
        self.rows.pop();
        Ok(())
    }

    /// Append one empty cell to every row
    pub fn add_column(&mut self) -> Result<()> {
        if self.col_count() >= MAX_COLS {
            return Err(Error::StructuralLimit(
                "cannot add more than 26 columns (A-Z)",
            ));
        }
        for row in &mut self.rows {
            row.push(Cell::empty());
        }
        Ok(())
    }

    /// Remove the last cell of every row
    pub fn delete_column(&mut self) -> Result<()> {
        if self.col_count() <= 1 {
            return Err(Error::StructuralLimit(
                "spreadsheet must have at least one column",
            ));
        }
        for row in &mut self.rows {
            row.pop();
        }
        Ok(())
    }

    /// Validate cell coordinates against the current shape
    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.row_count() || col >= self.col_count() {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            });
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

//! # gridbook-core
//!
//! Core data structures for the gridbook tabular data editor.
//!
//! This crate provides the fundamental types used throughout gridbook:
//! - [`Cell`] and [`CellStyle`] - a text value with its formatting
//! - [`Grid`] - the rectangular cell matrix and its mutation entry points
//! - [`RangeRef`] - a column + row-bounds selection, resolved lazily
//! - [`Cursor`] - the single focused cell used by style edits
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{Grid, RangeRef, StyleEdit};
//!
//! let mut grid = Grid::new(); // 20 rows x 10 columns, all empty
//!
//! grid.set_value(0, 0, "Hello").unwrap();
//! grid.apply_style_edit(0, 0, StyleEdit::ToggleBold).unwrap();
//!
//! let coords = RangeRef::new("A", 1, 5).resolve(&grid).unwrap();
//! assert_eq!(coords.len(), 5);
//! ```

pub mod cell;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod range;
pub mod style;

// Re-exports for convenience
pub use cell::Cell;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use grid::Grid;
pub use range::{column_letter, RangeRef};
pub use style::{CellStyle, Color, StyleEdit};

/// Maximum number of columns in a grid (one per letter A-Z)
pub const MAX_COLS: usize = 26;

/// Number of rows in a freshly created grid
pub const DEFAULT_ROWS: usize = 20;

/// Number of columns in a freshly created grid
pub const DEFAULT_COLS: usize = 10;

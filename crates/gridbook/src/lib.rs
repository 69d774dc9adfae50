//! # gridbook
//!
//! A grid data engine for tabular editors.
//!
//! Gridbook owns a rectangular matrix of text cells and provides the
//! operations an editing surface needs:
//!
//! - structural edits (add/delete row/column) with floor and ceiling limits
//! - per-cell styling (bold/italic/underline toggles, text color)
//! - aggregates (sum/average/max/min/count) over a column range
//! - text cleanup (trim/uppercase/lowercase/remove-duplicates)
//! - literal find/replace with a modified-cell count
//! - chart series extraction for an external charting collaborator
//! - CSV import/export with padding and value round trips
//!
//! Rendering, dialogs, and file pickers are the host's problem; every
//! user-facing outcome crosses the [`notify`] boundary as plain data.
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//!
//! let mut grid = Grid::new();
//! grid.set_value(0, 0, "10").unwrap();
//! grid.set_value(1, 0, "20").unwrap();
//!
//! let range = RangeRef::new("A", 1, 2);
//! let total = aggregate(&grid, &range, AggregateKind::Sum).unwrap();
//! assert_eq!(total, AggregateOutcome::Value(30.0));
//! ```

pub mod notify;
pub mod prelude;

// Re-export core types
pub use gridbook_core::{
    cell::Cell,
    column_letter,
    cursor::Cursor,
    error::{Error, Result},
    grid::Grid,
    range::RangeRef,
    style::{CellStyle, Color, StyleEdit},
    DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS,
};

// Re-export range operations
pub use gridbook_ops::{
    aggregate, find_replace, numeric_values, transform, AggregateKind, AggregateOutcome,
    TransformKind,
};

// Re-export the import/export adapter
pub use gridbook_csv::{
    grid_from_payload, payload_from_grid, CsvError, CsvReadOptions, CsvReader, CsvResult,
    CsvWriteOptions, CsvWriter, LineTerminator, PayloadValue, SheetPayload, EXPORT_SHEET_NAME,
};

// Re-export chart types
pub use gridbook_chart::ChartSeries;

// Re-export the notification boundary
pub use notify::{Notification, Notifier, Severity};

//! # gridbook-ops
//!
//! Range operations for gridbook. Every operation takes the grid plus a
//! [`RangeRef`](gridbook_core::RangeRef), resolves it, and acts on the
//! resulting cells:
//!
//! - [`aggregate`] - sum/average/max/min/count over numeric-parseable values
//! - [`transform`] - trim/uppercase/lowercase/remove-duplicates cleanup
//! - [`find_replace`] - literal substring replacement with a cell count
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{Grid, RangeRef};
//! use gridbook_ops::{aggregate, AggregateKind, AggregateOutcome};
//!
//! let mut grid = Grid::new();
//! grid.set_value(0, 0, "10").unwrap();
//! grid.set_value(1, 0, "20").unwrap();
//!
//! let outcome = aggregate(&grid, &RangeRef::new("A", 1, 2), AggregateKind::Sum).unwrap();
//! assert_eq!(outcome, AggregateOutcome::Value(30.0));
//! ```

pub mod aggregate;
pub mod find_replace;
pub mod transform;

pub use aggregate::{aggregate, numeric_values, AggregateKind, AggregateOutcome};
pub use find_replace::find_replace;
pub use transform::{transform, TransformKind};

//! Prelude module - common imports for gridbook users
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::{
    // Operations
    aggregate,
    find_replace,
    grid_from_payload,
    payload_from_grid,
    transform,

    AggregateKind,
    AggregateOutcome,
    // Cell types
    Cell,
    CellStyle,
    // Chart types
    ChartSeries,
    Color,

    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    Cursor,

    // Error types
    Error,
    // Main types
    Grid,

    // Notification boundary
    Notification,
    Notifier,
    PayloadValue,
    RangeRef,
    Result,
    Severity,
    SheetPayload,

    StyleEdit,
    TransformKind,
};

//! # gridbook-csv
//!
//! Import/export adapter for gridbook.
//!
//! The adapter converts between the grid and a [`SheetPayload`]: a named
//! sheet of possibly-ragged rows of stringifiable scalar values, the
//! shape a tabular interchange file parses into. CSV is the on-disk
//! format, read and written with the `csv` crate.
//!
//! Importing pads every row to the widest row's length, stringifies
//! every value, and never produces a zero-dimension grid; exporting
//! drops styles and writes values only.

mod error;
mod export;
mod import;
mod options;
mod payload;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use export::{payload_from_grid, EXPORT_SHEET_NAME};
pub use import::grid_from_payload;
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use payload::{PayloadValue, SheetPayload};
pub use reader::CsvReader;
pub use writer::CsvWriter;

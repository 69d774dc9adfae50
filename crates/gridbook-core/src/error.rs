//! Error types for gridbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the grid engine
#[derive(Debug, Error)]
pub enum Error {
    /// No usable range selection (missing column or non-positive row bounds)
    #[error("Invalid selection: {0}")]
    EmptySelection(&'static str),

    /// Find text was empty
    #[error("Find text is empty")]
    EmptyQuery,

    /// Row/column floor or the 26-column ceiling would be violated
    #[error("Structural limit: {0}")]
    StructuralLimit(&'static str),

    /// Cell coordinates outside the grid
    #[error("Cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Payload could not be parsed as tabular data
    #[error("Invalid spreadsheet data: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Create an [`Error::InvalidFormat`] with a message
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        Error::InvalidFormat(msg.into())
    }
}

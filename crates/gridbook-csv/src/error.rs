//! Adapter error types

use thiserror::Error;

/// Result type for CSV adapter operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while reading or writing interchange files
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridbook_core::Error),
}

impl From<CsvError> for gridbook_core::Error {
    /// Collapse an adapter failure into the engine's invalid-format kind
    ///
    /// Whatever went wrong, the user-facing meaning is the same: the
    /// selected file is not a valid spreadsheet.
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Core(e) => e,
            other => gridbook_core::Error::invalid_format(other.to_string()),
        }
    }
}

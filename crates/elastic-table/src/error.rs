//! Error types for table construction and rendering.

use std::io;

/// Errors that can occur while building or rendering a table.
///
/// Conditions that still produce a usable table, such as content that cannot
/// fit the terminal, are not errors. They are reported through
/// [`Fit`](crate::Fit) instead.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A row does not have one cell per header column.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowShapeMismatch {
        /// Zero-based index the row would have had.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of cells in the rejected row.
        actual: usize,
    },

    /// Writing to the output sink failed.
    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

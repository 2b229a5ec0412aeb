//! Error types for projection and bulk import.
//!
//! This module defines one error family per concern:
//!
//! - [`UnknownColumnError`] - a referenced column is not in the schema
//! - [`ArgumentError`] - structurally invalid import arguments
//! - [`ExecutionError`] - a SQL statement failed on the connection
//! - [`CsvError`] - CSV serialization or output failures
//! - [`ExportError`] - top-level projection/export errors
//! - [`ImportError`] - top-level bulk-import errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across module boundaries.
//!
//! Validation failures are deliberately NOT errors: candidates that fail
//! their validity check are returned as data in
//! [`ImportResult::failed_instances`](crate::import::ImportResult).

use thiserror::Error;

// =============================================================================
// Unknown Column
// =============================================================================

/// A column name was referenced that the target schema does not declare.
///
/// Raised by the export column resolver (for `only`, `except`, and explicit
/// header name lists) and by the import normalizer (for import column lists).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown column '{column}' for table '{table}'")]
pub struct UnknownColumnError {
    /// Table whose schema was consulted.
    pub table: String,

    /// The name that failed to resolve.
    pub column: String,
}

impl UnknownColumnError {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

// =============================================================================
// Import Argument Errors
// =============================================================================

/// Structurally invalid import arguments, detected before any data is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The column list resolved to zero columns.
    #[error("Import requires at least one column")]
    EmptyColumns,

    /// A raw value row does not match the column list width.
    #[error("Row {row} has {actual} value(s) but {expected} column(s) were given")]
    RowWidthMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        expected: usize,
        actual: usize,
    },
}

// =============================================================================
// Statement Execution Errors
// =============================================================================

/// A SQL statement failed on the connection.
///
/// Execution errors are fatal to the import that raised them: earlier
/// statements stay applied, later statements are never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Statement execution failed: {message}")]
pub struct ExecutionError {
    /// Driver-reported failure description.
    pub message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// CSV Output Errors
// =============================================================================

/// Errors while serializing a projection to CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The CSV writer rejected a record.
    #[error("Failed to write CSV record: {0}")]
    Serialize(#[from] csv::Error),

    /// The underlying sink failed.
    #[error("Failed to write CSV output: {0}")]
    Io(#[from] std::io::Error),

    /// The emitted bytes were not valid UTF-8.
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Top-Level Export Errors
// =============================================================================

/// Errors raised while projecting records or emitting CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A selection option named a column the schema does not declare.
    #[error("Projection error: {0}")]
    UnknownColumn(#[from] UnknownColumnError),

    /// An include entry named an association the schema does not declare.
    #[error("Unknown association '{association}' for table '{table}'")]
    UnknownAssociation { table: String, association: String },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),
}

// =============================================================================
// Top-Level Import Errors
// =============================================================================

/// Errors raised while normalizing, building, or executing a bulk import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The call arguments were structurally invalid.
    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// The import column list named an unknown column.
    #[error("Import error: {0}")]
    UnknownColumn(#[from] UnknownColumnError),

    /// A statement failed on the connection.
    #[error("Import aborted: {0}")]
    Execution(#[from] ExecutionError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result alias for projection/export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result alias for CSV output operations.
pub type CsvResult<T> = Result<T, CsvError>;

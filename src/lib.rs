//! # Rowset - record projection to CSV and validated SQL bulk import
//!
//! Rowset gives record types declarative CSV export and multi-row SQL
//! import. Record types describe themselves through a small capability
//! trait (schema, attribute access, validity, associations); everything
//! else is driven by options, not by per-type code.
//!
//! ## Architecture
//!
//! ```text
//!              ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//!   export:    │   Records   │────▶│  Projector  │────▶│  CSV text   │
//!              │ (+includes) │     │ (flat rows) │     │ (rfc 4180)  │
//!              └─────────────┘     └─────────────┘     └─────────────┘
//!              ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//!   import:    │ Candidates  │────▶│ Partition + │────▶│ Connection  │
//!              │ (rows/insts)│     │  SQL build  │     │ (execute)   │
//!              └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowset::{collection_to_csv, import_instances, ImportOptions, ProjectionOptions};
//!
//! // Export: pick columns, rename a header, follow an association.
//! let options = ProjectionOptions::new()
//!     .only(["id", "name"])
//!     .rename("name", "Developer")
//!     .include("address");
//! let csv = collection_to_csv(&developers, &options)?;
//!
//! // Import: validate, then insert the valid rows in one statement.
//! let result = import_instances(&mut conn, developers, ImportOptions::default())?;
//! println!("{} inserted, {} invalid", result.num_inserts, result.failed_instances.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`model`] - Record capability traits, schemas, values
//! - [`connection`] - Database seam with default ANSI quoting
//! - [`export`] - Column selection, projection, CSV emission
//! - [`import`] - Argument normalization, validation, batched inserts
//!
//! All operations are synchronous and run on the caller's thread; shared
//! mutable state lives only in the caller's [`Connection`].

// Core modules
pub mod error;
pub mod model;

// Database seam
pub mod connection;

// Export pipeline
pub mod export;

// Import pipeline
pub mod import;

#[cfg(test)]
pub mod fixtures;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ArgumentError,
    CsvError,
    CsvResult,
    ExecutionError,
    ExportError,
    ExportResult,
    ImportError,
    UnknownColumnError,
};

// =============================================================================
// Re-exports - Model
// =============================================================================

pub use model::{ColumnType, Field, Model, Record, Schema, SchemaThunk, Value};

// =============================================================================
// Re-exports - Connection
// =============================================================================

pub use connection::{quote_identifier, quote_value, Connection};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{
    collection_to_csv,
    record_to_csv,
    to_csv_string,
    write_csv,
    ColumnSpec,
    CsvOptions,
    Headers,
    Include,
    IncludeEntry,
    Projection,
    ProjectionOptions,
    SelectedColumn,
};

pub use export::project::{project_collection, project_record};

// =============================================================================
// Re-exports - Import
// =============================================================================

pub use import::{
    import,
    import_instances,
    import_rows,
    ImportOptions,
    ImportResult,
    ImportSource,
};

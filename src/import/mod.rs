//! Import: validated bulk insertion of records.
//!
//! This module provides:
//! - `args`: Normalization of the accepted call shapes into one canonical form
//! - `partition`: Ordered split of candidates into insertable and failed
//! - `sql`: Multi-row `INSERT` construction with connection-supplied quoting
//! - `executor`: Sequential statement execution
//!
//! ## Usage Flow
//!
//! ```text
//! ImportSource → args::normalize → partition → sql::insert_statements → executor → ImportResult
//! ```
//!
//! Validation failures are data, not errors: invalid candidates are skipped
//! and handed back in [`ImportResult::failed_instances`] while the valid
//! remainder is inserted. Only structural problems (bad columns, ragged
//! rows) and statement execution failures abort the import.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rowset::{import_instances, ImportOptions};
//!
//! let result = import_instances(&mut conn, developers, ImportOptions::default())?;
//! println!("inserted {}, rejected {}", result.num_inserts, result.failed_instances.len());
//! ```

pub mod args;
pub mod executor;
pub mod partition;
pub mod sql;

use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::error::ImportError;
use crate::model::{Model, Value};

use args::CandidateSet;

// Re-exports for convenience
pub use args::{normalize, NormalizedImport};
pub use executor::execute_all;
pub use partition::{partition_instances, partition_rows, PartitionedInstances, PartitionedRows};
pub use sql::{insert_statements, matrix_from_instances};

// =============================================================================
// Call Shapes
// =============================================================================

/// What to import.
///
/// Each variant names its own shape, replacing positional-argument sniffing
/// with an explicit choice at the call site. [`import_instances`] and
/// [`import_rows`] wrap the common variants.
#[derive(Debug)]
pub enum ImportSource<M> {
    /// Model instances, importing every schema column in schema order.
    Instances(Vec<M>),

    /// Model instances, importing only the listed columns in list order.
    InstancesWithColumns {
        columns: Vec<String>,
        instances: Vec<M>,
    },

    /// Pre-extracted value rows, one per candidate, aligned with `columns`.
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
}

// =============================================================================
// Options and Result
// =============================================================================

/// Options controlling one import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Run each candidate through its validity check before insertion.
    pub validate: bool,

    /// Maximum rows per `INSERT` statement. `None` (or zero) puts every row
    /// into a single statement.
    pub batch_size: Option<usize>,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip validation entirely; every candidate is inserted.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Chunk inserts into statements of at most `size` rows.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            validate: true,
            batch_size: None,
        }
    }
}

/// Outcome of a completed import.
#[derive(Debug)]
pub struct ImportResult<M> {
    /// Number of rows handed to the database. Counts attempted insertions,
    /// not database-side effects.
    pub num_inserts: usize,

    /// Candidates that failed validation, in candidate order. For raw-row
    /// imports these are the temporary instances built for validation.
    pub failed_instances: Vec<M>,
}

// =============================================================================
// Entry Points
// =============================================================================

/// Bulk-import `source` over `conn`.
///
/// Pipeline: normalize arguments, partition candidates by validity, build
/// multi-row `INSERT` statements, execute them in order. If every candidate
/// fails validation (or there are none), the connection is never touched and
/// `num_inserts` is zero.
pub fn import<M: Model>(
    conn: &mut dyn Connection,
    source: ImportSource<M>,
    options: ImportOptions,
) -> Result<ImportResult<M>, ImportError> {
    let NormalizedImport {
        schema,
        columns,
        source,
    } = args::normalize(source)?;

    let (matrix, failed) = match source {
        CandidateSet::Instances(instances) => {
            let split = partition::partition_instances(instances, options.validate);
            let matrix = sql::matrix_from_instances(&split.insertable, &columns);
            (matrix, split.failed)
        }
        CandidateSet::Rows(rows) => {
            let split = partition::partition_rows::<M>(&columns, rows, options.validate);
            (split.insertable, split.failed)
        }
    };

    if matrix.is_empty() {
        if failed.is_empty() {
            log::debug!("import into {}: nothing to insert", schema.table());
        } else {
            log::warn!(
                "import into {}: all {} candidate(s) failed validation",
                schema.table(),
                failed.len()
            );
        }
        return Ok(ImportResult {
            num_inserts: 0,
            failed_instances: failed,
        });
    }

    let num_inserts = matrix.len();
    let statements =
        sql::insert_statements(&*conn, schema.table(), &columns, &matrix, options.batch_size);
    executor::execute_all(conn, &statements)?;

    log::debug!(
        "import into {}: {} row(s) in {} statement(s), {} failed validation",
        schema.table(),
        num_inserts,
        statements.len(),
        failed.len()
    );
    Ok(ImportResult {
        num_inserts,
        failed_instances: failed,
    })
}

/// Import model instances with every schema column.
pub fn import_instances<M: Model>(
    conn: &mut dyn Connection,
    instances: Vec<M>,
    options: ImportOptions,
) -> Result<ImportResult<M>, ImportError> {
    import(conn, ImportSource::Instances(instances), options)
}

/// Import raw value rows under an explicit column list.
pub fn import_rows<M: Model>(
    conn: &mut dyn Connection,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    options: ImportOptions,
) -> Result<ImportResult<M>, ImportError> {
    import(conn, ImportSource::Rows { columns, rows }, options)
}

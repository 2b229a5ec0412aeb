//! Import argument normalization.
//!
//! Every accepted call shape collapses into one canonical form here: the
//! model schema, the resolved column list, and the candidate set. All
//! structural checks happen in this stage, so later stages can assume
//! well-formed input.

use crate::error::{ArgumentError, ImportError, UnknownColumnError};
use crate::model::{Field, Model, Schema, Value};

use super::ImportSource;

/// Candidates in canonical form: either instances or raw value rows.
#[derive(Debug)]
pub enum CandidateSet<M> {
    Instances(Vec<M>),
    Rows(Vec<Vec<Value>>),
}

/// Canonical form of an import call.
#[derive(Debug)]
pub struct NormalizedImport<M> {
    /// The model's schema; its table is the insert target.
    pub schema: Schema,

    /// Resolved target columns, in import order.
    pub columns: Vec<Field>,

    /// The candidates to validate and insert.
    pub source: CandidateSet<M>,
}

/// Normalize `source` against the model schema.
///
/// Checks, in order: the column list must be non-empty, every column must be
/// a schema column, and raw rows must all match the column list width.
pub fn normalize<M: Model>(source: ImportSource<M>) -> Result<NormalizedImport<M>, ImportError> {
    let schema = M::model_schema();
    let (column_names, source) = match source {
        ImportSource::Instances(instances) => {
            (schema.field_names(), CandidateSet::Instances(instances))
        }
        ImportSource::InstancesWithColumns { columns, instances } => {
            (columns, CandidateSet::Instances(instances))
        }
        ImportSource::Rows { columns, rows } => (columns, CandidateSet::Rows(rows)),
    };

    if column_names.is_empty() {
        return Err(ArgumentError::EmptyColumns.into());
    }
    let columns = resolve_columns(&schema, &column_names)?;

    if let CandidateSet::Rows(rows) = &source {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ArgumentError::RowWidthMismatch {
                    row: index,
                    expected: columns.len(),
                    actual: row.len(),
                }
                .into());
            }
        }
    }

    Ok(NormalizedImport {
        schema,
        columns,
        source,
    })
}

/// Resolve names to schema columns, preserving the given order.
fn resolve_columns(schema: &Schema, names: &[String]) -> Result<Vec<Field>, UnknownColumnError> {
    names
        .iter()
        .map(|name| {
            schema
                .lookup(name)
                .cloned()
                .ok_or_else(|| UnknownColumnError::new(schema.table(), name))
        })
        .collect()
}

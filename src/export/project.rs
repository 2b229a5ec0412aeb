//! Row projection.
//!
//! Flattens a record (optionally with included associations) into one row of
//! strings, and a collection into many rows sharing one header. Nested
//! association columns are labeled `assoc[column]`, and nesting composes:
//! an address included under a developer contributes
//! `developer[address[city]]` when the developer is itself included.
//!
//! Headers come from the projection spec, never from data, so an absent
//! association still occupies its full column span (as empty strings) and
//! rows always line up with the header.

use serde::Serialize;

use crate::error::ExportError;
use crate::model::{Model, Record, Schema};

use super::columns;
use super::ProjectionOptions;

/// Flattened output of a projection: optional header row plus value rows.
///
/// Serializable so callers can ship projections as JSON instead of CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// Header labels, or `None` when headers are disabled.
    pub headers: Option<Vec<String>>,

    /// Data rows, each exactly as wide as the header.
    pub rows: Vec<Vec<String>>,
}

impl Projection {
    /// Number of columns in this projection.
    pub fn width(&self) -> usize {
        match (&self.headers, self.rows.first()) {
            (Some(headers), _) => headers.len(),
            (None, Some(row)) => row.len(),
            (None, None) => 0,
        }
    }
}

/// Project a single record into a one-row [`Projection`].
pub fn project_record(
    record: &dyn Record,
    options: &ProjectionOptions,
) -> Result<Projection, ExportError> {
    let schema = record.schema();
    let labels = header_labels(&schema, options)?;
    let row = project_values(Some(record), &schema, options)?;
    debug_assert_eq!(row.len(), labels.len());
    Ok(Projection {
        headers: options.emit_headers().then_some(labels),
        rows: vec![row],
    })
}

/// Project a collection into a [`Projection`] with one shared header.
///
/// The header is computed from the projection spec, not from the first
/// record, so an empty collection yields a header-only projection rather
/// than an error.
pub fn project_collection<M: Model>(
    records: &[M],
    options: &ProjectionOptions,
) -> Result<Projection, ExportError> {
    let schema = M::model_schema();
    let labels = header_labels(&schema, options)?;
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let row = project_values(Some(record as &dyn Record), &schema, options)?;
        debug_assert_eq!(row.len(), labels.len());
        rows.push(row);
    }
    log::debug!(
        "projected {} row(s) x {} column(s) from {}",
        rows.len(),
        labels.len(),
        schema.table()
    );
    Ok(Projection {
        headers: options.emit_headers().then_some(labels),
        rows,
    })
}

/// Header labels for one level and its includes, recursively.
///
/// Always computed, even when the root disables headers, so selection errors
/// surface before any data is touched.
fn header_labels(schema: &Schema, options: &ProjectionOptions) -> Result<Vec<String>, ExportError> {
    let spec = columns::resolve(schema, options)?;
    let mut labels: Vec<String> = spec.columns.into_iter().map(|c| c.label).collect();
    for entry in options.include.entries() {
        let assoc_schema = association_schema(schema, &entry.name)?;
        for nested in header_labels(&assoc_schema, &entry.options)? {
            labels.push(format!("{}[{}]", entry.name, nested));
        }
    }
    Ok(labels)
}

/// Values for one level and its includes, recursively.
///
/// `record` may be `None` for an absent association, in which case every
/// column in this level's span (including nested includes) yields an empty
/// string, keeping the row aligned with the header.
fn project_values(
    record: Option<&dyn Record>,
    schema: &Schema,
    options: &ProjectionOptions,
) -> Result<Vec<String>, ExportError> {
    let spec = columns::resolve(schema, options)?;
    let mut values: Vec<String> = spec
        .columns
        .iter()
        .map(|column| match record {
            Some(r) => r.get(&column.key).to_string(),
            None => String::new(),
        })
        .collect();
    for entry in options.include.entries() {
        let assoc_schema = association_schema(schema, &entry.name)?;
        let related = record.and_then(|r| r.association(&entry.name));
        values.extend(project_values(related, &assoc_schema, &entry.options)?);
    }
    Ok(values)
}

fn association_schema(schema: &Schema, name: &str) -> Result<Schema, ExportError> {
    schema
        .association_schema(name)
        .ok_or_else(|| ExportError::UnknownAssociation {
            table: schema.table().to_string(),
            association: name.to_string(),
        })
}

//! Column selection resolution.
//!
//! Turns one level of [`ProjectionOptions`] plus a [`Schema`] into an
//! ordered list of `(column key, header label)` pairs. Resolution happens
//! before any record data is touched, so bad selections fail fast.

use crate::error::UnknownColumnError;
use crate::model::Schema;

use super::{Headers, ProjectionOptions};

/// One selected column: schema key plus the label shown in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedColumn {
    pub key: String,
    pub label: String,
}

/// Resolved, ordered column selection for one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Selected columns, in output order.
    pub columns: Vec<SelectedColumn>,

    /// Whether this level contributes a header row.
    pub emit_headers: bool,
}

impl ColumnSpec {
    /// Column keys, in output order.
    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    /// Header labels, in output order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}

/// Resolve the column selection for `schema` under `options`.
///
/// Precedence: explicit [`Headers::Names`] override `only`/`except`; `only`
/// wins over `except`; otherwise the full schema order. Every referenced
/// name must be a schema column.
pub fn resolve(
    schema: &Schema,
    options: &ProjectionOptions,
) -> Result<ColumnSpec, UnknownColumnError> {
    let keys = select_keys(schema, options)?;
    let columns = keys
        .into_iter()
        .map(|key| {
            let label = match &options.headers {
                Headers::Labels(labels) => labels.get(&key).cloned().unwrap_or_else(|| key.clone()),
                _ => key.clone(),
            };
            SelectedColumn { key, label }
        })
        .collect();
    Ok(ColumnSpec {
        columns,
        emit_headers: options.emit_headers(),
    })
}

fn select_keys(
    schema: &Schema,
    options: &ProjectionOptions,
) -> Result<Vec<String>, UnknownColumnError> {
    if let Headers::Names(names) = &options.headers {
        return checked_keys(schema, names);
    }
    if let Some(only) = &options.only {
        return checked_keys(schema, only);
    }
    if let Some(except) = &options.except {
        for name in except {
            ensure_known(schema, name)?;
        }
        return Ok(schema
            .fields()
            .iter()
            .map(|f| f.name.clone())
            .filter(|name| !except.iter().any(|excluded| excluded == name))
            .collect());
    }
    Ok(schema.field_names())
}

/// Validate every name against the schema, preserving the given order.
fn checked_keys(schema: &Schema, names: &[String]) -> Result<Vec<String>, UnknownColumnError> {
    names
        .iter()
        .map(|name| {
            ensure_known(schema, name)?;
            Ok(name.clone())
        })
        .collect()
}

fn ensure_known(schema: &Schema, name: &str) -> Result<(), UnknownColumnError> {
    if schema.lookup(name).is_none() {
        return Err(UnknownColumnError::new(schema.table(), name));
    }
    Ok(())
}

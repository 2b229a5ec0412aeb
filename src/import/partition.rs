//! Validation partitioning.
//!
//! Splits candidates into the insertable set and the failed set, preserving
//! candidate order within both. Raw value rows are validated through a
//! temporary instance built from their attributes, but the raw row itself is
//! what feeds SQL generation afterwards; the temporary instance only carries
//! the failure back to the caller.

use crate::model::{Field, Model, Value};

/// Partitioned model instances.
#[derive(Debug)]
pub struct PartitionedInstances<M> {
    /// Candidates to insert, in original order.
    pub insertable: Vec<M>,

    /// Candidates that failed their validity check, in original order.
    pub failed: Vec<M>,
}

/// Partitioned raw rows: insertable rows plus the temporary instances built
/// for the rows that failed validation.
#[derive(Debug)]
pub struct PartitionedRows<M> {
    pub insertable: Vec<Vec<Value>>,
    pub failed: Vec<M>,
}

/// Partition instances by [`Record::is_valid`](crate::model::Record::is_valid).
///
/// With `validate` off, every candidate is insertable and validity is never
/// consulted.
pub fn partition_instances<M: Model>(instances: Vec<M>, validate: bool) -> PartitionedInstances<M> {
    if !validate {
        return PartitionedInstances {
            insertable: instances,
            failed: Vec::new(),
        };
    }
    let mut insertable = Vec::with_capacity(instances.len());
    let mut failed = Vec::new();
    for instance in instances {
        if instance.is_valid() {
            insertable.push(instance);
        } else {
            failed.push(instance);
        }
    }
    if !failed.is_empty() {
        log::debug!("{} candidate(s) failed validation", failed.len());
    }
    PartitionedInstances { insertable, failed }
}

/// Partition raw rows by validating a temporary instance per row.
///
/// Rows and `columns` are assumed width-checked by normalization.
pub fn partition_rows<M: Model>(
    columns: &[Field],
    rows: Vec<Vec<Value>>,
    validate: bool,
) -> PartitionedRows<M> {
    if !validate {
        return PartitionedRows {
            insertable: rows,
            failed: Vec::new(),
        };
    }
    let mut insertable = Vec::with_capacity(rows.len());
    let mut failed = Vec::new();
    for row in rows {
        let attrs: Vec<(String, Value)> = columns
            .iter()
            .map(|column| column.name.clone())
            .zip(row.iter().cloned())
            .collect();
        let candidate = M::from_attributes(&attrs);
        if candidate.is_valid() {
            insertable.push(row);
        } else {
            failed.push(candidate);
        }
    }
    if !failed.is_empty() {
        log::debug!("{} row(s) failed validation", failed.len());
    }
    PartitionedRows { insertable, failed }
}

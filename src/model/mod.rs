//! Record abstraction shared by export and import.
//!
//! This module provides:
//! - `value`: Scalar [`Value`] and declared [`ColumnType`]
//! - [`Schema`]: Ordered column layout plus named associations
//! - [`Record`]: Object-safe instance capability (attributes, validity, links)
//! - [`Model`]: Type-level capability (static schema, attribute construction)
//!
//! Both halves of the crate speak only these interfaces: export walks
//! [`Record`] graphs, import consumes [`Model`] instances or raw value rows
//! checked against the model's schema.

pub mod value;

pub use value::{ColumnType, Value, TIMESTAMP_FORMAT};

// =============================================================================
// Schema
// =============================================================================

/// A single schema column: name plus declared SQL type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub column_type: ColumnType,
}

impl Field {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Deferred schema lookup for associations.
///
/// Thunks keep association graphs lazy, so mutually related record types
/// (for example a developer owning an address that points back at its
/// developer) can both be described without infinite recursion.
pub type SchemaThunk = fn() -> Schema;

/// Ordered column layout of one record type, plus its named associations.
///
/// Field declaration order is the canonical column order used whenever a
/// caller does not pick an explicit one.
#[derive(Debug, Clone)]
pub struct Schema {
    table: String,
    fields: Vec<Field>,
    associations: Vec<(String, SchemaThunk)>,
}

impl Schema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Append a column. Declaration order is preserved.
    pub fn field(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.fields.push(Field::new(name, column_type));
        self
    }

    /// Declare a named association resolved through `schema` on demand.
    pub fn association(mut self, name: impl Into<String>, schema: SchemaThunk) -> Self {
        self.associations.push((name.into(), schema));
        self
    }

    /// Target table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Column names in declaration order.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Look up a column by name.
    pub fn lookup(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Resolve a named association to its schema.
    pub fn association_schema(&self, name: &str) -> Option<Schema> {
        self.associations
            .iter()
            .find(|(assoc, _)| assoc == name)
            .map(|(_, thunk)| thunk())
    }
}

// =============================================================================
// Capability Traits
// =============================================================================

/// Instance-level record capability.
///
/// Object safe on purpose: association traversal hands back `&dyn Record`,
/// so heterogeneous record graphs project through one code path.
pub trait Record {
    /// Schema of this record's type.
    fn schema(&self) -> Schema;

    /// Attribute value by column name. Unknown names yield [`Value::Null`].
    fn get(&self, field: &str) -> Value;

    /// Validity check consulted by the import partitioner.
    fn is_valid(&self) -> bool;

    /// Resolve a named association to the related record, if any.
    fn association(&self, name: &str) -> Option<&dyn Record>;
}

/// Type-level record capability.
///
/// Extends [`Record`] with what collection-level operations need: a schema
/// without an instance in hand, and attribute-wise construction for
/// validating raw value rows. Construction never fails; [`Record::is_valid`]
/// on the result decides whether the candidate is insertable.
pub trait Model: Record + Sized {
    /// Schema shared by every instance of the type.
    fn model_schema() -> Schema;

    /// Build an instance from `(column, value)` pairs.
    fn from_attributes(attrs: &[(String, Value)]) -> Self;
}

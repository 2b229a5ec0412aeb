//! Export: declarative projection of records to CSV.
//!
//! This module provides:
//! - `columns`: Column selection resolution (`only` / `except` / headers)
//! - `project`: Record graphs to flat, ordered string rows
//! - `writer`: CSV emission for projections
//!
//! ## Usage Flow
//!
//! ```text
//! Records → columns::resolve → project::project_collection → writer::to_csv_string → CSV
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use rowset::{collection_to_csv, ProjectionOptions};
//!
//! let options = ProjectionOptions::new()
//!     .only(["id", "name"])
//!     .include("address");
//! let csv = collection_to_csv(&developers, &options)?;
//! ```

pub mod columns;
pub mod project;
pub mod writer;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::error::ExportResult;
use crate::model::{Model, Record};

// Re-exports for convenience
pub use columns::{resolve, ColumnSpec, SelectedColumn};
pub use project::{project_collection, project_record, Projection};
pub use writer::{to_csv_string, write_csv, CsvOptions};

// =============================================================================
// Header Control
// =============================================================================

/// Header behavior for one projection level.
///
/// Deserialization is untagged, so the accepted JSON shapes are `true`,
/// `false`, a list of names, or a map of renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Headers {
    /// `true` labels columns with their keys; `false` omits the header row
    /// entirely (data rows are still selected and ordered as usual).
    Toggle(bool),

    /// Explicit header names. The list IS the column selection and its
    /// order, overriding `only` and `except`; every name must be a schema
    /// column.
    Names(Vec<String>),

    /// Column-key to display-label renames. Renaming only: selection and
    /// order are untouched, unmapped columns keep their keys.
    Labels(HashMap<String, String>),
}

impl Headers {
    /// True for the default `Toggle(true)` state.
    pub fn is_default(&self) -> bool {
        matches!(self, Headers::Toggle(true))
    }
}

impl Default for Headers {
    fn default() -> Self {
        Headers::Toggle(true)
    }
}

// =============================================================================
// Association Includes
// =============================================================================

/// One include entry: association name plus the nested projection options
/// applied to the associated record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncludeEntry {
    pub name: String,
    pub options: ProjectionOptions,
}

/// Ordered association includes.
///
/// Declaration order is projection order: each entry's columns are appended
/// after the owning record's own columns, in this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Include {
    entries: Vec<IncludeEntry>,
}

impl Include {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an association projected with default options.
    pub fn association(self, name: impl Into<String>) -> Self {
        self.association_with(name, ProjectionOptions::default())
    }

    /// Append an association projected with explicit nested options.
    pub fn association_with(mut self, name: impl Into<String>, options: ProjectionOptions) -> Self {
        self.entries.push(IncludeEntry {
            name: name.into(),
            options,
        });
        self
    }

    pub fn entries(&self) -> &[IncludeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a map of association name to nested options.
impl Serialize for Include {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.options)?;
        }
        map.end()
    }
}

/// Accepts either a list of association names (default nested options) or a
/// map of name to nested options.
impl<'de> Deserialize<'de> for Include {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IncludeVisitor;

        impl<'de> Visitor<'de> for IncludeVisitor {
            type Value = Include;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of association names or a map of association options")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Include, A::Error> {
                let mut entries = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    entries.push(IncludeEntry {
                        name,
                        options: ProjectionOptions::default(),
                    });
                }
                Ok(Include { entries })
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Include, A::Error> {
                let mut entries = Vec::new();
                while let Some((name, options)) = map.next_entry::<String, ProjectionOptions>()? {
                    entries.push(IncludeEntry { name, options });
                }
                Ok(Include { entries })
            }
        }

        deserializer.deserialize_any(IncludeVisitor)
    }
}

// =============================================================================
// Projection Options
// =============================================================================

/// Options controlling one projection level.
///
/// Selection rules, in precedence order:
/// 1. [`Headers::Names`] wins outright and is both selection and order
/// 2. `only` selects exactly the listed columns, in list order
/// 3. `except` removes the listed columns, keeping schema order
/// 4. otherwise every schema column, in schema order
///
/// `only` and `except` are mutually exclusive by construction: setting one
/// clears the other. Every referenced name must be a schema column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Exact column selection, in list order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<String>>,

    /// Columns removed from the schema-ordered selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<String>>,

    /// Header behavior; see [`Headers`].
    #[serde(skip_serializing_if = "Headers::is_default")]
    pub headers: Headers,

    /// Nested association projections; see [`Include`].
    #[serde(skip_serializing_if = "Include::is_empty")]
    pub include: Include,
}

impl ProjectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select exactly these columns, in this order. Clears `except`.
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(names.into_iter().map(Into::into).collect());
        self.except = None;
        self
    }

    /// Remove these columns from the schema-ordered selection. Clears `only`.
    pub fn except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = Some(names.into_iter().map(Into::into).collect());
        self.only = None;
        self
    }

    /// Replace the header behavior.
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Omit the header row.
    pub fn without_headers(self) -> Self {
        self.headers(Headers::Toggle(false))
    }

    /// Rename one column's header label, switching to [`Headers::Labels`]
    /// if another header mode was set.
    pub fn rename(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        let (key, label) = (key.into(), label.into());
        match &mut self.headers {
            Headers::Labels(labels) => {
                labels.insert(key, label);
            }
            _ => {
                self.headers = Headers::Labels(HashMap::from([(key, label)]));
            }
        }
        self
    }

    /// Append an association include with default nested options.
    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.include = self.include.association(name);
        self
    }

    /// Append an association include with explicit nested options.
    pub fn include_with(mut self, name: impl Into<String>, options: ProjectionOptions) -> Self {
        self.include = self.include.association_with(name, options);
        self
    }

    /// Whether this level emits a header row.
    pub fn emit_headers(&self) -> bool {
        !matches!(self.headers, Headers::Toggle(false))
    }

    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize options to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Convenience API
// =============================================================================

/// Project a single record and emit it as CSV text with default CSV options.
pub fn record_to_csv(record: &dyn Record, options: &ProjectionOptions) -> ExportResult<String> {
    let projection = project::project_record(record, options)?;
    Ok(writer::to_csv_string(&projection, &CsvOptions::default())?)
}

/// Project a collection and emit it as CSV text with default CSV options.
///
/// Headers appear once, before the first data row. An empty collection
/// yields a header-only document (or an empty one when headers are off).
pub fn collection_to_csv<M: Model>(
    records: &[M],
    options: &ProjectionOptions,
) -> ExportResult<String> {
    let projection = project::project_collection(records, options)?;
    Ok(writer::to_csv_string(&projection, &CsvOptions::default())?)
}

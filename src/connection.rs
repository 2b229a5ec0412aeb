//! Database connection capability.
//!
//! [`Connection`] is the only seam between this crate and a real database:
//! import builds complete `INSERT` statements as text and hands them to
//! [`Connection::execute`]. Quoting has default ANSI implementations so a
//! driver only overrides what its dialect does differently.

use crate::error::ExecutionError;
use crate::model::{ColumnType, Value, TIMESTAMP_FORMAT};

/// Minimal database capability consumed by bulk import.
///
/// `execute` is the one required method. The quoting methods default to the
/// ANSI rules in [`quote_identifier`] and [`quote_value`]; dialects with
/// different conventions (backtick identifiers, `1`/`0` booleans) override
/// them.
pub trait Connection {
    /// Execute a single SQL statement.
    ///
    /// Errors are fatal to the import that issued the statement: the caller
    /// stops immediately and propagates the error.
    fn execute(&mut self, sql: &str) -> Result<(), ExecutionError>;

    /// Quote a table or column identifier.
    fn quote_identifier(&self, name: &str) -> String {
        quote_identifier(name)
    }

    /// Quote a value as a SQL literal, honoring the column's declared type.
    fn quote_value(&self, value: &Value, column_type: ColumnType) -> String {
        quote_value(value, column_type)
    }
}

// =============================================================================
// ANSI Quoting
// =============================================================================

/// ANSI identifier quoting: double quotes, embedded quotes doubled.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// ANSI literal quoting.
///
/// - `Null` becomes `NULL` regardless of column type
/// - numeric values in numeric columns are emitted bare, as are string
///   values that parse as finite numbers
/// - booleans in boolean columns become the `TRUE`/`FALSE` keywords
/// - timestamps are formatted as quoted `YYYY-MM-DD HH:MM:SS` in UTC
/// - everything else is single-quoted text with embedded quotes doubled
///
/// Non-finite floats have no SQL literal and are stored as `NULL`.
pub fn quote_value(value: &Value, column_type: ColumnType) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) if column_type == ColumnType::Boolean => {
            if *b { "TRUE" } else { "FALSE" }.to_string()
        }
        Value::Int(i) if column_type.is_numeric() => i.to_string(),
        Value::Float(v) if column_type.is_numeric() => {
            if v.is_finite() {
                v.to_string()
            } else {
                log::warn!("non-finite float {v} quoted as NULL");
                "NULL".to_string()
            }
        }
        Value::Text(s) if column_type.is_numeric() && is_numeric_literal(s) => {
            s.trim().to_string()
        }
        Value::Timestamp(t) => quote_text(&t.format(TIMESTAMP_FORMAT).to_string()),
        other => quote_text(&other.to_string()),
    }
}

/// Single-quote a text literal, doubling embedded quotes.
fn quote_text(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// True when `s` can be emitted bare inside a numeric column.
fn is_numeric_literal(s: &str) -> bool {
    s.trim().parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

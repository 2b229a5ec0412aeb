//! CSV emission for projections.
//!
//! A [`Projection`] is already flat, ordered strings, so writing is a thin
//! layer over the `csv` crate: quoting and escaping follow its defaults
//! (RFC 4180 style), only the delimiter is configurable here.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::CsvResult;

use super::project::Projection;

/// Options for CSV text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter, a single byte.
    pub delimiter: u8,
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Write a projection as CSV to any [`Write`] sink.
///
/// The header row (when present) comes first, then data rows in order.
pub fn write_csv<W: Write>(
    projection: &Projection,
    writer: W,
    options: &CsvOptions,
) -> CsvResult<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);
    if let Some(headers) = &projection.headers {
        out.write_record(headers)?;
    }
    for row in &projection.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Render a projection as a CSV string.
pub fn to_csv_string(projection: &Projection, options: &CsvOptions) -> CsvResult<String> {
    let mut buf = Vec::new();
    write_csv(projection, &mut buf, options)?;
    Ok(String::from_utf8(buf)?)
}

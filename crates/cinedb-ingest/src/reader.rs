//! Record reader: one CSV source file to an in-memory row set

use crate::error::{IngestError, Result};
use cinedb_common::Table;
use csv::StringRecord;
use std::path::Path;
use tracing::info;

/// The full row set of one source file, header included at row 0.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub table: Table,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Number of data rows, excluding the header.
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// Read one source file into memory.
///
/// Parsing is strict: a ragged row or an unopenable file is a read error,
/// never a partial result. The file handle is released before return.
pub fn read_table(table: Table, path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_path(path)
        .map_err(|source| IngestError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record);
    }

    // The header row fixes the column contract for the whole file
    if let Some(header) = rows.first() {
        if header.len() != table.column_count() {
            return Err(IngestError::SourceShape {
                table,
                path: path.to_path_buf(),
                found: header.len(),
                expected: table.column_count(),
            });
        }
    }

    let raw = RawTable { table, rows };
    info!(
        table = %table,
        rows = raw.data_row_count(),
        path = %path.display(),
        "Read source file"
    );
    Ok(raw)
}

//! Error types for the CineDB load pipeline
//!
//! Every error here is fatal to the run: the pipeline either fully replaces
//! the store or stops with nothing committed beyond already-completed
//! tables. Recovery is a rerun from clean source files.

use cinedb_common::Table;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors produced by the load pipeline
#[derive(Error, Debug)]
pub enum IngestError {
    /// A source file could not be opened or its CSV structure is malformed
    #[error("Failed to read source file '{}': {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A source file's column count does not match its destination table
    #[error(
        "Source file '{}' for table '{table}' has {found} columns, expected {expected}",
        .path.display()
    )]
    SourceShape {
        table: Table,
        path: PathBuf,
        found: usize,
        expected: usize,
    },

    /// One or more concurrent readers failed; all failures are retained
    #[error("Failed to read source files: {0}")]
    SourcesFailed(SourceFailures),

    /// Schema DDL execution failed; aborts before any load is attempted
    #[error("Schema creation failed: {0}")]
    Schema(#[source] rusqlite::Error),

    /// A row failed to insert; the table's transaction was rolled back.
    /// Row numbers are 1-based and include the header row.
    #[error("Failed to insert into '{table}' at row {row}: {source}")]
    TableLoad {
        table: Table,
        row: usize,
        #[source]
        source: rusqlite::Error,
    },

    /// The load configuration names no source for a required table
    #[error("No source file configured for table '{0}'")]
    MissingSource(Table),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system operation failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// A reader task panicked or was cancelled
    #[error("Reader task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Every reader failure from one load attempt, keyed by destination table.
///
/// The map keeps failures sorted and complete: concurrent readers report
/// through their own join handles, so no failure can overwrite another.
#[derive(Debug)]
pub struct SourceFailures(pub BTreeMap<Table, IngestError>);

impl SourceFailures {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SourceFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failure(s)", self.0.len())?;
        for (table, err) in &self.0 {
            write!(f, "; {}: {}", table, err)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_source_failures_display_lists_every_table() {
        let mut failures = BTreeMap::new();
        failures.insert(
            Table::Movies,
            IngestError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        );
        failures.insert(
            Table::Roles,
            IngestError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone too")),
        );

        let err = IngestError::SourcesFailed(SourceFailures(failures));
        let message = err.to_string();

        assert!(message.contains("2 failure(s)"));
        assert!(message.contains("movies"));
        assert!(message.contains("roles"));
    }

    #[test]
    fn test_table_load_error_names_table_and_row() {
        let err = IngestError::TableLoad {
            table: Table::Genres,
            row: 7,
            source: rusqlite::Error::InvalidQuery,
        };

        let message = err.to_string();
        assert!(message.contains("genres"));
        assert!(message.contains("row 7"));
    }
}

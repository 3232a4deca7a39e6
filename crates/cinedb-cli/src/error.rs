//! Error types for the CineDB CLI
//!
//! Messages are user-facing: they say what failed and what to run next.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The load pipeline failed
    #[error(transparent)]
    Ingest(#[from] cinedb_ingest::IngestError),

    /// The store file does not exist yet
    #[error("Store not found at '{}'. Run 'cinedb load' first to build it.", .0.display())]
    StoreMissing(PathBuf),

    /// A named query was requested that the registry does not contain
    #[error("Unknown query: '{0}'. Use 'cinedb query --list' to see the available queries.")]
    UnknownQuery(String),

    /// Query preparation or execution failed
    #[error("Query failed: {source}\nSQL: {sql}")]
    Query {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The query subcommand was invoked with nothing to do
    #[error("No query provided. Use --list, --name <NAME>, or --sql <SQL>.")]
    NoQueryGiven,

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Result serialization failed
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// CSV output failed
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

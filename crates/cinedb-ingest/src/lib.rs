//! CineDB Ingest Library
//!
//! The bulk-load pipeline for the CineDB movie store: concurrent multi-file
//! CSV ingestion, tolerant field coercion, and transactional bulk insertion
//! into four related SQLite tables.
//!
//! # Pipeline
//!
//! 1. **Schema** — drop and recreate the four tables and their indexes
//! 2. **Read** — parse all source files concurrently, one task per file
//! 3. **Load** — insert each table in one transaction, sequentially, in
//!    referential order (movies and actors before genres and roles)
//!
//! Every run is a full rebuild; there is no incremental mode.
//!
//! # Example
//!
//! ```no_run
//! use cinedb_ingest::LoadConfig;
//!
//! # #[tokio::main]
//! # async fn main() -> cinedb_ingest::Result<()> {
//! let config = LoadConfig::from_data_dir("cinedb.db", "./data");
//! let report = cinedb_ingest::pipeline::run(&config).await?;
//! println!("loaded {} rows", report.total_rows());
//! # Ok(())
//! # }
//! ```

pub mod coerce;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reader;
pub mod schema;

// Re-export commonly used types
pub use error::{IngestError, Result};
pub use pipeline::{LoadConfig, LoadReport, Source};

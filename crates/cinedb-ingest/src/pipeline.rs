//! End-to-end load pipeline
//!
//! Ties the stages together: full-rebuild schema, concurrent source reads
//! (one blocking task per file, joined before any write), then sequential
//! table loads in referential order. Reader results travel back through
//! their own join handles, so a failing reader can never clobber another's
//! error.

use crate::error::{IngestError, Result, SourceFailures};
use crate::loader;
use crate::reader::{self, RawTable};
use crate::schema;
use cinedb_common::types::LOAD_ORDER;
use cinedb_common::Table;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::{info, warn};

/// One (source file, destination table) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub table: Table,
    pub path: PathBuf,
}

/// Configuration for one load run: where the store lives and which source
/// files feed which tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Path of the SQLite database file (replaced wholesale on each run)
    pub database: PathBuf,
    /// Source files, one per destination table
    pub sources: Vec<Source>,
}

impl LoadConfig {
    /// The standard four-file layout: `movies.csv`, `actors.csv`,
    /// `genres.csv`, and `roles.csv` under one data directory.
    pub fn from_data_dir(database: impl Into<PathBuf>, data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            database: database.into(),
            sources: LOAD_ORDER
                .iter()
                .map(|&table| Source {
                    table,
                    path: dir.join(table.source_file()),
                })
                .collect(),
        }
    }
}

/// All source tables read into memory, keyed by destination table.
pub type TableData = BTreeMap<Table, RawTable>;

/// Summary of a completed load run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LoadReport {
    /// Data rows inserted per table
    pub rows_loaded: BTreeMap<Table, usize>,
    /// Numeric fields that defaulted to zero across all tables
    pub defaulted_fields: u64,
}

impl LoadReport {
    pub fn total_rows(&self) -> usize {
        self.rows_loaded.values().sum()
    }
}

/// Read every configured source concurrently and aggregate the results.
///
/// All failures are collected: if three of four files are unreadable, the
/// returned error names all three. Nothing proceeds to the write phase
/// unless every read succeeded.
pub async fn read_all_sources(config: &LoadConfig) -> Result<TableData> {
    let mut set = JoinSet::new();
    for source in &config.sources {
        let Source { table, path } = source.clone();
        set.spawn_blocking(move || (table, reader::read_table(table, &path)));
    }

    let mut tables = TableData::new();
    let mut failures = BTreeMap::new();
    while let Some(joined) = set.join_next().await {
        let (table, result) = joined?;
        match result {
            Ok(raw) => {
                tables.insert(table, raw);
            }
            Err(err) => {
                failures.insert(table, err);
            }
        }
    }

    if !failures.is_empty() {
        return Err(IngestError::SourcesFailed(SourceFailures(failures)));
    }
    Ok(tables)
}

/// Load every table sequentially in referential order, failing fast.
///
/// Tables already committed stay committed; recovery from a mid-run
/// failure is a full rerun.
pub fn load_all(conn: &mut Connection, tables: &TableData) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    for table in LOAD_ORDER {
        let raw = tables
            .get(&table)
            .ok_or(IngestError::MissingSource(table))?;
        let loaded = loader::load_table(conn, raw)?;
        report.rows_loaded.insert(table, loaded.rows);
        report.defaulted_fields += loaded.defaulted_fields;
    }
    Ok(report)
}

/// Run the whole pipeline: full-rebuild schema, concurrent reads,
/// sequential loads.
pub async fn run(config: &LoadConfig) -> Result<LoadReport> {
    if config.database.exists() {
        info!(database = %config.database.display(), "Removing existing database");
        std::fs::remove_file(&config.database)?;
    }

    let mut conn = Connection::open(&config.database)?;

    info!("Creating schema");
    schema::apply(&conn)?;

    info!("Reading source files");
    let tables = read_all_sources(config).await?;

    info!("Writing to SQLite");
    let report = load_all(&mut conn, &tables)?;

    if report.defaulted_fields > 0 {
        warn!(
            defaulted = report.defaulted_fields,
            "Load completed with defaulted numeric fields"
        );
    }
    info!(rows = report.total_rows(), "Load complete");
    Ok(report)
}

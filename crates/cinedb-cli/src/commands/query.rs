//! `cinedb query` command implementation

use crate::error::{CliError, Result};
use crate::queries;
use crate::render;
use crate::OutputFormat;
use colored::Colorize;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::{debug, info};

/// Dispatch the query command: list the registry, run a named query, or run
/// ad-hoc SQL against the store.
pub fn run(
    db: &Path,
    list: bool,
    name: Option<&str>,
    sql: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    if list {
        println!("{}", "Available queries:".bold());
        for query in queries::QUERIES {
            println!("  {:<22} {}", query.name.cyan(), query.description);
        }
        return Ok(());
    }

    let sql_text = match (sql, name) {
        (Some(sql), _) => sql,
        (None, Some(name)) => {
            queries::find(name)
                .ok_or_else(|| CliError::UnknownQuery(name.to_string()))?
                .sql
        }
        (None, None) => return Err(CliError::NoQueryGiven),
    };

    if !db.exists() {
        return Err(CliError::StoreMissing(db.to_path_buf()));
    }

    info!(db = %db.display(), "Running query");
    debug!(sql = sql_text, "Executing SQL");

    // The query layer only reads; opening read-only keeps it honest
    let conn = Connection::open_with_flags(
        db,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    let results = render::execute(&conn, sql_text)?;

    let rendered = match format {
        OutputFormat::Table => render::format_table(&results),
        OutputFormat::Json => render::format_json(&results)?,
        OutputFormat::Csv => render::format_csv(&results)?,
    };
    print!("{rendered}");

    Ok(())
}

//! Transactional table loader
//!
//! One loader invocation per destination table: a single transaction, one
//! prepared insert reused for every row, the header row skipped, numeric
//! fields coerced tolerantly. Any row failure rolls back the whole table
//! and reports the 1-based row number (header counted, matching the source
//! extracts' line numbering).

use crate::coerce::{self, CoerceStats};
use crate::error::{IngestError, Result};
use crate::reader::RawTable;
use cinedb_common::types::{Actor, Genre, Movie, Role};
use cinedb_common::Table;
use csv::StringRecord;
use rusqlite::{params, Connection, Statement};
use tracing::{info, warn};

/// Outcome of loading one table.
#[derive(Debug, Clone, Copy)]
pub struct LoadedTable {
    /// Data rows inserted (header excluded)
    pub rows: usize,
    /// Numeric fields that defaulted to zero during coercion
    pub defaulted_fields: u64,
}

fn insert_sql(table: Table) -> &'static str {
    match table {
        Table::Movies => "INSERT INTO movies (movie_id, name, year, rank) VALUES (?1, ?2, ?3, ?4)",
        Table::Actors => {
            "INSERT INTO actors (actor_id, first_name, last_name, gender) VALUES (?1, ?2, ?3, ?4)"
        }
        Table::Genres => "INSERT INTO genres (movie_id, genre) VALUES (?1, ?2)",
        Table::Roles => "INSERT INTO roles (actor_id, movie_id, role) VALUES (?1, ?2, ?3)",
    }
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

fn insert_row(
    stmt: &mut Statement<'_>,
    table: Table,
    record: &StringRecord,
    stats: &CoerceStats,
) -> rusqlite::Result<()> {
    match table {
        Table::Movies => {
            let movie = Movie {
                movie_id: coerce::int_or_zero(field(record, 0), stats),
                name: field(record, 1).to_string(),
                year: coerce::int_or_zero(field(record, 2), stats),
                rank: coerce::float_or_zero(field(record, 3), stats),
            };
            stmt.execute(params![movie.movie_id, movie.name, movie.year, movie.rank])?;
        }
        Table::Actors => {
            let actor = Actor {
                actor_id: coerce::int_or_zero(field(record, 0), stats),
                first_name: field(record, 1).to_string(),
                last_name: field(record, 2).to_string(),
                gender: field(record, 3).to_string(),
            };
            stmt.execute(params![
                actor.actor_id,
                actor.first_name,
                actor.last_name,
                actor.gender
            ])?;
        }
        Table::Genres => {
            let genre = Genre {
                movie_id: coerce::int_or_zero(field(record, 0), stats),
                genre: field(record, 1).to_string(),
            };
            stmt.execute(params![genre.movie_id, genre.genre])?;
        }
        Table::Roles => {
            let role = Role {
                actor_id: coerce::int_or_zero(field(record, 0), stats),
                movie_id: coerce::int_or_zero(field(record, 1), stats),
                role: field(record, 2).to_string(),
            };
            stmt.execute(params![role.actor_id, role.movie_id, role.role])?;
        }
    }
    Ok(())
}

/// Load one table's full row set inside a single transaction.
///
/// Commits only if every data row inserts; the transaction rolls back on
/// drop otherwise, so a table is either fully loaded or untouched.
pub fn load_table(conn: &mut Connection, raw: &RawTable) -> Result<LoadedTable> {
    let table = raw.table;
    let stats = CoerceStats::new();

    let tx = conn.transaction()?;
    let rows = {
        let mut stmt = tx.prepare(insert_sql(table))?;
        let mut rows = 0usize;

        for (i, record) in raw.rows.iter().enumerate() {
            if i == 0 {
                // header row
                continue;
            }
            insert_row(&mut stmt, table, record, &stats).map_err(|source| {
                IngestError::TableLoad {
                    table,
                    row: i + 1,
                    source,
                }
            })?;
            rows += 1;
        }
        rows
    };
    tx.commit()?;

    let defaulted_fields = stats.defaulted();
    if defaulted_fields > 0 {
        warn!(
            table = %table,
            defaulted = defaulted_fields,
            "Numeric fields failed to parse and defaulted to zero"
        );
    }
    info!(table = %table, rows, "Table loaded");

    Ok(LoadedTable {
        rows,
        defaulted_fields,
    })
}

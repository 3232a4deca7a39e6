//! Query execution and result rendering
//!
//! Runs arbitrary SQL against the store, captures every value as display
//! text, and renders the result set as an aligned table, JSON, or CSV.

use crate::error::{CliError, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

/// One query's result set with every value stringified for display.
#[derive(Debug, Clone, Default)]
pub struct QueryResults {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Execute SQL and collect the full result set into memory.
pub fn execute(conn: &Connection, sql: &str) -> Result<QueryResults> {
    let mut stmt = conn.prepare(sql).map_err(|source| CliError::Query {
        sql: sql.to_string(),
        source,
    })?;

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let column_count = columns.len();

    let mut out = Vec::new();
    let mut rows = stmt.query([]).map_err(|source| CliError::Query {
        sql: sql.to_string(),
        source,
    })?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(column_count);
        for i in 0..column_count {
            cells.push(value_to_string(row.get_ref(i)?));
        }
        out.push(cells);
    }

    Ok(QueryResults {
        columns,
        rows: out,
    })
}

/// Convert a SQLite value to display text.
fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Format results as a bordered, column-aligned text table.
pub fn format_table(results: &QueryResults) -> String {
    use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(&results.columns);

    for row in &results.rows {
        table.add_row(row);
    }

    format!("{}\n", table)
}

/// Format results as a JSON array of row objects.
pub fn format_json(results: &QueryResults) -> Result<String> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = results
        .rows
        .iter()
        .map(|row| {
            results
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| (col.clone(), serde_json::Value::String(cell.clone())))
                .collect()
        })
        .collect();

    let mut text = serde_json::to_string_pretty(&rows)?;
    text.push('\n');
    Ok(text)
}

/// Format results as CSV, header row first.
pub fn format_csv(results: &QueryResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&results.columns)?;
    for row in &results.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Io(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

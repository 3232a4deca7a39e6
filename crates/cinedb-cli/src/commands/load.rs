//! `cinedb load` command implementation

use crate::error::Result;
use cinedb_ingest::{pipeline, LoadConfig};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Run the full-rebuild load: schema, concurrent reads, sequential table
/// loads. Prior store contents are discarded.
pub async fn run(db: PathBuf, data_dir: PathBuf) -> Result<()> {
    info!(db = %db.display(), data_dir = %data_dir.display(), "Running load command");

    let config = LoadConfig::from_data_dir(db, data_dir);
    let report = pipeline::run(&config).await?;

    println!("{}", "Load complete".green().bold());
    for (table, rows) in &report.rows_loaded {
        println!("  {:<8} {:>10} rows", table.to_string(), rows);
    }
    if report.defaulted_fields > 0 {
        println!(
            "  {} numeric field(s) failed to parse and defaulted to zero",
            report.defaulted_fields.to_string().yellow()
        );
    }

    Ok(())
}

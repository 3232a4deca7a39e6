//! CineDB CLI Library
//!
//! Command-line front-end for the CineDB movie store:
//!
//! - **Load**: full-rebuild bulk load from the CSV extracts (`cinedb load`)
//! - **Query**: predefined analytical reports or ad-hoc SQL
//!   (`cinedb query --list/--name/--sql`)

pub mod commands;
pub mod error;
pub mod queries;
pub mod render;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CineDB - movie dataset loader and query tool
#[derive(Parser, Debug)]
#[command(name = "cinedb")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the SQLite database file
    #[arg(long, env = "CINEDB_DB", default_value = "cinedb.db", global = true)]
    pub db: PathBuf,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the store from the CSV extracts (destroys prior contents)
    Load {
        /// Directory containing movies.csv, actors.csv, genres.csv, roles.csv
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Run analytical queries against the store
    Query {
        /// List the predefined queries
        #[arg(short, long)]
        list: bool,

        /// Run a predefined query by name
        #[arg(short, long)]
        name: Option<String>,

        /// Run an ad-hoc SQL query
        #[arg(short, long)]
        sql: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Query output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered, column-aligned text table
    Table,
    /// Array of row objects
    Json,
    /// Comma-separated values with a header row
    Csv,
}

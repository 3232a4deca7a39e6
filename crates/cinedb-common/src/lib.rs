//! CineDB Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types and utilities for the CineDB workspace.
//!
//! # Overview
//!
//! This crate provides the functionality used across all CineDB members:
//!
//! - **Logging**: Centralized tracing configuration and initialization
//! - **Types**: The movie-domain row types and table identities

pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::Table;

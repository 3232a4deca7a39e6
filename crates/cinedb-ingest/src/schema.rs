//! SQLite schema for the movie store

use crate::error::{IngestError, Result};
use rusqlite::Connection;

/// Full-rebuild DDL: drops the four tables (dependents before their
/// parents) and recreates them with primary keys, foreign-key declarations,
/// and the secondary indexes used by the analytical joins.
///
/// Foreign keys are declared but not enforced during bulk load; the loader
/// guarantees referential order instead.
pub const SCHEMA: &str = r#"
DROP TABLE IF EXISTS roles;
DROP TABLE IF EXISTS genres;
DROP TABLE IF EXISTS actors;
DROP TABLE IF EXISTS movies;

CREATE TABLE movies (
    movie_id      INTEGER PRIMARY KEY,
    name          TEXT NOT NULL,
    year          INTEGER,
    rank          REAL
);

CREATE TABLE actors (
    actor_id     INTEGER PRIMARY KEY,
    first_name   TEXT,
    last_name    TEXT,
    gender       TEXT
);

CREATE TABLE genres (
    movie_id    INTEGER,
    genre       TEXT,
    FOREIGN KEY (movie_id) REFERENCES movies(movie_id)
);

CREATE INDEX idx_genres_movie_id ON genres(movie_id);

CREATE TABLE roles (
    actor_id    INTEGER,
    movie_id    INTEGER,
    role        TEXT,
    FOREIGN KEY (actor_id) REFERENCES actors(actor_id),
    FOREIGN KEY (movie_id) REFERENCES movies(movie_id)
);

CREATE INDEX idx_roles_actor_id ON roles(actor_id);
CREATE INDEX idx_roles_movie_id ON roles(movie_id);
"#;

/// Apply the schema to an open connection.
///
/// Destructive: any prior contents of the four tables are discarded.
pub fn apply(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA).map_err(IngestError::Schema)
}

//! Common types used across CineDB

use serde::{Deserialize, Serialize};

/// Identifies one of the four destination tables.
///
/// The variants are ordered by referential dependency: movies and actors
/// carry the primary keys that genres and roles reference, so they must be
/// loaded first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Movies,
    Actors,
    Genres,
    Roles,
}

/// Referential load order: parent tables before the tables that reference
/// them.
pub const LOAD_ORDER: [Table; 4] = [Table::Movies, Table::Actors, Table::Genres, Table::Roles];

impl Table {
    /// Destination table name in the store.
    pub fn name(self) -> &'static str {
        match self {
            Table::Movies => "movies",
            Table::Actors => "actors",
            Table::Genres => "genres",
            Table::Roles => "roles",
        }
    }

    /// Conventional source file name for this table's CSV extract.
    pub fn source_file(self) -> &'static str {
        match self {
            Table::Movies => "movies.csv",
            Table::Actors => "actors.csv",
            Table::Genres => "genres.csv",
            Table::Roles => "roles.csv",
        }
    }

    /// Number of columns in the source extract (and destination table).
    pub fn column_count(self) -> usize {
        match self {
            Table::Movies => 4,
            Table::Actors => 4,
            Table::Genres => 2,
            Table::Roles => 3,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A movie row: source-assigned integer key, title, release year, and
/// floating-point rating. Year and rank may be zero when the extract left
/// them blank or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i64,
    pub name: String,
    pub year: i64,
    pub rank: f64,
}

/// An actor row. `gender` is the single-character code from the extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
}

/// A movie-to-genre association. References `Movie` by id; the store
/// declares the foreign key but does not validate it during bulk load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub movie_id: i64,
    pub genre: String,
}

/// A cast-role association between an actor and a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub actor_id: i64,
    pub movie_id: i64,
    pub role: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_order_parents_first() {
        let genres_pos = LOAD_ORDER.iter().position(|t| *t == Table::Genres).unwrap();
        let roles_pos = LOAD_ORDER.iter().position(|t| *t == Table::Roles).unwrap();
        let movies_pos = LOAD_ORDER.iter().position(|t| *t == Table::Movies).unwrap();
        let actors_pos = LOAD_ORDER.iter().position(|t| *t == Table::Actors).unwrap();

        assert!(movies_pos < genres_pos);
        assert!(movies_pos < roles_pos);
        assert!(actors_pos < roles_pos);
    }

    #[test]
    fn test_table_names() {
        assert_eq!(Table::Movies.name(), "movies");
        assert_eq!(Table::Roles.source_file(), "roles.csv");
        assert_eq!(Table::Genres.column_count(), 2);
        assert_eq!(Table::Actors.to_string(), "actors");
    }
}

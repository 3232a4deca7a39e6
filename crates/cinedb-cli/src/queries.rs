//! Predefined analytical queries
//!
//! A read-only registry of the named reports the CLI exposes. Each entry is
//! a fixed SQL string with a human-readable description; lookup is by name.

/// One predefined report.
#[derive(Debug, Clone, Copy)]
pub struct NamedQuery {
    pub name: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

/// The full query catalog, in listing order.
pub const QUERIES: &[NamedQuery] = &[
    NamedQuery {
        name: "avg-genres",
        description: "Highest rated genres",
        sql: r#"
            SELECT g.genre, COUNT(*) AS movie_count, ROUND(AVG(m.rank), 2) AS avg_rank
            FROM genres g
            JOIN movies m ON g.movie_id = m.movie_id
            GROUP BY g.genre
            ORDER BY avg_rank DESC;
        "#,
    },
    NamedQuery {
        name: "top-actors",
        description: "Actors with highest avg-rated movies (min 3 movies)",
        sql: r#"
            SELECT a.first_name || ' ' || a.last_name AS actor_name,
            COUNT(*) AS movie_count,
            ROUND(AVG(m.rank), 2) AS avg_rank
            FROM actors a
            JOIN roles r ON a.actor_id = r.actor_id
            JOIN movies m ON r.movie_id = m.movie_id
            GROUP BY a.actor_id
            HAVING movie_count >= 3
            ORDER BY avg_rank DESC
            LIMIT 20;
        "#,
    },
    NamedQuery {
        name: "co-stars",
        description: "Most frequent actor pairs",
        sql: r#"
            SELECT a1.first_name || ' ' || a1.last_name AS actor1,
            a2.first_name || ' ' || a2.last_name AS actor2,
            COUNT(*) AS shared_movies
            FROM roles r1
            JOIN roles r2 ON r1.movie_id = r2.movie_id AND r1.actor_id < r2.actor_id
            JOIN actors a1 ON a1.actor_id = r1.actor_id
            JOIN actors a2 ON a2.actor_id = r2.actor_id
            GROUP BY actor1, actor2
            ORDER BY shared_movies DESC
            LIMIT 20;
        "#,
    },
    NamedQuery {
        name: "above-genre-average",
        description: "Movies rated above their genre average",
        sql: r#"
            WITH genre_avg AS (
                SELECT genre, AVG(rank) AS avg_rank
                FROM genres JOIN movies USING(movie_id)
                GROUP BY genre
            )
            SELECT m.name, g.genre, m.rank, ROUND(ga.avg_rank, 2) AS genre_avg
            FROM movies m
            JOIN genres g ON m.movie_id = g.movie_id
            JOIN genre_avg ga ON g.genre = ga.genre
            WHERE m.rank > ga.avg_rank
            ORDER BY (m.rank - ga.avg_rank) DESC
            LIMIT 30;
        "#,
    },
];

/// Look up a predefined query by name.
pub fn find(name: &str) -> Option<&'static NamedQuery> {
    QUERIES.iter().find(|q| q.name == name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::render;
    use rusqlite::Connection;

    fn test_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        cinedb_ingest::schema::apply(&conn).unwrap();

        conn.execute_batch(
            r#"
            INSERT INTO movies VALUES (1, 'Test Movie', 2000, 8.0);
            INSERT INTO movies VALUES (2, 'Bad Movie', 2001, 3.0);
            INSERT INTO actors VALUES (10, 'Jane', 'Doe', 'F');
            INSERT INTO actors VALUES (20, 'John', 'Smith', 'M');
            INSERT INTO genres VALUES (1, 'Drama');
            INSERT INTO genres VALUES (2, 'Comedy');
            INSERT INTO roles VALUES (10, 1, 'Lead');
            INSERT INTO roles VALUES (20, 2, 'Sidekick');
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("avg-genres").is_some());
        assert!(find("co-stars").is_some());
        assert!(find("no-such-query").is_none());
    }

    #[test]
    fn test_every_predefined_query_executes() {
        let conn = test_store();
        for query in QUERIES {
            render::execute(&conn, query.sql)
                .unwrap_or_else(|e| panic!("query '{}' failed: {e}", query.name));
        }
    }

    #[test]
    fn test_avg_genres_orders_descending_by_rank() {
        let conn = test_store();
        let results = render::execute(&conn, find("avg-genres").unwrap().sql).unwrap();

        assert_eq!(results.rows.len(), 2);
        assert_eq!(results.rows[0][0], "Drama");
        assert_eq!(results.rows[1][0], "Comedy");
    }
}

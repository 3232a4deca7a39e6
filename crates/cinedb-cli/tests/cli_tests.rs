//! End-to-end tests for the cinedb binary
//!
//! These drive the compiled CLI against real files in scratch directories:
//! load a small dataset, then query it back.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_standard_sources(dir: &std::path::Path) {
    std::fs::write(
        dir.join("movies.csv"),
        "movie_id,name,year,rank\n1,Test Movie,2000,7.5\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("actors.csv"),
        "actor_id,first_name,last_name,gender\n10,Jane,Doe,F\n",
    )
    .unwrap();
    std::fs::write(dir.join("genres.csv"), "movie_id,genre\n1,Drama\n").unwrap();
    std::fs::write(dir.join("roles.csv"), "actor_id,movie_id,role\n10,1,Lead\n").unwrap();
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("cinedb").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("load"))
        .stdout(predicate::str::contains("query"));
}

#[test]
fn test_query_list_shows_the_registry() {
    let mut cmd = Command::cargo_bin("cinedb").unwrap();
    cmd.arg("query").arg("--list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("avg-genres"))
        .stdout(predicate::str::contains("top-actors"))
        .stdout(predicate::str::contains("co-stars"))
        .stdout(predicate::str::contains("above-genre-average"));
}

#[test]
fn test_load_then_query_roundtrip() {
    let dir = TempDir::new().unwrap();
    write_standard_sources(dir.path());
    let db = dir.path().join("cinedb.db");

    let mut load = Command::cargo_bin("cinedb").unwrap();
    load.arg("load")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--db")
        .arg(&db);

    load.assert()
        .success()
        .stdout(predicate::str::contains("Load complete"))
        .stdout(predicate::str::contains("movies"));

    let mut query = Command::cargo_bin("cinedb").unwrap();
    query
        .arg("query")
        .arg("--db")
        .arg(&db)
        .arg("--sql")
        .arg("SELECT COUNT(*) AS n FROM movies")
        .arg("--format")
        .arg("csv");

    query
        .assert()
        .success()
        .stdout(predicate::str::contains("n\n1"));
}

#[test]
fn test_named_query_runs_against_loaded_store() {
    let dir = TempDir::new().unwrap();
    write_standard_sources(dir.path());
    let db = dir.path().join("cinedb.db");

    Command::cargo_bin("cinedb")
        .unwrap()
        .arg("load")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--db")
        .arg(&db)
        .assert()
        .success();

    let mut query = Command::cargo_bin("cinedb").unwrap();
    query
        .arg("query")
        .arg("--db")
        .arg(&db)
        .arg("--name")
        .arg("avg-genres");

    query
        .assert()
        .success()
        .stdout(predicate::str::contains("Drama"));
}

#[test]
fn test_unknown_named_query_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("cinedb.db");

    let mut cmd = Command::cargo_bin("cinedb").unwrap();
    cmd.arg("query")
        .arg("--db")
        .arg(&db)
        .arg("--name")
        .arg("does-not-exist");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown query"))
        .stderr(predicate::str::contains("--list"));
}

#[test]
fn test_query_without_store_fails() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("missing.db");

    let mut cmd = Command::cargo_bin("cinedb").unwrap();
    cmd.arg("query")
        .arg("--db")
        .arg(&db)
        .arg("--sql")
        .arg("SELECT 1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cinedb load"));
}

#[test]
fn test_load_with_missing_source_reports_the_file() {
    let dir = TempDir::new().unwrap();
    write_standard_sources(dir.path());
    std::fs::remove_file(dir.path().join("roles.csv")).unwrap();

    let mut cmd = Command::cargo_bin("cinedb").unwrap();
    cmd.arg("load")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--db")
        .arg(dir.path().join("cinedb.db"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("roles"));
}

#![allow(dead_code)]
use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::{params, Connection};

pub type Row = (&'static str, &'static str, f64, f64, f64, f64);

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_quake_view.sqlite", name));
    fs::remove_file(&path).ok();
    path
}

pub fn create_earthquakes_table(conn: &Connection) {
    conn.execute(
        "CREATE TABLE Earthquakes (
            date_time TEXT,
            location TEXT,
            magnitude REAL,
            depth_km REAL,
            latitude REAL,
            longitude REAL
        )",
        [],
    )
    .expect("create Earthquakes table");
}

pub fn insert_rows(conn: &Connection, rows: &[Row]) {
    for row in rows {
        conn.execute(
            "INSERT INTO Earthquakes VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![row.0, row.1, row.2, row.3, row.4, row.5],
        )
        .expect("insert row");
    }
}

/// Write a fixture database to a fresh temp file and return its path.
pub fn build_fixture_db(name: &str, rows: &[Row]) -> PathBuf {
    let path = setup_test_db(name);
    let conn = Connection::open(&path).expect("open fixture db");
    create_earthquakes_table(&conn);
    insert_rows(&conn, rows);
    path
}

/// The three-row dataset from the reporting requirements: two Tokyo events
/// and one Lima event.
pub fn sample_rows() -> Vec<Row> {
    vec![
        ("2023-01-01 10:00", "Tokyo", 5.2, 10.0, 35.6, 139.6),
        ("2023-01-01 11:00", "Tokyo", 4.8, 8.0, 35.7, 139.7),
        ("2023-01-02 09:00", "Lima", 6.1, 20.0, -12.0, -77.0),
    ]
}

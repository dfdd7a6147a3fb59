use std::env;

mod common;
use common::{build_fixture_db, sample_rows, setup_test_db};

use quake_view::db_manager::{load_dataset, DatabaseConfig, DatabaseSource};

const EPSILON: f64 = 1e-9;

fn config_for(path: std::path::PathBuf) -> DatabaseConfig {
    DatabaseConfig {
        database_path: DatabaseSource::Custom(path),
    }
}

#[test]
fn loads_every_row_verbatim() {
    let path = build_fixture_db("loads_every_row", &sample_rows());
    let dataset = load_dataset(&config_for(path)).expect("load dataset");

    let rows = sample_rows();
    assert_eq!(dataset.records.len(), rows.len());

    for (record, row) in dataset.records.iter().zip(rows.iter()) {
        assert_eq!(record.date_time, row.0);
        assert_eq!(record.location, row.1);
        assert!((record.magnitude - row.2).abs() < EPSILON);
        assert!((record.depth_km - row.3).abs() < EPSILON);
        assert!((record.latitude - row.4).abs() < EPSILON);
        assert!((record.longitude - row.5).abs() < EPSILON);
    }
}

#[test]
fn aggregates_count_rows_per_location() {
    let path = build_fixture_db("aggregates_count", &sample_rows());
    let dataset = load_dataset(&config_for(path)).expect("load dataset");

    // two distinct locations => two slices; order is database-defined
    let mut aggregates = dataset.aggregates.clone();
    aggregates.sort_by(|a, b| a.location.cmp(&b.location));

    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].location, "Lima");
    assert_eq!(aggregates[0].count, 1);
    assert_eq!(aggregates[1].location, "Tokyo");
    assert_eq!(aggregates[1].count, 2);
}

#[test]
fn empty_table_yields_no_rows_and_no_slices() {
    let path = build_fixture_db("empty_table", &[]);
    let dataset = load_dataset(&config_for(path)).expect("load dataset");

    assert!(dataset.records.is_empty());
    assert!(dataset.aggregates.is_empty());
}

#[test]
fn missing_table_fails_the_load() {
    // a reachable database without the Earthquakes table
    let path = setup_test_db("missing_table");
    rusqlite::Connection::open(&path).expect("create empty db");

    assert!(load_dataset(&config_for(path)).is_err());
}

#[test]
fn unreachable_database_fails_the_load() {
    let mut path = env::temp_dir();
    path.push("quake_view_no_such_dir");
    path.push("nowhere.sqlite");

    assert!(load_dataset(&config_for(path)).is_err());
}

#[test]
fn load_is_repeatable_and_identical() {
    // the view toggle never re-queries, but two full loads of the same file
    // must agree with each other
    let path = build_fixture_db("repeatable_load", &sample_rows());
    let first = load_dataset(&config_for(path.clone())).expect("first load");
    let second = load_dataset(&config_for(path)).expect("second load");

    assert_eq!(first.records, second.records);

    let sort = |mut aggs: Vec<quake_view::records::LocationAggregate>| {
        aggs.sort_by(|a, b| a.location.cmp(&b.location));
        aggs
    };
    assert_eq!(sort(first.aggregates), sort(second.aggregates));
}

use std::path::PathBuf;

use log::info;
use rusqlite::{Connection, OpenFlags};

use crate::errors::AppResult;
use crate::quake_utilities::default_db_path;
use crate::records::{EarthquakeRecord, LocationAggregate};

// The two fixed queries. No ORDER BY: row order is whatever the database
// yields for a full scan.
const RECORDS_QUERY: &str =
    "SELECT date_time, location, magnitude, depth_km, latitude, longitude FROM Earthquakes";
const AGGREGATES_QUERY: &str =
    "SELECT location, COUNT(*) AS count FROM Earthquakes GROUP BY location";

#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseSource {
    Default,
    Custom(PathBuf),
}

impl DatabaseSource {
    pub fn get_path(&self) -> PathBuf {
        match self {
            DatabaseSource::Default => default_db_path(),
            DatabaseSource::Custom(path) => path.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_path: DatabaseSource,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_path: DatabaseSource::Default,
        }
    }
}

/// Everything the two views need, loaded in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<EarthquakeRecord>,
    pub aggregates: Vec<LocationAggregate>,
}

/// The whole startup load: open the connection, run both queries, close.
/// The connection never outlives this call, and any failure aborts the load
/// with no partial result.
pub fn load_dataset(config: &DatabaseConfig) -> AppResult<Dataset> {
    let conn = open_connection(config)?;
    let records = load_records(&conn)?;
    let aggregates = load_aggregates(&conn)?;
    info!(
        "loaded {} earthquake records across {} locations",
        records.len(),
        aggregates.len()
    );
    Ok(Dataset {
        records,
        aggregates,
    })
}

/// Read-only connection: the viewer has no write path, and a missing
/// database file is a startup failure rather than a silently created
/// empty one.
pub fn open_connection(config: &DatabaseConfig) -> AppResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(config.database_path.get_path(), flags)?;
    Ok(conn)
}

pub fn load_records(conn: &Connection) -> AppResult<Vec<EarthquakeRecord>> {
    let mut stmt = conn.prepare(RECORDS_QUERY)?;

    let rows = stmt.query_map([], |row| {
        Ok(EarthquakeRecord {
            date_time: row.get(0)?,
            location: row.get(1)?,
            magnitude: row.get(2)?,
            depth_km: row.get(3)?,
            latitude: row.get(4)?,
            longitude: row.get(5)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }

    Ok(records)
}

pub fn load_aggregates(conn: &Connection) -> AppResult<Vec<LocationAggregate>> {
    let mut stmt = conn.prepare(AGGREGATES_QUERY)?;

    let rows = stmt.query_map([], |row| {
        Ok(LocationAggregate {
            location: row.get(0)?,
            count: row.get(1)?,
        })
    })?;

    let mut aggregates = Vec::new();
    for row in rows {
        aggregates.push(row?);
    }

    Ok(aggregates)
}

//! SQLite store access.
//!
//! The dataset is read-only. `Database` only remembers where the file lives;
//! every request opens its own connection through [`Database::connect`] and
//! drops it when done. The query functions below take a borrowed connection
//! so they can be shared by the handlers, the `inspect_db` tool and tests.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{KonaError, Result};
use crate::models::{
    DatasetSummary, PrecipitationSeries, Station, TemperatureObservation, TemperatureSummary,
};

/// Table holding the daily readings
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Table holding the station metadata
pub const STATION_TABLE: &str = "station";

/// Columns each table must expose for the queries in this module
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    (MEASUREMENT_TABLE, &["station", "date", "prcp", "tobs"]),
    (
        STATION_TABLE,
        &["station", "name", "latitude", "longitude", "elevation"],
    ),
];

/// Handle on the on-disk dataset
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open the database at `path`, check its schema and summarize its contents
    pub fn open(path: &Path) -> Result<(Self, DatasetSummary)> {
        // SQLite would happily create an empty file, so check first
        if !path.exists() {
            return Err(KonaError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )));
        }

        let database = Self {
            path: path.to_path_buf(),
        };

        let conn = database.connect()?;
        info!("Opened database: {}", path.display());

        verify_schema(&conn)?;
        let summary = dataset_summary(&conn)?;

        Ok((database, summary))
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh read-only connection
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    /// Run `f` against a new connection on the blocking thread pool
    pub async fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.clone();
        tokio::task::spawn_blocking(move || {
            let conn = database.connect()?;
            f(&conn)
        })
        .await?
    }
}

/// Check that both tables exist with the columns the queries rely on
pub fn verify_schema(conn: &Connection) -> Result<()> {
    let tables = table_names(conn)?;
    debug!("Database has tables: {:?}", tables);

    for &(table, columns) in REQUIRED_COLUMNS {
        if !tables.iter().any(|name| name == table) {
            return Err(KonaError::DataNotFound {
                message: format!("Table not found: {}", table),
            });
        }

        let present = table_columns(conn, table)?;
        let missing: Vec<&str> = columns
            .iter()
            .copied()
            .filter(|column| !present.iter().any(|name| name == column))
            .collect();

        if !missing.is_empty() {
            return Err(KonaError::DataNotFound {
                message: format!(
                    "Table {} is missing columns: {}",
                    table,
                    missing.join(", ")
                ),
            });
        }
    }

    Ok(())
}

/// Names of the user tables in the database, sorted
pub fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;
    Ok(names)
}

/// Column names of `table` in declaration order
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
    let columns = stmt
        .query_map([table], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;
    Ok(columns)
}

/// Number of rows in `table`
pub fn row_count(conn: &Connection, table: &str) -> Result<usize> {
    let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count as usize)
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Row counts and observation date coverage
pub fn dataset_summary(conn: &Connection) -> Result<DatasetSummary> {
    let station_count = row_count(conn, STATION_TABLE)?;
    let observation_count = row_count(conn, MEASUREMENT_TABLE)?;

    let (first_date, last_date) = conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM measurement",
            [],
            |row| {
                Ok((
                    row.get::<_, Option<String>>(0)?,
                    row.get::<_, Option<String>>(1)?,
                ))
            },
        )
        .optional()?
        .unwrap_or((None, None));

    Ok(DatasetSummary {
        station_count,
        observation_count,
        first_date,
        last_date,
    })
}

/// Precipitation per date for `start..=end`, newest first
pub fn precipitation_between(
    conn: &Connection,
    start: &str,
    end: &str,
) -> Result<PrecipitationSeries> {
    let mut stmt = conn.prepare(
        "SELECT date, prcp FROM measurement
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date DESC, rowid",
    )?;
    let rows = stmt.query_map(params![start, end], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Option<f64>>(1)?))
    })?;

    let mut series = PrecipitationSeries::new();
    for row in rows {
        let (date, prcp) = row?;
        series.push(date, prcp);
    }
    Ok(series)
}

/// Every row of the station table
pub fn stations(conn: &Connection) -> Result<Vec<Station>> {
    let mut stmt =
        conn.prepare("SELECT station, name, latitude, longitude, elevation FROM station")?;
    let stations = stmt
        .query_map([], |row| {
            Ok(Station {
                station: row.get(0)?,
                name: row.get(1)?,
                latitude: row.get(2)?,
                longitude: row.get(3)?,
                elevation: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(stations)
}

/// Temperature readings of one station for `start..=end`, oldest first
pub fn temperature_observations(
    conn: &Connection,
    station: &str,
    start: &str,
    end: &str,
) -> Result<Vec<TemperatureObservation>> {
    let mut stmt = conn.prepare(
        "SELECT date, tobs FROM measurement
         WHERE station = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY date",
    )?;
    let observations = stmt
        .query_map(params![station, start, end], |row| {
            Ok(TemperatureObservation {
                date: row.get(0)?,
                tobs: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(observations)
}

/// Min/avg/max temperature over dates `>= start`, and `<= end` when given.
///
/// Bounds are compared as strings, exactly as stored.
pub fn temperature_summary(
    conn: &Connection,
    start: &str,
    end: Option<&str>,
) -> Result<TemperatureSummary> {
    let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<TemperatureSummary> {
        Ok(TemperatureSummary {
            min: row.get(0)?,
            avg: row.get(1)?,
            max: row.get(2)?,
        })
    };

    let summary = match end {
        Some(end) => conn.query_row(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
             WHERE date >= ?1 AND date <= ?2",
            params![start, end],
            map_row,
        )?,
        None => conn.query_row(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
             WHERE date >= ?1",
            params![start],
            map_row,
        )?,
    };
    Ok(summary)
}

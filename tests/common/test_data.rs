//! Test data generation utilities.
//!
//! Builds a SQLite dataset laid out like the Hawaii climate database, filled
//! with deterministic readings so tests can compute expected answers directly
//! from the generated rows.

use chrono::{Duration, NaiveDate};
use kona::{Observation, Station};
use rusqlite::{params, Connection};
use std::path::Path;

/// First generated observation date
pub const FIRST_DATE: &str = "2015-06-01";

/// Last generated observation date, also the default reference date
pub const LAST_DATE: &str = "2017-08-23";

/// Stations written to the fixture
pub fn stations() -> Vec<Station> {
    vec![
        Station {
            station: Some("USC00519397".to_string()),
            name: Some("WAIKIKI 717.2, HI US".to_string()),
            latitude: Some(21.2716),
            longitude: Some(-157.8168),
            elevation: Some(3.0),
        },
        Station {
            station: Some("USC00513117".to_string()),
            name: Some("KANEOHE 838.1, HI US".to_string()),
            latitude: Some(21.4234),
            longitude: Some(-157.8015),
            elevation: Some(14.6),
        },
        Station {
            station: Some("USC00519281".to_string()),
            name: Some("WAIHEE 837.5, HI US".to_string()),
            latitude: Some(21.45167),
            longitude: Some(-157.84889),
            elevation: Some(32.9),
        },
        Station {
            station: Some("USC00516128".to_string()),
            name: Some("MANOA LYON ARBO 785.2, HI US".to_string()),
            latitude: Some(21.3331),
            longitude: Some(-157.8025),
            elevation: Some(152.4),
        },
    ]
}

/// Daily readings for every station from `FIRST_DATE` to `LAST_DATE`.
///
/// Every fifth day of the Manoa station has no precipitation reading and
/// every eleventh day of the Kaneohe station has no temperature reading.
pub fn observations() -> Vec<Observation> {
    let first = NaiveDate::parse_from_str(FIRST_DATE, "%Y-%m-%d").unwrap();
    let last = NaiveDate::parse_from_str(LAST_DATE, "%Y-%m-%d").unwrap();
    let days = (last - first).num_days();

    let mut observations = Vec::new();
    for day in 0..=days {
        let date = (first + Duration::days(day)).to_string();
        for (s, station) in stations().into_iter().enumerate() {
            let s = s as i64;
            let prcp = if s == 3 && day % 5 == 0 {
                None
            } else {
                Some(((day * 7 + s * 3) % 13) as f64 / 10.0)
            };
            let tobs = if s == 1 && day % 11 == 0 {
                None
            } else {
                Some((60 + (day * 3 + s * 5) % 25) as f64)
            };
            observations.push(Observation {
                station: station.station.unwrap_or_default(),
                date: date.clone(),
                prcp,
                tobs,
            });
        }
    }
    observations
}

/// Write the fixture dataset to `path`
pub fn create_test_database(path: &Path) -> rusqlite::Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT, name TEXT,
            latitude FLOAT, longitude FLOAT, elevation FLOAT
        );
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT, date TEXT, prcp FLOAT, tobs FLOAT
        );",
    )?;

    let tx = conn.transaction()?;
    {
        let mut insert_station = tx.prepare(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for station in stations() {
            insert_station.execute(params![
                station.station,
                station.name,
                station.latitude,
                station.longitude,
                station.elevation
            ])?;
        }

        let mut insert_measurement = tx.prepare(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for observation in observations() {
            insert_measurement.execute(params![
                observation.station,
                observation.date,
                observation.prcp,
                observation.tobs
            ])?;
        }
    }
    tx.commit()
}

/// Expected (min, avg, max) temperature over `start..=end`, computed from the generated rows
pub fn expected_summary(start: &str, end: Option<&str>) -> Option<(f64, f64, f64)> {
    let temps: Vec<f64> = observations()
        .into_iter()
        .filter(|o| o.date.as_str() >= start && end.map_or(true, |end| o.date.as_str() <= end))
        .filter_map(|o| o.tobs)
        .collect();

    if temps.is_empty() {
        return None;
    }

    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = temps.iter().sum::<f64>() / temps.len() as f64;
    Some((min, avg, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_count() {
        // 2015-06-01..=2017-08-23 is 815 days, four stations each
        assert_eq!(observations().len(), 815 * 4);
    }

    #[test]
    fn test_create_test_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.sqlite");
        create_test_database(&path).unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count as usize, observations().len());
    }
}

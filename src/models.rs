//! Row and response types for the climate dataset.
//!
//! `Station` and `Observation` mirror the two store tables. The remaining
//! types are the JSON shapes the API answers with.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A row of the `station` table. Every column is nullable in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// A row of the `measurement` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub station: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

/// Flat station record returned by `/api/v1.0/stations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub station: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Lat")]
    pub lat: Option<f64>,
    #[serde(rename = "Lon")]
    pub lon: Option<f64>,
    #[serde(rename = "Elevation")]
    pub elevation: Option<f64>,
}

impl From<Station> for StationRecord {
    fn from(station: Station) -> Self {
        Self {
            station: station.station,
            name: station.name,
            lat: station.latitude,
            lon: station.longitude,
            elevation: station.elevation,
        }
    }
}

/// One dated temperature reading returned by `/api/v1.0/tobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Tobs")]
    pub tobs: Option<f64>,
}

/// Min/avg/max temperature over a date range.
///
/// All three fields are `None` when the range holds no readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Minimum Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub avg: Option<f64>,
    #[serde(rename = "Maximum Temperature")]
    pub max: Option<f64>,
}

impl TemperatureSummary {
    /// True when the filtered range matched no temperature readings
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

/// Date to precipitation mapping, serialized as a JSON object in insertion order.
///
/// Rows are pushed newest first. A repeated date overwrites the earlier value
/// but keeps its original position, so the object stays in descending date
/// order with one key per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PrecipitationSeries(IndexMap<String, Option<f64>>);

impl PrecipitationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading, replacing the value of an already-seen date
    pub fn push(&mut self, date: String, prcp: Option<f64>) {
        self.0.insert(date, prcp);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<Option<f64>> {
        self.0.get(date).copied()
    }

    /// Dates in output order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Option<f64>)> for PrecipitationSeries {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (date, prcp) in iter {
            series.push(date, prcp);
        }
        series
    }
}

/// Row counts and date coverage of a loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub station_count: usize,
    pub observation_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

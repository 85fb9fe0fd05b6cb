//! # kona
//!
//! A small, read-only JSON API over a SQLite climate-observation dataset.
//!
//! The dataset holds two tables: `station` (station metadata) and
//! `measurement` (daily precipitation and temperature readings per station).
//! The server answers a handful of filter and aggregate queries over them.
//!
//! ## Architecture
//!
//! - **Data Layer**: opens a fresh read-only SQLite connection per request
//! - **API Layer**: axum handlers that reshape rows into flat JSON records
//! - **Ambient**: layered configuration, structured logging, a heartbeat endpoint

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod state;


pub use config::Config;
pub use database::Database;
pub use error::{KonaError, Result};
pub use handlers::router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_request_error, log_timed_operation,
};
pub use models::{
    DatasetSummary, Observation, PrecipitationSeries, Station, StationRecord,
    TemperatureObservation, TemperatureSummary,
};
pub use state::AppState;

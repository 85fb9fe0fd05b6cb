//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and what the served
//! dataset currently holds.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use super::error_response;
use crate::database;
use crate::logging::generate_request_id;
use crate::state::AppState;

/// Server ID, unique per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Pin the start time so uptime counts from router construction
pub(crate) fn record_start_time() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    /// Database file path
    pub database_path: String,
    /// Rows in the station table
    pub station_count: usize,
    /// Rows in the measurement table
    pub observation_count: usize,
    /// Earliest observation date
    pub first_date: Option<String>,
    /// Latest observation date
    pub last_date: Option<String>,
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Response {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let summary = match state
        .database
        .with_connection(database::dataset_summary)
        .await
    {
        Ok(summary) => summary,
        Err(error) => return error_response(error, "/heartbeat", &generate_request_id(), None),
    };

    let response = HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: DatasetInfo {
            database_path: state.database.path().display().to_string(),
            station_count: summary.station_count,
            observation_count: summary.observation_count,
            first_date: summary.first_date,
            last_date: summary.last_date,
        },
        status: "healthy".to_string(),
    };

    Json(response).into_response()
}

//! Stations endpoint handler.
//!
//! Returns every station as a flat JSON record.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::database;
use crate::logging::generate_request_id;
use crate::models::StationRecord;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    let result = state
        .database
        .with_connection(database::stations)
        .await;

    match result {
        Ok(stations) => {
            let records: Vec<StationRecord> =
                stations.into_iter().map(StationRecord::from).collect();

            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                station_count = records.len(),
                "Stations request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

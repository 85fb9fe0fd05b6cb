//! Temperature observation endpoint handler.
//!
//! Returns the dated temperature readings of the configured station over the
//! trailing window.

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
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::models::TemperatureObservation;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        station = state.tobs_station(),
        "Processing temperature observation request"
    );

    match load_observations(&state).await {
        Ok(observations) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                observation_count = observations.len(),
                "Temperature observation request successful"
            );
            Json(observations).into_response()
        }
        Err(error) => error_response(
            error,
            ENDPOINT,
            &request_id,
            Some(&format!("station={}", state.tobs_station())),
        ),
    }
}

async fn load_observations(state: &AppState) -> Result<Vec<TemperatureObservation>> {
    let (start, end) = state.window_bounds()?;
    let station = state.tobs_station().to_string();

    state
        .database
        .with_connection(move |conn| {
            database::temperature_observations(conn, &station, &start, &end)
        })
        .await
}

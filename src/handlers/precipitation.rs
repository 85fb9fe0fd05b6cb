//! Precipitation endpoint handler.
//!
//! Returns a date to precipitation mapping for the trailing window that ends
//! on the configured reference date, newest date first.

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
use crate::models::PrecipitationSeries;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match load_precipitation(&state).await {
        Ok(series) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                date_count = series.len(),
                "Precipitation request successful"
            );
            Json(series).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

async fn load_precipitation(state: &AppState) -> Result<PrecipitationSeries> {
    let (start, end) = state.window_bounds()?;
    debug!(start = %start, end = %end, "Precipitation window");

    state
        .database
        .with_connection(move |conn| database::precipitation_between(conn, &start, &end))
        .await
}

//! Temperature summary endpoint handlers.
//!
//! `/api/v1.0/:start` and `/api/v1.0/:start/:end` answer with a one-element
//! list holding the minimum, average and maximum temperature over the
//! inclusive date range. Path segments are used as given: a value that is
//! not a `YYYY-MM-DD` date is logged but still compared as text, which
//! normally yields an all-null summary.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::error_response;
use crate::database;
use crate::logging::generate_request_id;
use crate::state::AppState;

const START_ENDPOINT: &str = "/api/v1.0/:start";
const RANGE_ENDPOINT: &str = "/api/v1.0/:start/:end";

/// Handle GET /api/v1.0/:start requests
pub async fn summary_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    summarize(state, start, None).await
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn summary_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    summarize(state, start, Some(end)).await
}

async fn summarize(state: Arc<AppState>, start: String, end: Option<String>) -> Response {
    let endpoint = route_for(end.as_deref());
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = match &end {
        Some(end) => format!("start={}, end={}", start, end),
        None => format!("start={}", start),
    };

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        params = %params,
        "Processing temperature summary request"
    );

    for bound in std::iter::once(&start).chain(end.as_ref()) {
        if !is_iso_date(bound) {
            warn!(
                endpoint = endpoint,
                request_id = %request_id,
                bound = %bound,
                "Date bound is not YYYY-MM-DD, comparing as text"
            );
        }
    }

    let result = state
        .database
        .with_connection(move |conn| database::temperature_summary(conn, &start, end.as_deref()))
        .await;

    match result {
        Ok(summary) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                empty = summary.is_empty(),
                "Temperature summary request successful"
            );
            Json(vec![summary]).into_response()
        }
        Err(error) => error_response(error, endpoint, &request_id, Some(&params)),
    }
}

/// Route template a summary request came in on
fn route_for(end: Option<&str>) -> &'static str {
    match end {
        Some(_) => RANGE_ENDPOINT,
        None => START_ENDPOINT,
    }
}

fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

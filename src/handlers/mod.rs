//! HTTP request handlers for the kona API.
//!
//! This module contains all the endpoint handlers for the web server and the
//! router that wires them to their paths.

pub mod heartbeat;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod summary;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use summary::{summary_range_handler, summary_start_handler};
pub use tobs::tobs_handler;

use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::KonaError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the application router over the shared state
pub fn router(state: Arc<AppState>) -> Router {
    heartbeat::record_start_time();

    Router::new()
        .route("/", get(index_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(summary_start_handler))
        .route("/api/v1.0/:start/:end", get(summary_range_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log a failed request and turn the error into a JSON error response
pub(crate) fn error_response(
    error: KonaError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}

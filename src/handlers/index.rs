//! Landing page handler.
//!
//! Lists the available API routes as plain HTML text.

use axum::response::Html;

/// Route listing served at `/`
pub const ROUTES_PAGE: &str = "Hawaii Climate API Analysis Guide<br/>\
Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/start (apply format as YYYY-MM-DD)<br/>\
/api/v1.0/start/end (apply format as YYYY-MM-DD/YYYY-MM-DD)<br/>\
/heartbeat";

/// Handle GET / requests
pub async fn index_handler() -> Html<&'static str> {
    Html(ROUTES_PAGE)
}

//! Axum router configuration for metric endpoints.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_metric, send_metric, MetricAppState};
use crate::adapters::http::common::{ping, with_http_layers};

/// Routes without state or middleware.
///
/// - `GET /` - Ping
/// - `POST /metric` - Record a metric
/// - `GET /metric` - Look up a metric
pub fn metric_routes() -> Router<MetricAppState> {
    Router::new()
        .route("/", get(ping))
        .route("/metric", post(send_metric).get(get_metric))
}

/// Complete metrics-collector REST router.
pub fn metric_router(state: MetricAppState, request_timeout: Duration) -> Router {
    with_http_layers(metric_routes().with_state(state), request_timeout)
}

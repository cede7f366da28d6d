//! HTTP adapter for the metrics-collector.
//!
//! - `GET /` - Liveness check
//! - `POST /metric` - Record a metric stamped with the server time
//! - `GET /metric` - Look up a metric by its full identity

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{MetricApiError, MetricAppState};
pub use routes::{metric_router, metric_routes};

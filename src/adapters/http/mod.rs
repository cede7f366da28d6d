//! HTTP adapters - REST API implementations.
//!
//! Each service has its own router; both share the error body, the ping
//! endpoint and the tracing/timeout layers from `common`.

pub mod common;
pub mod metric;
pub mod order;

pub use common::{ping, with_http_layers, ErrorResponse};
pub use metric::{metric_router, MetricAppState};
pub use order::{order_router, OrderAppState};

//! Axum router configuration for order endpoints.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_order, get_order, OrderAppState};
use crate::adapters::http::common::{ping, with_http_layers};

/// Routes without state or middleware.
///
/// - `GET /` - Ping
/// - `POST /order` - Create an order
/// - `GET /order/:id` - Fetch an order
pub fn order_routes() -> Router<OrderAppState> {
    Router::new()
        .route("/", get(ping))
        .route("/order", post(create_order))
        .route("/order/:id", get(get_order))
}

/// Complete order-service REST router.
pub fn order_router(state: OrderAppState, request_timeout: Duration) -> Router {
    with_http_layers(order_routes().with_state(state), request_timeout)
}

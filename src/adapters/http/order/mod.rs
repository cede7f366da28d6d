//! HTTP adapter for the order service.
//!
//! - `GET /` - Liveness check
//! - `POST /order` - Create an order
//! - `GET /order/:id` - Fetch an order by id

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{OrderApiError, OrderAppState};
pub use routes::{order_router, order_routes};

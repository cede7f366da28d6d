//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! family's handlers together form its service layer: they validate input,
//! call the repository port, and translate storage failures into the
//! family's error kinds.

pub mod metric;
pub mod order;

pub use metric::{CreateMetricCommand, CreateMetricHandler, GetMetricHandler, GetMetricQuery};
pub use order::{CreateOrderCommand, CreateOrderHandler, GetOrderHandler, GetOrderQuery};

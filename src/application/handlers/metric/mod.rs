//! Metric command and query handlers.

mod create_metric;
mod get_metric;

pub use create_metric::{CreateMetricCommand, CreateMetricHandler};
pub use get_metric::{GetMetricHandler, GetMetricQuery};

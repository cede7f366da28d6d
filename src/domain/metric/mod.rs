//! Metric module - Named numeric observations keyed by service, pod and time.
//!
//! A metric is identified by its [`MetricIdentity`]: the moment it was
//! recorded, the URL of the reporting service, the metric name and the pod
//! name. The identity doubles as the confirmation returned on insert and as
//! the lookup key.

mod errors;
mod metric;

pub use errors::MetricError;
pub use metric::{Metric, MetricIdentity};

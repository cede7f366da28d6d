//! In-memory repository adapters.
//!
//! Back the services when `database.backend = "memory"` and drive the
//! HTTP and gRPC tests without a database.

mod metric_repository;
mod order_repository;

pub use metric_repository::InMemoryMetricRepository;
pub use order_repository::InMemoryOrderRepository;

//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresMetricRepository` - `metric` table, composite identity key
//! - `PostgresOrderRepository` - `"order"` table, BIGSERIAL ids
//!
//! Every call runs under the configured query timeout.

mod deadline;
mod metric_repository;
mod order_repository;
mod pool;

pub use metric_repository::PostgresMetricRepository;
pub use order_repository::PostgresOrderRepository;
pub use pool::{create_pool, run_metric_migrations, run_order_migrations};

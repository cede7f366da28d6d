//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `MetricRepository` - Stores metrics and finds them by natural identity
//! - `OrderRepository` - Stores orders and finds them by assigned id

mod metric_repository;
mod order_repository;

pub use metric_repository::MetricRepository;
pub use order_repository::OrderRepository;

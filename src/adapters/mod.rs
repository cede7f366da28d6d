//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - PostgreSQL repositories
//! - `memory` - In-memory repositories
//! - `http` - REST routers for both services
//! - `grpc` - metrics-collector gRPC service

pub mod grpc;
pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryMetricRepository, InMemoryOrderRepository};
pub use postgres::{PostgresMetricRepository, PostgresOrderRepository};

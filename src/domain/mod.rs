//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `metric` - Metric observations keyed by their natural identity
//! - `order` - Purchase orders keyed by a storage-assigned id

pub mod foundation;
pub mod metric;
pub mod order;

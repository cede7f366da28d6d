//! Metric repository port.
//!
//! Defines the contract for persisting and retrieving metric observations.
//!
//! # Design
//!
//! - **Single-row**: every call is one atomic insert or select
//! - **Natural key**: rows are addressed by the full `MetricIdentity`
//! - **Observable absence**: `Ok(None)` means no row matches, `Err` means
//!   storage could not answer

use crate::domain::foundation::DomainError;
use crate::domain::metric::{Metric, MetricIdentity};
use async_trait::async_trait;

/// Repository port for metric persistence.
#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Save a new metric.
    ///
    /// Returns the identity exactly as storage recorded it.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on any persistence failure, including a duplicate
    ///   identity
    /// - `Timeout` when the per-call deadline elapses
    async fn save(&self, metric: &Metric) -> Result<MetricIdentity, DomainError>;

    /// Find a metric by its identity.
    ///
    /// Returns `None` if no row matches.
    async fn find_by_identity(
        &self,
        identity: &MetricIdentity,
    ) -> Result<Option<Metric>, DomainError>;
}

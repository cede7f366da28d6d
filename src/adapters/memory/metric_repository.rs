//! In-memory implementation of MetricRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::metric::{Metric, MetricIdentity};
use crate::ports::MetricRepository;

/// Metrics keyed by their full identity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetricRepository {
    metrics: Arc<RwLock<HashMap<MetricIdentity, Metric>>>,
}

impl InMemoryMetricRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored metrics
    pub async fn len(&self) -> usize {
        self.metrics.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.metrics.read().await.is_empty()
    }
}

#[async_trait]
impl MetricRepository for InMemoryMetricRepository {
    async fn save(&self, metric: &Metric) -> Result<MetricIdentity, DomainError> {
        let mut metrics = self.metrics.write().await;
        if metrics.contains_key(metric.identity()) {
            return Err(DomainError::database(format!(
                "Metric already exists: {}",
                metric.identity()
            )));
        }
        metrics.insert(metric.identity().clone(), metric.clone());
        Ok(metric.identity().clone())
    }

    async fn find_by_identity(
        &self,
        identity: &MetricIdentity,
    ) -> Result<Option<Metric>, DomainError> {
        Ok(self.metrics.read().await.get(identity).cloned())
    }
}

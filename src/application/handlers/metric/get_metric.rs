//! GetMetricHandler - Query handler for looking up a metric by identity.

use std::sync::Arc;

use crate::domain::metric::{Metric, MetricError, MetricIdentity};
use crate::ports::MetricRepository;

/// Query to get a metric by its natural identity.
#[derive(Debug, Clone)]
pub struct GetMetricQuery {
    pub identity: MetricIdentity,
}

/// Handler for retrieving metrics.
pub struct GetMetricHandler {
    repository: Arc<dyn MetricRepository>,
}

impl GetMetricHandler {
    pub fn new(repository: Arc<dyn MetricRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMetricQuery) -> Result<Metric, MetricError> {
        let identity = query.identity;

        if let Err(err) = identity.validate() {
            tracing::warn!(
                time = %identity.time,
                service_url = %identity.service_url,
                metric_name = %identity.metric_name,
                pod_name = %identity.pod_name,
                field = err.field(),
                "invalid metric identity"
            );
            return Err(MetricError::invalid_identity(err));
        }
        tracing::debug!(identity = %identity, "metric identity passed validation");

        // Absence and storage failure reach the caller as the same outcome;
        // only the log level tells them apart.
        match self.repository.find_by_identity(&identity).await {
            Ok(Some(metric)) => {
                tracing::info!(identity = %identity, "metric successfully retrieved");
                Ok(metric)
            }
            Ok(None) => {
                tracing::warn!(identity = %identity, "metric not found");
                Err(MetricError::not_found(identity))
            }
            Err(err) => {
                tracing::error!(
                    identity = %identity,
                    code = %err.code,
                    error = %err,
                    "failed to find metric"
                );
                Err(MetricError::not_found(identity))
            }
        }
    }
}

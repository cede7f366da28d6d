//! CreateMetricHandler - Command handler for ingesting metrics.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::metric::{Metric, MetricError, MetricIdentity};
use crate::ports::MetricRepository;

/// Command to ingest one metric observation.
///
/// Carries no time: the handler stamps the observation when it runs.
#[derive(Debug, Clone)]
pub struct CreateMetricCommand {
    pub service_url: String,
    pub metric_name: String,
    pub pod_name: String,
    pub value: f64,
}

/// Handler for ingesting metrics.
pub struct CreateMetricHandler {
    repository: Arc<dyn MetricRepository>,
}

impl CreateMetricHandler {
    pub fn new(repository: Arc<dyn MetricRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateMetricCommand) -> Result<MetricIdentity, MetricError> {
        let identity = MetricIdentity::new(
            Timestamp::now(),
            cmd.service_url,
            cmd.metric_name,
            cmd.pod_name,
        );
        let metric = Metric::new(identity, cmd.value);

        if let Err(err) = metric.validate() {
            tracing::warn!(
                service_url = %metric.identity.service_url,
                metric_name = %metric.identity.metric_name,
                pod_name = %metric.identity.pod_name,
                field = err.field(),
                "validation failed for metric, missing required params"
            );
            return Err(MetricError::invalid_metric(err));
        }
        tracing::debug!(identity = %metric.identity, "metric passed validation");

        let confirmed = match self.repository.save(&metric).await {
            Ok(identity) => identity,
            Err(err) => {
                tracing::error!(
                    identity = %metric.identity,
                    code = %err.code,
                    error = %err,
                    "failed to save metric"
                );
                return Err(MetricError::save_failed());
            }
        };

        if confirmed != metric.identity {
            tracing::error!(
                written = %metric.identity,
                confirmed = %confirmed,
                "storage confirmed a different metric identity than was written"
            );
            return Err(MetricError::internal(
                "storage confirmed an unexpected metric identity",
            ));
        }

        tracing::info!(identity = %confirmed, "metric successfully created");
        Ok(confirmed)
    }
}

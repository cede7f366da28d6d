//! `MetricsCollector` gRPC service.
//!
//! Thin translation between protobuf messages and the metric handlers;
//! error kinds map onto gRPC status codes.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use super::proto;
use super::proto::metrics_collector_server::{MetricsCollector, MetricsCollectorServer};
use crate::application::handlers::{
    CreateMetricCommand, CreateMetricHandler, GetMetricHandler, GetMetricQuery,
};
use crate::domain::foundation::Timestamp;
use crate::domain::metric::{MetricError, MetricIdentity};
use crate::ports::MetricRepository;

/// gRPC implementation of the metrics collector.
pub struct MetricsCollectorService {
    create_metric: CreateMetricHandler,
    get_metric: GetMetricHandler,
}

impl MetricsCollectorService {
    pub fn new(repository: Arc<dyn MetricRepository>) -> Self {
        Self {
            create_metric: CreateMetricHandler::new(repository.clone()),
            get_metric: GetMetricHandler::new(repository),
        }
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(self) -> MetricsCollectorServer<Self> {
        MetricsCollectorServer::new(self)
    }
}

fn to_proto_timestamp(time: &Timestamp) -> prost_types::Timestamp {
    let dt = time.as_datetime();
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

fn from_proto_timestamp(time: Option<prost_types::Timestamp>) -> Result<Timestamp, Status> {
    let time = time.ok_or_else(|| Status::invalid_argument("time is required"))?;
    Timestamp::from_unix_parts(time.seconds, time.nanos)
        .ok_or_else(|| Status::invalid_argument("time is out of range"))
}

fn status_from(err: MetricError) -> Status {
    match err {
        MetricError::InvalidMetric(_) | MetricError::InvalidMetricIdentity(_) => {
            Status::invalid_argument(err.message())
        }
        MetricError::NotFound(_) => Status::not_found(err.message()),
        MetricError::SaveFailed | MetricError::Internal(_) => Status::internal("internal error"),
    }
}

#[tonic::async_trait]
impl MetricsCollector for MetricsCollectorService {
    async fn ping(&self, _request: Request<()>) -> Result<Response<()>, Status> {
        debug!("ping");
        Ok(Response::new(()))
    }

    async fn send_metric(
        &self,
        request: Request<proto::SendMetricRequest>,
    ) -> Result<Response<proto::SendMetricResponse>, Status> {
        let req = request.into_inner();

        let identity = self
            .create_metric
            .handle(CreateMetricCommand {
                service_url: req.service_url,
                metric_name: req.metric_name,
                pod_name: req.pod_name,
                value: req.metric_value,
            })
            .await
            .map_err(status_from)?;

        Ok(Response::new(proto::SendMetricResponse {
            time: Some(to_proto_timestamp(&identity.time)),
            service_url: identity.service_url,
            metric_name: identity.metric_name,
            pod_name: identity.pod_name,
        }))
    }

    async fn get_metric(
        &self,
        request: Request<proto::GetMetricRequest>,
    ) -> Result<Response<proto::GetMetricResponse>, Status> {
        let req = request.into_inner();
        let time = from_proto_timestamp(req.time)?;

        let metric = self
            .get_metric
            .handle(GetMetricQuery {
                identity: MetricIdentity::new(time, req.service_url, req.metric_name, req.pod_name),
            })
            .await
            .map_err(status_from)?;

        let value = metric.value();
        let identity = metric.identity;
        Ok(Response::new(proto::GetMetricResponse {
            time: Some(to_proto_timestamp(&identity.time)),
            service_url: identity.service_url,
            metric_name: identity.metric_name,
            pod_name: identity.pod_name,
            metric_value: value,
        }))
    }
}

//! HTTP handlers for metric endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    CreateMetricCommand, CreateMetricHandler, GetMetricHandler, GetMetricQuery,
};
use crate::domain::foundation::Timestamp;
use crate::domain::metric::{MetricError, MetricIdentity};
use crate::ports::MetricRepository;

use super::dto::{GetMetricParams, MetricIdentityResponse, MetricResponse, SendMetricRequest};
use crate::adapters::http::common::{ErrorResponse, INTERNAL_ERROR_MESSAGE};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the metric router.
#[derive(Clone)]
pub struct MetricAppState {
    pub metric_repository: Arc<dyn MetricRepository>,
}

impl MetricAppState {
    pub fn new(metric_repository: Arc<dyn MetricRepository>) -> Self {
        Self { metric_repository }
    }

    pub fn create_metric_handler(&self) -> CreateMetricHandler {
        CreateMetricHandler::new(self.metric_repository.clone())
    }

    pub fn get_metric_handler(&self) -> GetMetricHandler {
        GetMetricHandler::new(self.metric_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /metric - Record a metric
pub async fn send_metric(
    State(state): State<MetricAppState>,
    payload: Result<Json<SendMetricRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MetricApiError> {
    let Json(request) = payload?;

    let cmd = CreateMetricCommand {
        service_url: request.service_url,
        metric_name: request.metric_name,
        pod_name: request.pod_name,
        value: request.metric_value,
    };

    let identity = state.create_metric_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(MetricIdentityResponse::from(identity))))
}

/// GET /metric - Look up a metric by identity
pub async fn get_metric(
    State(state): State<MetricAppState>,
    params: Result<Query<GetMetricParams>, QueryRejection>,
) -> Result<impl IntoResponse, MetricApiError> {
    let Query(params) = params?;

    let time = Timestamp::parse_rfc3339(&params.time)
        .map_err(|e| MetricApiError::BadRequest(format!("invalid time: {}", e)))?;

    let query = GetMetricQuery {
        identity: MetricIdentity::new(
            time,
            params.service_url,
            params.metric_name,
            params.pod_name,
        ),
    };

    let metric = state.get_metric_handler().handle(query).await?;

    Ok(Json(MetricResponse::from(metric)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts metric errors to HTTP responses.
#[derive(Debug)]
pub enum MetricApiError {
    /// Request could not be decoded.
    BadRequest(String),
    Domain(MetricError),
}

impl From<MetricError> for MetricApiError {
    fn from(err: MetricError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for MetricApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for MetricApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for MetricApiError {
    fn into_response(self) -> Response {
        let err = match self {
            MetricApiError::BadRequest(message) => {
                return ErrorResponse::bad_request(message)
                    .into_response_with(StatusCode::BAD_REQUEST);
            }
            MetricApiError::Domain(err) => err,
        };

        let (status, message) = match &err {
            MetricError::InvalidMetric(_) | MetricError::InvalidMetricIdentity(_) => {
                (StatusCode::BAD_REQUEST, err.message())
            }
            MetricError::NotFound(_) => (StatusCode::NOT_FOUND, err.message()),
            MetricError::SaveFailed | MetricError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        ErrorResponse::new(err.code().to_string(), message).into_response_with(status)
    }
}

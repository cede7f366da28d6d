//! Metric-specific error types.
//!
//! # Transport Mapping
//!
//! | Error | HTTP | gRPC |
//! |-------|------|------|
//! | InvalidMetric | 400 | INVALID_ARGUMENT |
//! | InvalidMetricIdentity | 400 | INVALID_ARGUMENT |
//! | SaveFailed | 500 | INTERNAL |
//! | NotFound | 404 | NOT_FOUND |
//! | Internal | 500 | INTERNAL |

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::MetricIdentity;

/// Metric-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Metric submitted for ingestion is missing a required field.
    InvalidMetric(ValidationError),

    /// Lookup key is missing a required field.
    InvalidMetricIdentity(ValidationError),

    /// Persisting the metric failed.
    SaveFailed,

    /// No metric matches the identity, or storage could not tell.
    NotFound(MetricIdentity),

    /// Storage behaved in a way the service does not expect.
    Internal(String),
}

impl MetricError {
    pub fn invalid_metric(err: ValidationError) -> Self {
        MetricError::InvalidMetric(err)
    }
    pub fn invalid_identity(err: ValidationError) -> Self {
        MetricError::InvalidMetricIdentity(err)
    }
    pub fn save_failed() -> Self {
        MetricError::SaveFailed
    }
    pub fn not_found(identity: MetricIdentity) -> Self {
        MetricError::NotFound(identity)
    }
    pub fn internal(message: impl Into<String>) -> Self {
        MetricError::Internal(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricError::InvalidMetric(_) => ErrorCode::InvalidMetric,
            MetricError::InvalidMetricIdentity(_) => ErrorCode::InvalidMetricIdentity,
            MetricError::SaveFailed => ErrorCode::SaveFailed,
            MetricError::NotFound(_) => ErrorCode::MetricNotFound,
            MetricError::Internal(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            MetricError::InvalidMetric(err) => {
                format!("invalid metric: no required params ({})", err)
            }
            MetricError::InvalidMetricIdentity(err) => {
                format!("invalid metric identity ({})", err)
            }
            MetricError::SaveFailed => "failed to save metric".to_string(),
            MetricError::NotFound(_) => "metric not found".to_string(),
            MetricError::Internal(msg) => format!("internal error: {}", msg),
        }
    }
}

impl std::fmt::Display for MetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MetricError {}

//! HTTP DTOs for metric endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::metric::{Metric, MetricIdentity};

/// Body of `POST /metric`. Missing fields decode as empty or zero and are
/// then rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMetricRequest {
    #[serde(default)]
    pub service_url: String,
    #[serde(default)]
    pub metric_name: String,
    #[serde(default)]
    pub pod_name: String,
    #[serde(default)]
    pub metric_value: f64,
}

/// Query string of `GET /metric`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetMetricParams {
    /// RFC 3339 timestamp returned by `POST /metric`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub service_url: String,
    #[serde(default)]
    pub metric_name: String,
    #[serde(default)]
    pub pod_name: String,
}

/// Identity confirmed by storage after a successful write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricIdentityResponse {
    pub time: String,
    pub service_url: String,
    pub metric_name: String,
    pub pod_name: String,
}

impl From<MetricIdentity> for MetricIdentityResponse {
    fn from(identity: MetricIdentity) -> Self {
        Self {
            time: identity.time.to_rfc3339(),
            service_url: identity.service_url,
            metric_name: identity.metric_name,
            pod_name: identity.pod_name,
        }
    }
}

/// A stored metric with its value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricResponse {
    pub time: String,
    pub service_url: String,
    pub metric_name: String,
    pub pod_name: String,
    pub metric_value: f64,
}

impl From<Metric> for MetricResponse {
    fn from(metric: Metric) -> Self {
        let value = metric.value();
        let identity = metric.identity;
        Self {
            time: identity.time.to_rfc3339(),
            service_url: identity.service_url,
            metric_name: identity.metric_name,
            pod_name: identity.pod_name,
            metric_value: value,
        }
    }
}

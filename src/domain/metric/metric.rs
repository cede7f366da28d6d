//! Metric entity and its natural key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Natural key of a metric observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricIdentity {
    pub time: Timestamp,
    pub service_url: String,
    pub metric_name: String,
    pub pod_name: String,
}

impl MetricIdentity {
    pub fn new(
        time: Timestamp,
        service_url: impl Into<String>,
        metric_name: impl Into<String>,
        pod_name: impl Into<String>,
    ) -> Self {
        Self {
            time,
            service_url: service_url.into(),
            metric_name: metric_name.into(),
            pod_name: pod_name.into(),
        }
    }

    /// Checks that every string component of the key is present.
    ///
    /// The time component is valid by construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.service_url.is_empty() {
            return Err(ValidationError::empty_field("service_url"));
        }
        if self.metric_name.is_empty() {
            return Err(ValidationError::empty_field("metric_name"));
        }
        if self.pod_name.is_empty() {
            return Err(ValidationError::empty_field("pod_name"));
        }
        Ok(())
    }
}

impl fmt::Display for MetricIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}/{}#{}",
            self.metric_name, self.service_url, self.pod_name, self.time
        )
    }
}

/// A single metric observation.
///
/// Immutable once stored. The value is carried untouched from ingestion to
/// storage and back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub identity: MetricIdentity,
    pub value: f64,
}

impl Metric {
    pub fn new(identity: MetricIdentity, value: f64) -> Self {
        Self { identity, value }
    }

    pub fn identity(&self) -> &MetricIdentity {
        &self.identity
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.identity.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn identity(service_url: &str, metric_name: &str, pod_name: &str) -> MetricIdentity {
        MetricIdentity::new(Timestamp::now(), service_url, metric_name, pod_name)
    }

    #[test]
    fn complete_identity_is_valid() {
        let id = identity("test-service-go/metrics", "system_cpu_usage", "test-pod");
        assert!(id.validate().is_ok());
    }

    #[test]
    fn empty_service_url_is_rejected() {
        let err = identity("", "system_cpu_usage", "test-pod").validate().unwrap_err();
        assert_eq!(err, ValidationError::empty_field("service_url"));
    }

    #[test]
    fn empty_metric_name_is_rejected() {
        let err = identity("svc", "", "test-pod").validate().unwrap_err();
        assert_eq!(err.field(), "metric_name");
    }

    #[test]
    fn empty_pod_name_is_rejected() {
        let err = identity("svc", "cpu", "").validate().unwrap_err();
        assert_eq!(err.field(), "pod_name");
    }

    #[test]
    fn metric_validation_delegates_to_identity() {
        let metric = Metric::new(identity("svc", "", "pod"), 1.5);
        assert!(metric.validate().is_err());
    }

    #[test]
    fn display_includes_every_component() {
        let id = identity("svc/metrics", "cpu", "pod-1");
        let shown = id.to_string();
        assert!(shown.contains("svc/metrics"));
        assert!(shown.contains("cpu"));
        assert!(shown.contains("pod-1"));
    }

    proptest! {
        #[test]
        fn non_empty_components_always_validate(
            url in ".+",
            name in ".+",
            pod in ".+",
        ) {
            prop_assert!(identity(&url, &name, &pod).validate().is_ok());
        }

        #[test]
        fn any_empty_component_fails_validation(
            url in ".*",
            name in ".*",
            pod in ".*",
            blank in 0usize..3,
        ) {
            let (url, name, pod) = match blank {
                0 => (String::new(), name, pod),
                1 => (url, String::new(), pod),
                _ => (url, name, String::new()),
            };
            prop_assert!(identity(&url, &name, &pod).validate().is_err());
        }
    }
}

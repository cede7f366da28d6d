//! Integration tests for the metrics-collector REST router.
//!
//! Requests go through the full router (layers included) against the
//! in-memory repository, or a failing mock for storage errors.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use monitoring_system::adapters::http::{metric_router, MetricAppState};
use monitoring_system::adapters::memory::InMemoryMetricRepository;
use monitoring_system::domain::foundation::DomainError;
use monitoring_system::domain::metric::{Metric, MetricIdentity};
use monitoring_system::ports::MetricRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Repository whose every call fails like a dropped connection.
struct BrokenMetricRepository;

#[async_trait]
impl MetricRepository for BrokenMetricRepository {
    async fn save(&self, _metric: &Metric) -> Result<MetricIdentity, DomainError> {
        Err(DomainError::database("connection reset by peer"))
    }

    async fn find_by_identity(
        &self,
        _identity: &MetricIdentity,
    ) -> Result<Option<Metric>, DomainError> {
        Err(DomainError::database("connection reset by peer"))
    }
}

fn app_with(repository: Arc<dyn MetricRepository>) -> Router {
    metric_router(MetricAppState::new(repository), Duration::from_secs(5))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryMetricRepository::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn post_metric(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/metric")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_metric(time: &str, service_url: &str, metric_name: &str, pod_name: &str) -> Request<Body> {
    let uri = format!(
        "/metric?time={}&service_url={}&metric_name={}&pod_name={}",
        time, service_url, metric_name, pod_name
    );
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn ping_returns_pong() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Pong");
}

#[tokio::test]
async fn created_metric_can_be_read_back() {
    let app = app();
    let (status, body) = send(
        &app,
        post_metric(json!({
            "service_url": "checkout",
            "metric_name": "latency_ms",
            "pod_name": "pod-7",
            "metric_value": 123.456
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["service_url"], "checkout");
    assert_eq!(created["pod_name"], "pod-7");
    let time = created["time"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get_metric(&time, "checkout", "latency_ms", "pod-7")).await;
    assert_eq!(status, StatusCode::OK);

    let fetched: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched["metric_value"], 123.456);
    assert_eq!(fetched["time"], time.as_str());
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let (status, body) = send(
        &app(),
        post_metric(json!({"service_url": "checkout", "metric_name": "cpu"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "INVALID_METRIC");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/metric")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unparseable_time_is_bad_request() {
    let (status, _) = send(&app(), get_metric("noon", "checkout", "cpu", "pod-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_identity_field_is_bad_request() {
    let (status, body) = send(
        &app(),
        get_metric("2024-01-01T00:00:00Z", "checkout", "", "pod-1"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "INVALID_METRIC_IDENTITY");
}

#[tokio::test]
async fn unknown_metric_is_not_found() {
    let (status, body) = send(
        &app(),
        get_metric("2024-01-01T00:00:00Z", "checkout", "cpu", "pod-1"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "METRIC_NOT_FOUND");
}

#[tokio::test]
async fn storage_failure_on_write_is_generic_500() {
    let app = app_with(Arc::new(BrokenMetricRepository));
    let (status, body) = send(
        &app,
        post_metric(json!({
            "service_url": "checkout",
            "metric_name": "cpu",
            "pod_name": "pod-1",
            "metric_value": 1.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).unwrap();
    assert!(!text.contains("connection reset"));
}

#[tokio::test]
async fn storage_failure_on_read_is_not_found() {
    let app = app_with(Arc::new(BrokenMetricRepository));
    let (status, _) = send(
        &app,
        get_metric("2024-01-01T00:00:00Z", "checkout", "cpu", "pod-1"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

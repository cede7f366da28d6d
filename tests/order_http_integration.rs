//! Integration tests for the order-service REST router.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use monitoring_system::adapters::http::{order_router, OrderAppState};
use monitoring_system::adapters::memory::InMemoryOrderRepository;
use monitoring_system::domain::foundation::DomainError;
use monitoring_system::domain::order::{Order, OrderId};
use monitoring_system::ports::OrderRepository;

/// Repository whose every call fails like a dropped connection.
struct BrokenOrderRepository;

#[async_trait]
impl OrderRepository for BrokenOrderRepository {
    async fn save(&self, _order: &Order) -> Result<OrderId, DomainError> {
        Err(DomainError::database("connection reset by peer"))
    }

    async fn find_by_id(&self, _id: OrderId) -> Result<Option<Order>, DomainError> {
        Err(DomainError::database("connection reset by peer"))
    }
}

fn app_with(repository: Arc<dyn OrderRepository>) -> Router {
    order_router(OrderAppState::new(repository), Duration::from_secs(5))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryOrderRepository::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_order(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/order")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_order(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/order/{}", id))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn created_order_can_be_read_back() {
    let app = app();
    let (status, created) = send(
        &app,
        post_order(json!({"product_id": 10, "quantity": 100, "user_id": 321})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, order) = send(&app, get_order(&id.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        order,
        json!({"id": id, "product_id": 10, "quantity": 100, "user_id": 321})
    );
}

#[tokio::test]
async fn repeated_creates_return_distinct_ids() {
    let app = app();
    let body = json!({"product_id": 1, "quantity": 10, "user_id": 123});

    let (_, first) = send(&app, post_order(body.clone())).await;
    let (_, second) = send(&app, post_order(body)).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn repeated_reads_are_equal() {
    let app = app();
    let (_, created) = send(
        &app,
        post_order(json!({"product_id": 2, "quantity": 3, "user_id": 4})),
    )
    .await;
    let id = created["id"].to_string();

    let (_, first) = send(&app, get_order(&id)).await;
    let (_, second) = send(&app, get_order(&id)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn zero_fields_are_bad_request() {
    let (status, error) = send(
        &app(),
        post_order(json!({"product_id": 0, "quantity": 0, "user_id": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ORDER");
}

#[tokio::test]
async fn negative_id_is_bad_request() {
    let (status, error) = send(&app(), get_order("-123")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ORDER_ID");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let (status, error) = send(&app(), get_order("abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (status, error) = send(&app(), get_order("99999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn ping_returns_pong() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn storage_failure_on_write_is_generic_500() {
    let app = app_with(Arc::new(BrokenOrderRepository));
    let (status, error) = send(
        &app,
        post_order(json!({"product_id": 1, "quantity": 10, "user_id": 123})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "SAVE_FAILED");
    assert!(!error.to_string().contains("connection reset"));
}

#[tokio::test]
async fn storage_failure_on_read_is_not_found() {
    let app = app_with(Arc::new(BrokenOrderRepository));
    let (status, error) = send(&app, get_order("42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ORDER_NOT_FOUND");
}

//! HTTP handlers for order endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    CreateOrderCommand, CreateOrderHandler, GetOrderHandler, GetOrderQuery,
};
use crate::domain::order::{OrderError, OrderId};
use crate::ports::OrderRepository;

use super::dto::{CreateOrderRequest, OrderCreatedResponse, OrderResponse};
use crate::adapters::http::common::{ErrorResponse, INTERNAL_ERROR_MESSAGE};

/// Shared state for the order router.
#[derive(Clone)]
pub struct OrderAppState {
    pub order_repository: Arc<dyn OrderRepository>,
}

impl OrderAppState {
    pub fn new(order_repository: Arc<dyn OrderRepository>) -> Self {
        Self { order_repository }
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.order_repository.clone())
    }

    pub fn get_order_handler(&self) -> GetOrderHandler {
        GetOrderHandler::new(self.order_repository.clone())
    }
}

/// POST /order - Create an order
pub async fn create_order(
    State(state): State<OrderAppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, OrderApiError> {
    let Json(request) = payload?;

    let cmd = CreateOrderCommand {
        product_id: request.product_id,
        quantity: request.quantity,
        user_id: request.user_id,
    };

    let id = state.create_order_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(OrderCreatedResponse::from(id))))
}

/// GET /order/:id - Fetch an order
pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, OrderApiError> {
    let order_id: OrderId = raw_id
        .parse()
        .map_err(|_| OrderApiError::BadRequest(format!("invalid order id: {}", raw_id)))?;

    let order = state
        .get_order_handler()
        .handle(GetOrderQuery { order_id })
        .await?;

    Ok(Json(OrderResponse::new(order_id, order)))
}

/// API error type that converts order errors to HTTP responses.
#[derive(Debug)]
pub enum OrderApiError {
    BadRequest(String),
    Domain(OrderError),
}

impl From<OrderError> for OrderApiError {
    fn from(err: OrderError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for OrderApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for OrderApiError {
    fn into_response(self) -> Response {
        let err = match self {
            OrderApiError::BadRequest(message) => {
                return ErrorResponse::bad_request(message)
                    .into_response_with(StatusCode::BAD_REQUEST);
            }
            OrderApiError::Domain(err) => err,
        };

        let (status, message) = match &err {
            OrderError::InvalidOrder(_) | OrderError::InvalidOrderId(_) => {
                (StatusCode::BAD_REQUEST, err.message())
            }
            OrderError::NotFound(_) => (StatusCode::NOT_FOUND, err.message()),
            OrderError::SaveFailed | OrderError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        ErrorResponse::new(err.code().to_string(), message).into_response_with(status)
    }
}

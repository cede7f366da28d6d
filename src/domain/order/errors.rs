//! Order-specific error types.
//!
//! # Transport Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidOrder | 400 |
//! | InvalidOrderId | 400 |
//! | SaveFailed | 500 |
//! | NotFound | 404 |
//! | Internal | 500 |

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::OrderId;

/// Order-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Product, quantity or user is not strictly positive.
    InvalidOrder(ValidationError),

    /// Lookup id is not strictly positive.
    InvalidOrderId(OrderId),

    /// Persisting the order failed.
    SaveFailed,

    /// No order has this id, or storage could not tell.
    NotFound(OrderId),

    /// Storage behaved in a way the service does not expect.
    Internal(String),
}

impl OrderError {
    pub fn invalid_order(err: ValidationError) -> Self {
        OrderError::InvalidOrder(err)
    }
    pub fn invalid_id(id: OrderId) -> Self {
        OrderError::InvalidOrderId(id)
    }
    pub fn save_failed() -> Self {
        OrderError::SaveFailed
    }
    pub fn not_found(id: OrderId) -> Self {
        OrderError::NotFound(id)
    }
    pub fn internal(message: impl Into<String>) -> Self {
        OrderError::Internal(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::InvalidOrder(_) => ErrorCode::InvalidOrder,
            OrderError::InvalidOrderId(_) => ErrorCode::InvalidOrderId,
            OrderError::SaveFailed => ErrorCode::SaveFailed,
            OrderError::NotFound(_) => ErrorCode::OrderNotFound,
            OrderError::Internal(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            OrderError::InvalidOrder(err) => format!(
                "invalid order: product ID, quantity, and user ID must be positive ({})",
                err
            ),
            OrderError::InvalidOrderId(id) => format!("invalid order ID: {}", id),
            OrderError::SaveFailed => "failed to save order".to_string(),
            OrderError::NotFound(id) => format!("order not found: {}", id),
            OrderError::Internal(msg) => format!("internal error: {}", msg),
        }
    }
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OrderError {}

//! HTTP DTOs for order endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::order::{Order, OrderId};

/// Body of `POST /order`. Missing fields decode as zero and fail validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderCreatedResponse {
    pub id: i64,
}

impl From<OrderId> for OrderCreatedResponse {
    fn from(id: OrderId) -> Self {
        Self { id: id.as_i64() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub user_id: i64,
}

impl OrderResponse {
    /// Builds the response, falling back to `requested` for an unsaved order.
    pub fn new(requested: OrderId, order: Order) -> Self {
        Self {
            id: order.id.unwrap_or(requested).as_i64(),
            product_id: order.product_id,
            quantity: order.quantity,
            user_id: order.user_id,
        }
    }
}

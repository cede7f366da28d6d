//! GetOrderHandler - Query handler for retrieving an order by id.

use std::sync::Arc;

use crate::domain::order::{Order, OrderError, OrderId};
use crate::ports::OrderRepository;

/// Query to get an order by ID.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: OrderId,
}

/// Handler for retrieving orders.
pub struct GetOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<Order, OrderError> {
        let order_id = query.order_id;

        if order_id.validate().is_err() {
            tracing::warn!(order_id = %order_id, "invalid order ID");
            return Err(OrderError::invalid_id(order_id));
        }

        match self.repository.find_by_id(order_id).await {
            Ok(Some(order)) => {
                tracing::info!(order_id = %order_id, "order successfully retrieved");
                Ok(order)
            }
            Ok(None) => {
                tracing::warn!(order_id = %order_id, "order not found");
                Err(OrderError::not_found(order_id))
            }
            Err(err) => {
                tracing::error!(
                    order_id = %order_id,
                    code = %err.code,
                    error = %err,
                    "failed to find order"
                );
                Err(OrderError::not_found(order_id))
            }
        }
    }
}

//! CreateOrderHandler - Command handler for placing orders.

use std::sync::Arc;

use crate::domain::order::{Order, OrderError, OrderId};
use crate::ports::OrderRepository;

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub product_id: i64,
    pub quantity: i64,
    pub user_id: i64,
}

/// Handler for placing orders.
pub struct CreateOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl CreateOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<OrderId, OrderError> {
        let order = Order::new(cmd.product_id, cmd.quantity, cmd.user_id);

        if let Err(err) = order.validate() {
            tracing::warn!(
                product_id = order.product_id,
                quantity = order.quantity,
                user_id = order.user_id,
                field = err.field(),
                "validation failed for order"
            );
            return Err(OrderError::invalid_order(err));
        }
        tracing::debug!(
            product_id = order.product_id,
            quantity = order.quantity,
            user_id = order.user_id,
            "order passed validation"
        );

        let id = match self.repository.save(&order).await {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(code = %err.code, error = %err, "failed to save order");
                return Err(OrderError::save_failed());
            }
        };

        if id.validate().is_err() {
            tracing::error!(order_id = %id, "storage assigned a non-positive order id");
            return Err(OrderError::internal("storage assigned an invalid order id"));
        }

        tracing::info!(order_id = %id, "order successfully created");
        Ok(id)
    }
}

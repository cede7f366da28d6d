//! PostgreSQL implementation of OrderRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, warn};

use super::deadline::within;
use crate::domain::foundation::DomainError;
use crate::domain::order::{Order, OrderId};
use crate::ports::OrderRepository;

/// Stores orders in the `order` table; ids come from its BIGSERIAL column.
pub struct PostgresOrderRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    product_id: i64,
    quantity: i64,
    user_id: i64,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order::reconstitute(
            OrderId::from_raw(row.id),
            row.product_id,
            row.quantity,
            row.user_id,
        )
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: &Order) -> Result<OrderId, DomainError> {
        let id: i64 = within(
            self.query_timeout,
            "insert order",
            sqlx::query_scalar(
                r#"
                INSERT INTO "order" (product_id, quantity, user_id)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(order.product_id)
            .bind(order.quantity)
            .bind(order.user_id)
            .fetch_one(&self.pool),
        )
        .await?;

        info!(order_id = id, "order row inserted");
        Ok(OrderId::from_raw(id))
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> = within(
            self.query_timeout,
            "load order",
            sqlx::query_as(
                r#"
                SELECT id, product_id, quantity, user_id
                FROM "order"
                WHERE id = $1
                "#,
            )
            .bind(id.as_i64())
            .fetch_optional(&self.pool),
        )
        .await?;

        if row.is_none() {
            warn!(order_id = id.as_i64(), "no order row matches id");
        }
        Ok(row.map(Order::from))
    }
}

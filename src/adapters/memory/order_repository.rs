//! In-memory implementation of OrderRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::order::{Order, OrderId};
use crate::ports::OrderRepository;

/// Orders keyed by id; ids are assigned from a counter starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored orders
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<OrderId, DomainError> {
        let id = OrderId::from_raw(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = order.clone().with_id(id);
        self.orders.write().await.insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryOrderRepository::new();

        let first = repo.save(&Order::new(1, 2, 3)).await.unwrap();
        let second = repo.save(&Order::new(1, 2, 3)).await.unwrap();

        assert_eq!(first.as_i64(), 1);
        assert_eq!(second.as_i64(), 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn find_returns_order_with_assigned_id() {
        let repo = InMemoryOrderRepository::new();
        let id = repo.save(&Order::new(10, 5, 42)).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.product_id, 10);
        assert_eq!(found.quantity, 5);
        assert_eq!(found.user_id, 42);
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let repo = InMemoryOrderRepository::new();
        assert_eq!(repo.find_by_id(OrderId::from_raw(7)).await.unwrap(), None);
    }
}

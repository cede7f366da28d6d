//! Order repository port.
//!
//! Defines the contract for persisting and retrieving orders. Identifiers
//! are assigned by the implementation on save.

use crate::domain::foundation::DomainError;
use crate::domain::order::{Order, OrderId};
use async_trait::async_trait;

/// Repository port for order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save a new order and return the identifier storage assigned to it.
    ///
    /// Any `id` already set on the order is ignored.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    /// - `Timeout` when the per-call deadline elapses
    async fn save(&self, order: &Order) -> Result<OrderId, DomainError>;

    /// Find an order by its identifier.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OrderRepository) {}
    }
}

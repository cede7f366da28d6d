//! Order entity and its identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Identifier assigned to an order by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wraps a raw id without checking it; see [`OrderId::validate`].
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Ids handed out by storage are strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.0 <= 0 {
            return Err(ValidationError::not_positive("id", self.0));
        }
        Ok(())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Absent until the order has been saved.
    pub id: Option<OrderId>,
    pub product_id: i64,
    pub quantity: i64,
    pub user_id: i64,
}

impl Order {
    /// Creates an unsaved order.
    pub fn new(product_id: i64, quantity: i64, user_id: i64) -> Self {
        Self {
            id: None,
            product_id,
            quantity,
            user_id,
        }
    }

    /// Rebuilds a stored order.
    pub fn reconstitute(id: OrderId, product_id: i64, quantity: i64, user_id: i64) -> Self {
        Self {
            id: Some(id),
            product_id,
            quantity,
            user_id,
        }
    }

    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    /// Product, quantity and user must all be strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id <= 0 {
            return Err(ValidationError::not_positive("product_id", self.product_id));
        }
        if self.quantity <= 0 {
            return Err(ValidationError::not_positive("quantity", self.quantity));
        }
        if self.user_id <= 0 {
            return Err(ValidationError::not_positive("user_id", self.user_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn positive_fields_validate() {
        assert!(Order::new(1, 10, 123).validate().is_ok());
    }

    #[test]
    fn all_zero_order_is_rejected_on_product_first() {
        let err = Order::new(0, 0, 0).validate().unwrap_err();
        assert_eq!(err, ValidationError::not_positive("product_id", 0));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = Order::new(1, -5, 1).validate().unwrap_err();
        assert_eq!(err.field(), "quantity");
    }

    #[test]
    fn zero_user_is_rejected() {
        let err = Order::new(1, 1, 0).validate().unwrap_err();
        assert_eq!(err.field(), "user_id");
    }

    #[test]
    fn new_order_has_no_id_until_assigned() {
        let order = Order::new(1, 2, 3);
        assert!(order.id.is_none());
        let saved = order.with_id(OrderId::from_raw(7));
        assert_eq!(saved.id, Some(OrderId::from_raw(7)));
    }

    #[test]
    fn order_id_validation() {
        assert!(OrderId::from_raw(1).validate().is_ok());
        assert!(OrderId::from_raw(0).validate().is_err());
        assert!(OrderId::from_raw(-123).validate().is_err());
    }

    #[test]
    fn order_id_parses_from_string() {
        assert_eq!("42".parse::<OrderId>().unwrap(), OrderId::from_raw(42));
        assert_eq!("-123".parse::<OrderId>().unwrap(), OrderId::from_raw(-123));
        assert!("abc".parse::<OrderId>().is_err());
    }

    proptest! {
        #[test]
        fn strictly_positive_fields_always_validate(
            product in 1i64..=i64::MAX,
            quantity in 1i64..=i64::MAX,
            user in 1i64..=i64::MAX,
        ) {
            prop_assert!(Order::new(product, quantity, user).validate().is_ok());
        }

        #[test]
        fn any_non_positive_field_fails(
            product in any::<i64>(),
            quantity in any::<i64>(),
            user in i64::MIN..=0,
        ) {
            prop_assert!(Order::new(product, quantity, user).validate().is_err());
        }
    }
}

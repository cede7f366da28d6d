//! Order command and query handlers.

mod create_order;
mod get_order;

pub use create_order::{CreateOrderCommand, CreateOrderHandler};
pub use get_order::{GetOrderHandler, GetOrderQuery};

//! Order module - Purchase orders identified by a storage-assigned id.

mod errors;
mod order;

pub use errors::OrderError;
pub use order::{Order, OrderId};

use async_trait::async_trait;

use super::errors::DomainError;
use super::order::{NewOrder, OrderId};

/// Append-only sink for submitted orders.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn insert(&self, record: NewOrder) -> Result<OrderId, DomainError>;
}

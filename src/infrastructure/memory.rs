use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderId};
use crate::domain::ports::OrderRepository;

/// Process-local order sink. Identifiers are random v4 UUIDs.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<(OrderId, NewOrder)>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record in insertion order.
    pub fn stored(&self) -> Vec<(OrderId, NewOrder)> {
        match self.orders.lock() {
            Ok(orders) => orders.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, record: NewOrder) -> Result<OrderId, DomainError> {
        let id = OrderId::new(Uuid::new_v4().simple().to_string());
        let mut orders = self
            .orders
            .lock()
            .map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;
        orders.push((id.clone(), record));
        Ok(id)
    }
}

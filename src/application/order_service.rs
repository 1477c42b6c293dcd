use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderInput};
use crate::domain::ports::OrderRepository;

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Persists the input as a submitted order. No business validation is
    /// applied and identical inputs produce distinct orders.
    pub async fn submit_order(&self, input: OrderInput) -> Result<Order, DomainError> {
        let record = NewOrder::submitted(input);
        let id = self.repo.insert(record.clone()).await?;
        Ok(record.into_order(id))
    }
}

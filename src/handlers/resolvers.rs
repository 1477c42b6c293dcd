use async_graphql::{ErrorExtensions, Object, Result};

use crate::application::order_service::OrderService;
use crate::errors::AppError;
use crate::infrastructure::catalog::CatalogStore;
use crate::schema::{Order, OrderInput, Product};

pub struct QueryRoot {
    catalog: CatalogStore,
}

impl QueryRoot {
    pub fn new(catalog: CatalogStore) -> Self {
        Self { catalog }
    }
}

#[Object]
impl QueryRoot {
    /// Every catalog item, unfiltered and in catalog order.
    async fn products(&self) -> Option<Vec<Option<Product>>> {
        Some(
            self.catalog
                .all()
                .iter()
                .map(|p| Some(Product::from(p)))
                .collect(),
        )
    }
}

pub struct MutationRoot {
    orders: OrderService,
}

impl MutationRoot {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}

#[Object]
impl MutationRoot {
    /// Persist an order. The returned order is always marked as submitted.
    async fn submit_order(&self, order: OrderInput) -> Result<Order> {
        match self.orders.submit_order(order.into()).await {
            Ok(order) => Ok(order.into()),
            Err(e) => {
                log::error!("Failed to submit order: {}", e);
                Err(AppError::from(e).extend())
            }
        }
    }
}

//! GraphQL contract exposed by the service.
//!
//! Catalog items and orders are two distinct types. `OrderInput` has no
//! `submit` field; clients cannot set it.

use std::sync::Arc;

use async_graphql::{EmptySubscription, InputObject, Schema, SimpleObject, ID};

use crate::application::order_service::OrderService;
use crate::domain::order;
use crate::domain::ports::OrderRepository;
use crate::domain::product;
use crate::handlers::resolvers::{MutationRoot, QueryRoot};
use crate::infrastructure::catalog::CatalogStore;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// A catalog item. Every field is nullable in the contract.
#[derive(Debug, Clone, SimpleObject)]
pub struct Product {
    pub id: Option<i32>,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub avg_rating: Option<f64>,
    pub total_reviews: Option<i32>,
}

impl From<&product::Product> for Product {
    fn from(p: &product::Product) -> Self {
        Self {
            id: Some(p.id),
            image_url: Some(p.image_url.clone()),
            title: Some(p.title.clone()),
            price: Some(p.price),
            avg_rating: Some(p.avg_rating),
            total_reviews: Some(p.total_reviews),
        }
    }
}

/// A persisted order.
#[derive(Debug, Clone, SimpleObject)]
pub struct Order {
    #[graphql(name = "_id")]
    pub id: ID,
    pub products: Vec<String>,
    pub total: f64,
    pub submit: bool,
    pub name: String,
    pub address: String,
}

impl From<order::Order> for Order {
    fn from(o: order::Order) -> Self {
        Self {
            id: ID(o.id.into()),
            products: o.products,
            total: o.total,
            submit: o.submit,
            name: o.name,
            address: o.address,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct OrderInput {
    pub products: Vec<String>,
    pub total: f64,
    pub name: String,
    pub address: String,
}

impl From<OrderInput> for order::OrderInput {
    fn from(i: OrderInput) -> Self {
        Self {
            products: i.products,
            total: i.total,
            name: i.name,
            address: i.address,
        }
    }
}

/// Wire the resolvers to their collaborators.
pub fn build_schema(catalog: CatalogStore, repo: Arc<dyn OrderRepository>) -> AppSchema {
    Schema::build(
        QueryRoot::new(catalog),
        MutationRoot::new(OrderService::new(repo)),
        EmptySubscription,
    )
    .finish()
}

/// SDL of the contract, independent of any backing store.
pub fn schema_sdl() -> String {
    Schema::build(
        QueryRoot::new(CatalogStore::new(vec![])),
        MutationRoot::new(OrderService::new(Arc::new(
            crate::infrastructure::memory::InMemoryOrderRepository::new(),
        ))),
        EmptySubscription,
    )
    .finish()
    .sdl()
}

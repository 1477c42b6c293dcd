use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::order::NewOrder;

/// Stored shape of an order in the orders collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub products: Vec<String>,
    pub total: f64,
    pub name: String,
    pub address: String,
    pub submit: bool,
}

impl From<NewOrder> for OrderDocument {
    fn from(record: NewOrder) -> Self {
        Self {
            id: None,
            products: record.products,
            total: record.total,
            name: record.name,
            address: record.address,
            submit: record.submit,
        }
    }
}

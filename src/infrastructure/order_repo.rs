use async_trait::async_trait;
use mongodb::bson::Bson;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Collection, Database};

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderId};
use crate::domain::ports::OrderRepository;

use super::models::OrderDocument;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<MongoError> for DomainError {
    fn from(e: MongoError) -> Self {
        match *e.kind {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Authentication { .. } => DomainError::StorageUnavailable(e.to_string()),
            _ => DomainError::WriteFailed(e.to_string()),
        }
    }
}

fn order_id_from_bson(id: Bson) -> OrderId {
    match id {
        Bson::ObjectId(oid) => OrderId::new(oid.to_hex()),
        Bson::String(s) => OrderId::new(s),
        other => OrderId::new(other.to_string()),
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct MongoOrderRepository {
    collection: Collection<OrderDocument>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    async fn insert(&self, record: NewOrder) -> Result<OrderId, DomainError> {
        let document = OrderDocument::from(record);
        let result = self.collection.insert_one(&document).await?;
        Ok(order_id_from_bson(result.inserted_id))
    }
}

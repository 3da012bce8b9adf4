use crate::model::Order;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Orders in insertion order; updates never reorder or remove entries.
    async fn list_orders(&self) -> StoreResult<Vec<Order>>;

    /// Replaces the status of an existing order in place and returns the
    /// updated record. The status string is stored verbatim; there are no
    /// transition rules.
    async fn update_status(&self, order_id: i64, status: String) -> StoreResult<Order>;

    fn backend_name(&self) -> &'static str;
}

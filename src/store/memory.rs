//! In-memory order store.
//!
//! # Purpose
//! Owns the mutable order ledger. Orders exist only for the lifetime of the
//! process and only their `status` field ever changes; there is no create,
//! delete, or expiry. Every instance starts from the same seeded demo
//! orders unless constructed with an explicit seed.
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::RwLock;

use crate::model::Order;
use crate::store::{OrderStore, StoreError, StoreResult};

/// Insertion-ordered orders plus an id index into the vec.
#[derive(Debug, Default)]
struct OrderLedger {
    orders: Vec<Order>,
    index: HashMap<i64, usize>,
}

pub struct InMemoryOrderStore {
    // One lock around the whole ledger so a status update is a single
    // critical section: lookup, mutate, read back.
    inner: RwLock<OrderLedger>,
}

impl InMemoryOrderStore {
    pub fn new(seed: Vec<Order>) -> Self {
        let mut ledger = OrderLedger::default();
        for order in seed {
            ledger.index.insert(order.id, ledger.orders.len());
            ledger.orders.push(order);
        }
        Self {
            inner: RwLock::new(ledger),
        }
    }

    pub fn with_sample_orders() -> Self {
        Self::new(sample_orders())
    }
}

/// The fixed demo orders every instance starts with. Creation times are
/// display strings rendered relative to process start.
pub fn sample_orders() -> Vec<Order> {
    let now = Local::now();
    let stamp = |minutes_ago: i64| {
        (now - chrono::Duration::minutes(minutes_ago))
            .format("%H:%M")
            .to_string()
    };
    vec![
        Order {
            id: 1,
            user_id: 1,
            items: Vec::new(),
            total: 45.90,
            status: "Em preparo".to_string(),
            created_at: stamp(30),
            customer_name: "João Silva".to_string(),
        },
        Order {
            id: 2,
            user_id: 2,
            items: Vec::new(),
            total: 35.80,
            status: "Saiu para entrega".to_string(),
            created_at: stamp(15),
            customer_name: "Ana Souza".to_string(),
        },
        Order {
            id: 3,
            user_id: 3,
            items: Vec::new(),
            total: 52.70,
            status: "Entregue".to_string(),
            created_at: stamp(60),
            customer_name: "Pedro Lima".to_string(),
        },
    ]
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.inner.read().await.orders.clone())
    }

    async fn update_status(&self, order_id: i64, status: String) -> StoreResult<Order> {
        let mut ledger = self.inner.write().await;
        let Some(&position) = ledger.index.get(&order_id) else {
            return Err(StoreError::NotFound(format!("order {order_id}")));
        };
        let order = &mut ledger.orders[position];
        order.status = status;
        Ok(order.clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

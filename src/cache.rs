//! In-memory catalog cache for the upstream collections.
//!
//! # Purpose
//! Holds one snapshot per upstream collection (foods, restaurants, users)
//! behind read/write locks, plus a single shared refresh timestamp. The
//! refresh cycle replaces whole snapshots; there is no per-entry state.
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::model::{Food, Restaurant, User};

/// One cached collection.
///
/// Empty and never-populated are the same state: a slot either holds a
/// complete upstream snapshot or nothing at all. A successful fetch that
/// returned an empty array therefore reads as "absent".
#[derive(Debug)]
pub struct CacheSlot<T> {
    // Label for the cached-entries gauge.
    name: &'static str,
    // RwLock allows concurrent readers while a refresh takes exclusive access.
    items: RwLock<Vec<T>>,
}

impl<T: Clone> CacheSlot<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Swaps in a complete snapshot, replacing whatever was there.
    pub async fn replace(&self, items: Vec<T>) {
        metrics::gauge!("entrega_cached_entries", "collection" => self.name)
            .set(items.len() as f64);
        *self.items.write().await = items;
    }

    /// Clones the snapshot out of the lock, or `None` when the slot is empty.
    pub async fn snapshot(&self) -> Option<Vec<T>> {
        let guard = self.items.read().await;
        if guard.is_empty() {
            None
        } else {
            Some(guard.clone())
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

/// Per-collection entry counts, as reported by the health endpoint.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct CachedCounts {
    pub foods: usize,
    pub restaurants: usize,
    pub users: usize,
}

pub struct CatalogCache {
    pub foods: CacheSlot<Food>,
    pub restaurants: CacheSlot<Restaurant>,
    pub users: CacheSlot<User>,
    /// When the last refresh cycle finished, successful or not. One shared
    /// stamp for all three collections.
    refreshed_at: RwLock<Option<Instant>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            foods: CacheSlot::new("foods"),
            restaurants: CacheSlot::new("restaurants"),
            users: CacheSlot::new("users"),
            refreshed_at: RwLock::new(None),
        }
    }

    pub async fn mark_refreshed(&self) {
        *self.refreshed_at.write().await = Some(Instant::now());
    }

    /// Time since the last completed refresh cycle, or `None` before the
    /// first one.
    pub async fn age(&self) -> Option<Duration> {
        self.refreshed_at.read().await.map(|at| at.elapsed())
    }

    /// Fresh means a refresh cycle finished within `ttl` AND the foods slot
    /// is populated. Foods emptiness forces a refresh regardless of age; the
    /// other two collections get no such treatment.
    pub async fn is_fresh(&self, ttl: Duration) -> bool {
        let within_ttl = match self.age().await {
            Some(age) => age < ttl,
            None => false,
        };
        within_ttl && !self.foods.is_empty().await
    }

    pub async fn counts(&self) -> CachedCounts {
        CachedCounts {
            foods: self.foods.len().await,
            restaurants: self.restaurants.len().await,
            users: self.users.len().await,
        }
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

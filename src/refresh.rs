//! Read-through refresh policy for the catalog cache.
//!
//! # Purpose
//! Decides when the cached collections are stale and runs the best-effort
//! refresh cycle that brings them up to date. Callers on the request path
//! invoke [`Refresher::ensure_fresh`] before reading the cache; it never
//! fails and never blocks on anything but the single in-flight cycle.
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::cache::{CacheSlot, CatalogCache};
use crate::upstream::UpstreamClient;

/// Per-collection success flags for one refresh cycle. Failure is data
/// here, not control flow; a false flag means the slot kept whatever it
/// held before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub foods: bool,
    pub restaurants: bool,
    pub users: bool,
}

/// What `ensure_fresh` did for this caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCycle {
    /// The cache was already fresh; no upstream traffic happened.
    Skipped,
    /// A cycle ran on behalf of this caller.
    Completed(RefreshOutcome),
}

pub struct Refresher {
    cache: Arc<CatalogCache>,
    upstream: Arc<UpstreamClient>,
    ttl: Duration,
    // Single-flight gate: one cycle at a time, concurrent callers queue
    // behind it and re-check freshness instead of refetching.
    gate: Mutex<()>,
}

impl Refresher {
    pub fn new(cache: Arc<CatalogCache>, upstream: Arc<UpstreamClient>, ttl: Duration) -> Self {
        Self {
            cache,
            upstream,
            ttl,
            gate: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Runs a refresh cycle if the cache is stale, best effort.
    ///
    /// Collections that fail to fetch or decode are logged at WARN and left
    /// as they were; the other collections still update. The refresh stamp
    /// advances even when every collection fails, so a broken upstream is
    /// retried once per TTL rather than on every request (for as long as
    /// foods has ever been populated).
    pub async fn ensure_fresh(&self) -> RefreshCycle {
        if self.cache.is_fresh(self.ttl).await {
            return RefreshCycle::Skipped;
        }
        let _flight = self.gate.lock().await;
        // Another caller may have finished a cycle while we queued.
        if self.cache.is_fresh(self.ttl).await {
            return RefreshCycle::Skipped;
        }

        let outcome = RefreshOutcome {
            foods: self
                .refresh_collection("foods", "/foods", &self.cache.foods)
                .await,
            restaurants: self
                .refresh_collection("restaurants", "/restaurants", &self.cache.restaurants)
                .await,
            users: self
                .refresh_collection("users", "/users", &self.cache.users)
                .await,
        };
        self.cache.mark_refreshed().await;
        metrics::counter!("entrega_refresh_cycles_total").increment(1);
        tracing::debug!(?outcome, "catalog refresh cycle finished");
        RefreshCycle::Completed(outcome)
    }

    async fn refresh_collection<T>(
        &self,
        name: &'static str,
        path: &str,
        slot: &CacheSlot<T>,
    ) -> bool
    where
        T: DeserializeOwned + Clone,
    {
        let body = match self.upstream.fetch(path).await {
            Ok(body) => body,
            Err(err) => {
                metrics::counter!("entrega_refresh_failures_total", "collection" => name)
                    .increment(1);
                tracing::warn!(error = %err, collection = name, "catalog fetch failed");
                return false;
            }
        };
        let items: Vec<T> = match serde_json::from_slice(&body) {
            Ok(items) => items,
            Err(err) => {
                metrics::counter!("entrega_refresh_failures_total", "collection" => name)
                    .increment(1);
                tracing::warn!(error = %err, collection = name, "catalog body decode failed");
                return false;
            }
        };
        let count = items.len();
        slot.replace(items).await;
        tracing::info!(collection = name, count, "catalog cache updated");
        true
    }
}

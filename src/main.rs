//! Delivery gateway HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the upstream client, the catalog cache, and the
//! order store, then starts the API server and the metrics endpoint.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup
//! logic.
mod api;
mod app;
mod cache;
mod config;
mod model;
mod observability;
mod refresh;
mod store;
mod upstream;

use app::{AppState, build_router};
use cache::CatalogCache;
use refresh::Refresher;
use std::future::Future;
use std::sync::Arc;
use store::memory::InMemoryOrderStore;
use upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::GatewayConfig::from_env_or_yaml().expect("gateway config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::GatewayConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("entrega-gateway");
    let state = build_state(&config)?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state.clone());

    // Warm the catalog in the background so the first request usually finds
    // a populated cache. Failures are tolerated; the request path retries.
    let warm_refresher = state.refresher.clone();
    let warm_task = tokio::spawn(async move {
        let cycle = warm_refresher.ensure_fresh().await;
        tracing::info!(?cycle, "catalog warm-up finished");
    });

    let addr = config.bind_addr;
    tracing::info!(
        %addr,
        upstream = %state.upstream.base_url(),
        store = state.orders.backend_name(),
        "delivery gateway listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    warm_task.abort();
    let _ = metrics_task.await;
    let _ = warm_task.await;
    Ok(())
}

fn build_state(config: &config::GatewayConfig) -> anyhow::Result<AppState> {
    let upstream = Arc::new(UpstreamClient::new(
        &config.upstream_base_url,
        config.upstream_timeout,
    )?);
    let cache = Arc::new(CatalogCache::new());
    let refresher = Arc::new(Refresher::new(
        cache.clone(),
        upstream.clone(),
        config.cache_ttl,
    ));
    Ok(AppState {
        cache,
        refresher,
        upstream,
        orders: Arc::new(InMemoryOrderStore::with_sample_orders()),
    })
}

//! System/health API handlers.
//!
//! # Purpose and responsibility
//! Provides a lightweight diagnostics endpoint over the cache state.
//!
//! # Where it fits in the gateway
//! Used by operators, probes, and the frontend to confirm the gateway is up
//! and to see how warm the catalog cache is.
//!
//! # Key invariants and assumptions
//! - Health must be fast and side-effect free: it reads cache state but
//!   never triggers a refresh cycle.
use axum::Json;
use axum::extract::State;
use chrono::Local;

use crate::api::types::HealthStatus;
use crate::app::AppState;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses(
        (status = 200, description = "Gateway health and cache diagnostics", body = HealthStatus)
    )
)]
/// Return gateway health and cache diagnostics.
///
/// # What it does
/// Reports current time, cache age, and per-collection cached entry counts.
///
/// # Why it exists
/// Supports liveness checks and makes cache staleness observable without
/// touching the upstream.
///
/// # Errors
/// - Does not return errors.
pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let age = state.cache.age().await;
    Json(HealthStatus {
        status: "OK".to_string(),
        message: "delivery gateway is running".to_string(),
        time: Local::now().to_rfc3339(),
        cache_age: age.map(|age| format!("{age:?}")),
        cached_items: state.cache.counts().await,
    })
}

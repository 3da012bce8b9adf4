//! Gateway HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and shared helpers for id parsing and the
//! cached-or-passthrough list flow.
pub mod error;
pub mod foods;
pub mod openapi;
pub mod orders;
pub mod restaurants;
pub mod system;
pub mod types;
pub mod users;

use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;
use serde::Serialize;

use crate::api::error::{ApiError, api_upstream, api_validation_error};
use crate::api::types::ListPayload;
use crate::app::AppState;
use crate::cache::CacheSlot;

/// Parses a numeric path segment, rejecting the request before any upstream
/// traffic when it is not an integer.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| api_validation_error(&format!("invalid {what}: {raw}")))
}

/// Wraps an upstream body so it is served byte-for-byte as JSON.
pub(crate) fn json_passthrough(body: Bytes) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

/// The shared list flow: refresh if stale, serve the cached snapshot when
/// populated, otherwise pass the upstream body through without caching it.
pub(crate) async fn list_catalog<T>(
    state: &AppState,
    slot: &CacheSlot<T>,
    path: &str,
    context: &str,
) -> Result<ListPayload<T>, ApiError>
where
    T: Clone + Serialize,
{
    state.refresher.ensure_fresh().await;
    if let Some(items) = slot.snapshot().await {
        return Ok(ListPayload::Cached(items));
    }
    let body = state
        .upstream
        .fetch(path)
        .await
        .map_err(|err| api_upstream(context, &err))?;
    Ok(ListPayload::Passthrough(body))
}

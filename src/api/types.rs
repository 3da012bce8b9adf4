//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the gateway REST API and OpenAPI schema
//! generation.
use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cache::CachedCounts;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    /// Current server time, RFC 3339.
    pub time: String,
    /// Time since the last refresh cycle, or null before the first one.
    pub cache_age: Option<String>,
    pub cached_items: CachedCounts,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderStatusUpdateRequest {
    pub status: String,
}

/// Body for the collection list endpoints.
///
/// A populated cache serves typed, re-serialized entities; the fallback path
/// passes the upstream body through byte-for-byte without caching it. Both
/// render as a plain JSON array.
#[derive(Debug)]
pub enum ListPayload<T> {
    Cached(Vec<T>),
    Passthrough(Bytes),
}

impl<T: Serialize> IntoResponse for ListPayload<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            ListPayload::Cached(items) => Json(items).into_response(),
            ListPayload::Passthrough(body) => {
                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
        }
    }
}

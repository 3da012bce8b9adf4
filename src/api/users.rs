//! User API handlers.
//!
//! # Purpose
//! Serves the user collection: cached list with raw fallback, and direct
//! upstream passthrough for single users.
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::api::error::{ApiError, api_upstream};
use crate::api::types::ListPayload;
use crate::api::{json_passthrough, list_catalog, parse_id};
use crate::app::AppState;
use crate::model::User;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 502, description = "Upstream failure with an empty cache", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_users(
    State(state): State<AppState>,
) -> Result<ListPayload<User>, ApiError> {
    list_catalog(&state, &state.cache.users, "/users", "user list fetch failed").await
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "One user, straight from the upstream", body = User),
        (status = 400, description = "Non-numeric id", body = crate::api::types::ErrorResponse),
        (status = 502, description = "Upstream failure", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "user id")?;
    // Single lookups always hit the upstream; the cache only serves lists.
    let body = state
        .upstream
        .fetch(&format!("/users/{id}"))
        .await
        .map_err(|err| api_upstream("user fetch failed", &err))?;
    Ok(json_passthrough(body))
}

//! Food API handlers.
//!
//! # Purpose
//! Serves the food collection plus the two in-process filters (by restaurant,
//! by category). Filters prefer the cached snapshot and fall back to a
//! fetch-then-decode of the whole collection; filtered responses are always
//! typed JSON, never raw passthrough.
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::api::error::{ApiError, api_internal_message, api_upstream};
use crate::api::types::ListPayload;
use crate::api::{json_passthrough, list_catalog, parse_id};
use crate::app::AppState;
use crate::model::Food;

#[utoipa::path(
    get,
    path = "/api/foods",
    tag = "foods",
    responses(
        (status = 200, description = "All foods", body = [Food]),
        (status = 502, description = "Upstream failure with an empty cache", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_foods(
    State(state): State<AppState>,
) -> Result<ListPayload<Food>, ApiError> {
    list_catalog(&state, &state.cache.foods, "/foods", "food list fetch failed").await
}

#[utoipa::path(
    get,
    path = "/api/foods/{id}",
    tag = "foods",
    params(
        ("id" = i64, Path, description = "Food identifier")
    ),
    responses(
        (status = 200, description = "One food, straight from the upstream", body = Food),
        (status = 400, description = "Non-numeric id", body = crate::api::types::ErrorResponse),
        (status = 502, description = "Upstream failure", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_food(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "food id")?;
    let body = state
        .upstream
        .fetch(&format!("/foods/{id}"))
        .await
        .map_err(|err| api_upstream("food fetch failed", &err))?;
    Ok(json_passthrough(body))
}

#[utoipa::path(
    get,
    path = "/api/foods/restaurant/{restaurant_id}",
    tag = "foods",
    params(
        ("restaurant_id" = i64, Path, description = "Restaurant identifier")
    ),
    responses(
        (status = 200, description = "Foods offered by one restaurant; empty array when none match", body = [Food]),
        (status = 400, description = "Non-numeric restaurant id", body = crate::api::types::ErrorResponse),
        (status = 502, description = "Upstream failure with an empty cache", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn foods_by_restaurant(
    Path(restaurant_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let restaurant_id = parse_id(&restaurant_id, "restaurant id")?;
    let foods = foods_for_filtering(&state).await?;
    let items: Vec<Food> = foods
        .into_iter()
        .filter(|food| food.restaurant_id == restaurant_id)
        .collect();
    // An unknown restaurant is an empty result, not an error.
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/foods/category/{category}",
    tag = "foods",
    params(
        ("category" = String, Path, description = "Category name, matched by exact string equality")
    ),
    responses(
        (status = 200, description = "Foods in one category; empty array when none match", body = [Food]),
        (status = 502, description = "Upstream failure with an empty cache", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn foods_by_category(
    Path(category): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let foods = foods_for_filtering(&state).await?;
    // The category segment is compared verbatim; "lanches" and "Lanches"
    // are different categories.
    let items: Vec<Food> = foods
        .into_iter()
        .filter(|food| food.category == category)
        .collect();
    Ok(Json(items))
}

/// Returns the full food collection for in-process filtering: the cached
/// snapshot when present, otherwise a direct fetch-and-decode. The decoded
/// fallback is not written back to the cache.
async fn foods_for_filtering(state: &AppState) -> Result<Vec<Food>, ApiError> {
    state.refresher.ensure_fresh().await;
    if let Some(foods) = state.cache.foods.snapshot().await {
        return Ok(foods);
    }
    let body = state
        .upstream
        .fetch("/foods")
        .await
        .map_err(|err| api_upstream("food list fetch failed", &err))?;
    serde_json::from_slice(&body).map_err(|err| {
        tracing::error!(error = %err, "food body decode failed");
        api_internal_message("failed to decode food data")
    })
}

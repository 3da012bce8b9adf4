//! Restaurant API handlers.
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::api::error::{ApiError, api_upstream};
use crate::api::types::ListPayload;
use crate::api::{json_passthrough, list_catalog, parse_id};
use crate::app::AppState;
use crate::model::Restaurant;

#[utoipa::path(
    get,
    path = "/api/restaurants",
    tag = "restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [Restaurant]),
        (status = 502, description = "Upstream failure with an empty cache", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<ListPayload<Restaurant>, ApiError> {
    list_catalog(
        &state,
        &state.cache.restaurants,
        "/restaurants",
        "restaurant list fetch failed",
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    tag = "restaurants",
    params(
        ("id" = i64, Path, description = "Restaurant identifier")
    ),
    responses(
        (status = 200, description = "One restaurant, straight from the upstream", body = Restaurant),
        (status = 400, description = "Non-numeric id", body = crate::api::types::ErrorResponse),
        (status = 502, description = "Upstream failure", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_restaurant(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "restaurant id")?;
    let body = state
        .upstream
        .fetch(&format!("/restaurants/{id}"))
        .await
        .map_err(|err| api_upstream("restaurant fetch failed", &err))?;
    Ok(json_passthrough(body))
}

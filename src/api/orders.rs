//! Order API handlers.
//!
//! # Purpose
//! Serves the locally owned order ledger: the full list and in-place status
//! updates. Orders never touch the upstream or the catalog cache.
use axum::Json;
use axum::extract::{Path, State};

use crate::api::error::{ApiError, api_internal, api_not_found};
use crate::api::parse_id;
use crate::api::types::OrderStatusUpdateRequest;
use crate::app::AppState;
use crate::model::Order;
use crate::store::StoreError;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses(
        (status = 200, description = "All orders in insertion order", body = [Order])
    )
)]
pub(crate) async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, ApiError> {
    match state.orders.list_orders().await {
        Ok(orders) => Ok(Json(orders)),
        Err(err) => Err(api_internal("failed to list orders", &err)),
    }
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "orders",
    params(
        ("id" = i64, Path, description = "Order identifier")
    ),
    request_body = OrderStatusUpdateRequest,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Non-numeric id or malformed body", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Unknown order", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_order_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<OrderStatusUpdateRequest>,
) -> Result<Json<Order>, ApiError> {
    let order_id = parse_id(&id, "order id")?;
    // The status string is stored verbatim; "Cancelado", "Entregue", and
    // anything else a client sends are all equally valid.
    match state.orders.update_status(order_id, body.status).await {
        Ok(order) => Ok(Json(order)),
        Err(StoreError::NotFound(_)) => Err(api_not_found("order not found")),
        Err(err) => Err(api_internal("failed to update order status", &err)),
    }
}

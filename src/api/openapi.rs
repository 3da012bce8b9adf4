//! OpenAPI schema aggregation for the gateway API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for
//! docs and client generation.
use crate::api::{
    foods, orders, restaurants, system,
    types::{ErrorResponse, HealthStatus, OrderStatusUpdateRequest},
    users,
};
use crate::cache::CachedCounts;
use crate::model::{Food, Order, Restaurant, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "entrega-gateway",
        version = "v1",
        description = "Read-through caching gateway for the fake delivery API"
    ),
    paths(
        system::health,
        users::list_users,
        users::get_user,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        foods::list_foods,
        foods::get_food,
        foods::foods_by_restaurant,
        foods::foods_by_category,
        orders::list_orders,
        orders::update_order_status
    ),
    components(schemas(
        HealthStatus,
        CachedCounts,
        ErrorResponse,
        User,
        Restaurant,
        Food,
        Order,
        OrderStatusUpdateRequest
    )),
    tags(
        (name = "system", description = "Health and cache diagnostics"),
        (name = "users", description = "Upstream user directory"),
        (name = "restaurants", description = "Upstream restaurant catalog"),
        (name = "foods", description = "Upstream food catalog and filters"),
        (name = "orders", description = "Locally owned demo orders")
    )
)]
pub struct ApiDoc;

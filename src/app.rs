//! Gateway HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and
//! testable. CORS is wide open: the API is consumed directly by browser
//! frontends served from other origins.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::cache::CatalogCache;
use crate::observability;
use crate::refresh::Refresher;
use crate::store::OrderStore;
use crate::upstream::UpstreamClient;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CatalogCache>,
    pub refresher: Arc<Refresher>,
    pub upstream: Arc<UpstreamClient>,
    pub orders: Arc<dyn OrderStore + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", axum::routing::get(api::system::health))
        .route("/api/users", axum::routing::get(api::users::list_users))
        .route("/api/users/:id", axum::routing::get(api::users::get_user))
        .route(
            "/api/restaurants",
            axum::routing::get(api::restaurants::list_restaurants),
        )
        .route(
            "/api/restaurants/:id",
            axum::routing::get(api::restaurants::get_restaurant),
        )
        .route("/api/foods", axum::routing::get(api::foods::list_foods))
        .route("/api/foods/:id", axum::routing::get(api::foods::get_food))
        .route(
            "/api/foods/restaurant/:restaurant_id",
            axum::routing::get(api::foods::foods_by_restaurant),
        )
        .route(
            "/api/foods/category/:category",
            axum::routing::get(api::foods::foods_by_category),
        )
        .route("/api/orders", axum::routing::get(api::orders::list_orders))
        .route(
            "/api/orders/:id/status",
            axum::routing::put(api::orders::update_order_status),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}

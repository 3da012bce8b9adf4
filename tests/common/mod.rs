use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use entrega::app::{AppState, build_router};
use entrega::cache::CatalogCache;
use entrega::refresh::Refresher;
use entrega::store::memory::InMemoryOrderStore;
use entrega::upstream::UpstreamClient;

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_body(response: axum::response::Response) -> bytes::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
}

/// Per-endpoint request counters for the mock upstream.
#[derive(Default)]
pub struct UpstreamHits {
    pub foods: AtomicUsize,
    pub restaurants: AtomicUsize,
    pub users: AtomicUsize,
    pub by_id: AtomicUsize,
}

pub fn sample_foods() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "X-Burger",
            "description": "Pão, carne e queijo",
            "image": "https://img.example/foods/1.png",
            "price": 25.9,
            "category": "Lanches",
            "tags": ["burger"],
            "restaurant_id": 1,
            "available": true
        },
        {
            "id": 2,
            "name": "Suco de Laranja",
            "description": "Natural, 500ml",
            "image": "https://img.example/foods/2.png",
            "price": 9.5,
            "category": "Bebidas",
            "tags": ["suco"],
            "restaurant_id": 1,
            "available": true
        },
        {
            "id": 3,
            "name": "Temaki de Salmão",
            "description": "Com cream cheese",
            "image": "https://img.example/foods/3.png",
            "price": 32.0,
            "category": "Japonesa",
            "tags": ["sushi", "salmão"],
            "restaurant_id": 2,
            "available": false
        }
    ])
}

pub fn sample_restaurants() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Lanchonete Central",
            "description": "Lanches e sucos",
            "image": "https://img.example/restaurants/1.png",
            "category": "Lanches",
            "rating": 4.6,
            "delivery_time": "30-40 min",
            "delivery_fee": 6.5,
            "address": "Rua A, 10"
        },
        {
            "id": 2,
            "name": "Sushi Oriental",
            "description": "Japonesa tradicional",
            "image": "https://img.example/restaurants/2.png",
            "category": "Japonesa",
            "rating": 4.8,
            "delivery_time": "45-60 min",
            "delivery_fee": 9.9,
            "address": "Av. B, 200"
        }
    ])
}

pub fn sample_users() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Maria Santos",
            "email": "maria@example.com",
            "phone": "11 99999-0001",
            "address": "Rua A, 10",
            "avatar": "https://img.example/users/1.png"
        },
        {
            "id": 2,
            "name": "Carlos Pereira",
            "email": "carlos@example.com",
            "phone": "11 99999-0002",
            "address": "Av. B, 200",
            "avatar": "https://img.example/users/2.png"
        }
    ])
}

fn collection_route(
    fixture: serde_json::Value,
    hits: Arc<UpstreamHits>,
    pick: fn(&UpstreamHits) -> &AtomicUsize,
) -> axum::routing::MethodRouter {
    get(move || {
        let fixture = fixture.clone();
        let hits = hits.clone();
        async move {
            pick(&hits).fetch_add(1, Ordering::SeqCst);
            Json(fixture)
        }
    })
}

fn by_id_route(fixture: serde_json::Value, hits: Arc<UpstreamHits>) -> axum::routing::MethodRouter {
    get(move |Path(id): Path<String>| {
        let fixture = fixture.clone();
        let hits = hits.clone();
        async move {
            hits.by_id.fetch_add(1, Ordering::SeqCst);
            let found = fixture
                .as_array()
                .expect("fixture array")
                .iter()
                .find(|item| item["id"].to_string() == id)
                .cloned();
            match found {
                Some(item) => Json(item).into_response(),
                None => (StatusCode::NOT_FOUND, "not found").into_response(),
            }
        }
    })
}

/// Serves the healthy upstream fixtures on an ephemeral port, counting
/// requests per endpoint.
pub async fn spawn_upstream(hits: Arc<UpstreamHits>) -> SocketAddr {
    let router = Router::new()
        .route(
            "/foods",
            collection_route(sample_foods(), hits.clone(), |hits| &hits.foods),
        )
        .route(
            "/restaurants",
            collection_route(sample_restaurants(), hits.clone(), |hits| &hits.restaurants),
        )
        .route(
            "/users",
            collection_route(sample_users(), hits.clone(), |hits| &hits.users),
        )
        .route("/foods/:id", by_id_route(sample_foods(), hits.clone()))
        .route(
            "/restaurants/:id",
            by_id_route(sample_restaurants(), hits.clone()),
        )
        .route("/users/:id", by_id_route(sample_users(), hits));
    serve_router(router).await
}

pub async fn serve_router(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

/// A gateway wired to the given upstream, plus its state for cache asserts.
pub fn gateway_parts(
    upstream_url: &str,
    ttl: Duration,
) -> (
    axum::routing::RouterIntoService<axum::body::Body, ()>,
    AppState,
) {
    let upstream =
        Arc::new(UpstreamClient::new(upstream_url, Duration::from_secs(2)).expect("client"));
    let cache = Arc::new(CatalogCache::new());
    let refresher = Arc::new(Refresher::new(cache.clone(), upstream.clone(), ttl));
    let state = AppState {
        cache,
        refresher,
        upstream,
        orders: Arc::new(InMemoryOrderStore::with_sample_orders()),
    };
    (build_router(state.clone()).into_service(), state)
}

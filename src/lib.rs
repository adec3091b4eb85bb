use axum::extract::State;
use axum::middleware::from_fn;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;

/// Assemble the full router over the given pool.
///
/// Used by both the binary and the integration tests, so the tests
/// exercise exactly what the server runs.
pub fn app(pool: SqlitePool) -> Router {
    let protected = category_routes()
        .merge(product_routes())
        .layer(from_fn(middleware::token_auth_middleware));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Token-protected resources
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

fn category_routes() -> Router<SqlitePool> {
    use handlers::categories;

    Router::new()
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/categories/:pk",
            get(categories::retrieve)
                .put(categories::update)
                .delete(categories::delete),
        )
}

fn product_routes() -> Router<SqlitePool> {
    use handlers::products;

    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:pk",
            get(products::retrieve).put(products::update),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Stockroom API",
        "version": version,
        "description": "Inventory backend - product categories and products",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "categories": "/categories[/:pk] (protected)",
            "products": "/products[/:pk] (protected)",
        }
    }))
}

async fn health(State(pool): State<SqlitePool>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store::pool::health_check(&pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}

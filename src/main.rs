use stockroom_api::{app, config, store};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Stockroom API in {:?} mode", config.environment);

    let pool = store::pool::connect_from_env()
        .await
        .unwrap_or_else(|e| panic!("failed to open database: {}", e));
    store::pool::init_schema(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to initialize schema: {}", e));

    let app = app(pool);

    // Allow tests or deployments to override port via env
    let port = std::env::var("STOCKROOM_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Stockroom API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

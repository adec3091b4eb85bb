use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::StoreError;
use crate::config;

/// Default development database when DATABASE_URL is unset.
const DEV_DATABASE_URL: &str = "sqlite://stockroom.db";

/// Build the connection pool from DATABASE_URL (or the dev default).
pub async fn connect_from_env() -> Result<SqlitePool, StoreError> {
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEV_DATABASE_URL.to_string());
    connect(&url).await
}

/// Build a connection pool for the given SQLite URL.
///
/// Foreign keys are enabled on every connection; category removal relies
/// on ON DELETE CASCADE reaching dependent products.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let db_config = &config::config().database;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connection_timeout))
        .connect_with(options)
        .await?;

    info!("Connected database pool for: {}", database_url);
    Ok(pool)
}

/// Create the tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) <= 100)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) <= 200),
            stock INTEGER NOT NULL CHECK (stock >= 0),
            stock_minimum INTEGER NOT NULL CHECK (stock_minimum >= 0),
            price INTEGER NOT NULL CHECK (price >= 0),
            category_id INTEGER NOT NULL REFERENCES category(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

use sqlx::SqlitePool;

use super::models::{NewProduct, ProductRecord};
use super::{categories, StoreError};

const SELECT_RECORD: &str = "\
    SELECT p.id, p.name, p.stock, p.stock_minimum, p.price, \
           p.category_id, c.name AS category_name \
    FROM product p JOIN category c ON c.id = p.category_id";

/// List products, optionally narrowed to names containing `name`.
pub async fn list(pool: &SqlitePool, name: &str) -> Result<Vec<ProductRecord>, StoreError> {
    let rows = if name.is_empty() {
        sqlx::query_as::<_, ProductRecord>(&format!("{} ORDER BY p.id", SELECT_RECORD))
            .fetch_all(pool)
            .await?
    } else {
        sqlx::query_as::<_, ProductRecord>(&format!(
            "{} WHERE p.name LIKE ? ORDER BY p.id",
            SELECT_RECORD
        ))
        .bind(format!("%{}%", name))
        .fetch_all(pool)
        .await?
    };

    Ok(rows)
}

/// Fetch by primary key, NotFound when missing.
pub async fn get_404(pool: &SqlitePool, id: i64) -> Result<ProductRecord, StoreError> {
    sqlx::query_as::<_, ProductRecord>(&format!("{} WHERE p.id = ?", SELECT_RECORD))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Product {} not found", id)))
}

/// Persist a new product. The referenced category must already exist;
/// a dangling category id fails the write and persists nothing.
pub async fn create(pool: &SqlitePool, fields: NewProduct) -> Result<i64, StoreError> {
    categories::get_404(pool, fields.category_id).await?;

    let result = sqlx::query(
        "INSERT INTO product (name, category_id, stock, stock_minimum, price) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&fields.name)
    .bind(fields.category_id)
    .bind(fields.stock)
    .bind(fields.stock_minimum)
    .bind(fields.price)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every field of an existing product, re-resolving the category.
pub async fn update(pool: &SqlitePool, id: i64, fields: NewProduct) -> Result<(), StoreError> {
    get_404(pool, id).await?;
    categories::get_404(pool, fields.category_id).await?;

    sqlx::query(
        "UPDATE product SET name = ?, category_id = ?, stock = ?, stock_minimum = ?, price = ? \
         WHERE id = ?",
    )
    .bind(&fields.name)
    .bind(fields.category_id)
    .bind(fields.stock)
    .bind(fields.stock_minimum)
    .bind(fields.price)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

use sqlx::SqlitePool;

use super::models::Category;
use super::StoreError;

pub async fn create(pool: &SqlitePool, name: &str) -> Result<Category, StoreError> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO category (name) VALUES (?) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Fetch by primary key, NotFound when missing.
pub async fn get_404(pool: &SqlitePool, id: i64) -> Result<Category, StoreError> {
    sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Category {} not found", id)))
}

/// Overwrite the name of an existing category.
pub async fn update(pool: &SqlitePool, id: i64, name: &str) -> Result<Category, StoreError> {
    let mut category = get_404(pool, id).await?;

    sqlx::query("UPDATE category SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;

    category.name = name.to_string();
    Ok(category)
}

/// Remove a category; dependent products go with it (ON DELETE CASCADE).
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("Category {} not found", id)));
    }

    Ok(())
}

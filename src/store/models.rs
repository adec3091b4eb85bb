use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Product row joined with its category name, as the API serves it.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    pub stock_minimum: i64,
    pub price: i64,
    pub category_id: i64,
    pub category_name: String,
}

/// Field set written on product create and update.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category_id: i64,
    pub stock: i64,
    pub stock_minimum: i64,
    pub price: i64,
}

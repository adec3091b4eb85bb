use thiserror::Error;

pub mod categories;
pub mod filter;
pub mod models;
pub mod pool;
pub mod products;

pub use filter::CategoryFilter;
pub use models::{Category, NewProduct, ProductRecord};

/// Errors from the store layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

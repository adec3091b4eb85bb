use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::api::{paginate, Payload};
use crate::config;
use crate::error::ApiError;
use crate::store::{self, CategoryFilter};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub page: Option<String>,
    pub select_mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    pub name: String,
}

/// GET /categories - filtered, paginated category listing
pub async fn list(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = CategoryFilter::new()
        .by_id(&query.id)
        .by_name(&query.name)
        .fetch(&pool)
        .await?;

    let mut payload = Payload::new();

    // Select mode serves UI search boxes that want the unpaginated list.
    let select_mode = query.select_mode.as_deref().unwrap_or("");
    let categories = if select_mode.is_empty() {
        let page = paginate(
            categories,
            query.page.as_deref(),
            config::config().api.category_page_size,
        );
        payload.set_links(page.next(), page.prev());
        page.items
    } else {
        categories
    };

    let data: Vec<Value> = categories
        .iter()
        .map(|category| json!({ "id": category.id, "name": category.name }))
        .collect();
    payload.set_results(Value::Array(data));

    Ok((StatusCode::OK, Json(payload)))
}

/// POST /categories - create a category
pub async fn create(
    State(pool): State<SqlitePool>,
    Json(body): Json<CategoryBody>,
) -> Result<impl IntoResponse, ApiError> {
    store::categories::create(&pool, &body.name).await?;

    let mut payload = Payload::new();
    payload.reset();
    payload.set_results(json!({ "message": "Success create data" }));

    Ok((StatusCode::CREATED, Json(payload)))
}

/// GET /categories/:pk - retrieve one category
pub async fn retrieve(
    State(pool): State<SqlitePool>,
    Path(pk): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let category = store::categories::get_404(&pool, pk).await?;

    let mut payload = Payload::new();
    payload.set_results(json!({ "id": category.id, "name": category.name }));

    Ok((StatusCode::OK, Json(payload)))
}

/// PUT /categories/:pk - overwrite the name
pub async fn update(
    State(pool): State<SqlitePool>,
    Path(pk): Path<i64>,
    Json(body): Json<CategoryBody>,
) -> Result<impl IntoResponse, ApiError> {
    store::categories::update(&pool, pk, &body.name).await?;

    let mut payload = Payload::new();
    payload.reset();
    payload.set_results(json!({ "message": "Success update category" }));

    Ok((StatusCode::OK, Json(payload)))
}

/// DELETE /categories/:pk - remove a category and its products
pub async fn delete(
    State(pool): State<SqlitePool>,
    Path(pk): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    store::categories::delete(&pool, pk).await?;

    // 204 carries no body; clients key off the status alone.
    Ok(StatusCode::NO_CONTENT)
}

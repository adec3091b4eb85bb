use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::api::{paginate, NO_PAGE};
use crate::config;
use crate::error::ApiError;
use crate::store::{self, NewProduct, ProductRecord};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub name: String,
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub name: String,
    pub category_id: i64,
    pub stock: i64,
    pub stock_minimum: i64,
    pub price: i64,
}

impl From<ProductBody> for NewProduct {
    fn from(body: ProductBody) -> Self {
        Self {
            name: body.name,
            category_id: body.category_id,
            stock: body.stock,
            stock_minimum: body.stock_minimum,
            price: body.price,
        }
    }
}

// The product endpoints keep their own envelope of the same three-field
// shape, with "" as the links sentinel. Deliberately not unified with the
// category Payload.
fn product_envelope(results: Value) -> Value {
    json!({
        "results": results,
        "links": { "next": "", "prev": "" },
        "meta": {}
    })
}

fn record_to_value(product: &ProductRecord) -> Value {
    json!({
        "id": product.id,
        "name": product.name,
        "category": {
            "id": product.category_id,
            "name": product.category_name
        },
        "category_human": product.category_name,
        "stock": product.stock,
        "stock_minimum": product.stock_minimum,
        "price": product.price
    })
}

/// GET /products - paginated product listing, optional name filter
pub async fn list(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let products = store::products::list(&pool, &query.name).await?;
    let page = paginate(
        products,
        query.page.as_deref(),
        config::config().api.product_page_size,
    );

    let results: Vec<Value> = page.items.iter().map(record_to_value).collect();

    let mut payload = product_envelope(Value::Array(results));
    if page.next() != NO_PAGE {
        payload["links"]["next"] = json!(page.next());
    }
    if page.prev() != NO_PAGE {
        payload["links"]["prev"] = json!(page.prev());
    }

    Ok((StatusCode::OK, Json(payload)))
}

/// POST /products - create a product under an existing category
pub async fn create(
    State(pool): State<SqlitePool>,
    Json(body): Json<ProductBody>,
) -> Result<impl IntoResponse, ApiError> {
    store::products::create(&pool, body.into()).await?;

    let payload = product_envelope(json!({ "message": "Success create product" }));
    Ok((StatusCode::CREATED, Json(payload)))
}

/// GET /products/:pk - product detail
pub async fn retrieve(
    State(pool): State<SqlitePool>,
    Path(pk): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = store::products::get_404(&pool, pk).await?;

    let payload = product_envelope(record_to_value(&product));
    Ok((StatusCode::OK, Json(payload)))
}

/// PUT /products/:pk - overwrite all fields, re-resolving the category
pub async fn update(
    State(pool): State<SqlitePool>,
    Path(pk): Path<i64>,
    Json(body): Json<ProductBody>,
) -> Result<impl IntoResponse, ApiError> {
    store::products::update(&pool, pk, body.into()).await?;

    let payload = product_envelope(json!({ "message": "Success update product" }));
    Ok((StatusCode::OK, Json(payload)))
}

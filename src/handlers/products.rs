use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    db,
    error::AppResult,
    extract::AppJson,
    models::{Product, ProductUpdate, ProductWithCategory},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

/// Every product with its category name resolved at request time.
#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "All products with their category name", body = [ProductWithCategory]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<ProductWithCategory>>)> {
    let start = Instant::now();
    let products = db::fetch_all_products(&state.db).await?;

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok((StatusCode::OK, Json(products)))
}

// ── Create ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Unknown category or SKU already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Product>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let product = db::insert_product(&state.db, payload).await?;

    info!(
        sku = %product.sku,
        category_id = product.category_id,
        elapsed_ms = start.elapsed().as_millis(),
        "Created product"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Product created successfully",
            "product": product,
        })),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    put, path = "/products/{sku}", tag = "products",
    params(("sku" = String, Path, description = "Product SKU, case-insensitive")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Supplied fields updated"),
        (status = 400, description = "Unknown category"),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    AppJson(payload): AppJson<ProductUpdate>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let product = db::update_product(&state.db, &sku, &payload).await?;

    info!(
        sku = %product.sku,
        elapsed_ms = start.elapsed().as_millis(),
        "Updated product"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Product updated successfully",
            "product": product,
        })),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    delete, path = "/products/{sku}", tag = "products",
    params(("sku" = String, Path, description = "Product SKU, case-insensitive")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let product = db::delete_product(&state.db, &sku).await?;

    info!(
        sku = %product.sku,
        elapsed_ms = start.elapsed().as_millis(),
        "Deleted product"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Product with SKU {} deleted successfully", product.sku),
        })),
    ))
}

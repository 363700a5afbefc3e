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
    models::Category,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    responses(
        (status = 200, description = "All categories in stored order", body = [Category]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Category>>)> {
    let start = Instant::now();
    let categories = db::fetch_all_categories(&state.db).await?;

    info!(
        count = categories.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed categories"
    );

    Ok((StatusCode::OK, Json(categories)))
}

// ── Create ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = Category,
    responses(
        (status = 201, description = "Category created"),
        (status = 400, description = "A category with this ID already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Category>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let category = db::insert_category(&state.db, payload).await?;

    info!(
        id = category.id,
        name = %category.name,
        elapsed_ms = start.elapsed().as_millis(),
        "Created category"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Category created successfully",
            "category": category,
        })),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    put, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Current category ID")),
    request_body = Category,
    responses(
        (status = 200, description = "Category replaced"),
        (status = 400, description = "New ID is taken by another category"),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<Category>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let category = db::update_category(&state.db, id, payload).await?;

    info!(
        id,
        new_id = category.id,
        elapsed_ms = start.elapsed().as_millis(),
        "Updated category"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Category updated successfully",
            "category": category,
        })),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    delete, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 400, description = "Category is used by existing products"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    db::delete_category(&state.db, id).await?;

    info!(id, elapsed_ms = start.elapsed().as_millis(), "Deleted category");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Category with ID {} deleted successfully", id),
        })),
    ))
}

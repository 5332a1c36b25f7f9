// src/handlers/product.rs
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use crate::dtos::product::{ProductDto, SORT_FIELDS};
use crate::error::AppError;
use crate::extractors::{AppPath, AppQuery, ValidatedJson};
use crate::pagination::{Page, PageParams, PageRequest};
use crate::state::AppState;

// GET /products?page=&size=&sort= - Paged, sortable list
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<ProductDto>>, AppError> {
    let request = PageRequest::from_params(params, SORT_FIELDS).map_err(AppError::validation)?;

    let page = state.products.find_all_paged(request).await?;
    Ok(Json(page))
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductDto>, AppError> {
    let product = state.products.find_by_id(id).await?;
    Ok(Json(product))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.insert(payload).await?;

    let location = product
        .id
        .map(|id| format!("/products/{}", id))
        .unwrap_or_else(|| "/products".to_string());

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(product)))
}

// PUT /products/{id} - Replace product fields
#[instrument(skip(state, payload))]
pub async fn update_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> Result<Json<ProductDto>, AppError> {
    let product = state.products.update(id, payload).await?;
    Ok(Json(product))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

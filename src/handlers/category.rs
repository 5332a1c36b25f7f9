// src/handlers/category.rs
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use crate::dtos::category::{CategoryDto, SORT_FIELDS};
use crate::error::AppError;
use crate::extractors::{AppPath, AppQuery, ValidatedJson};
use crate::pagination::{Page, PageParams, PageRequest};
use crate::state::AppState;

// GET /categories?page=&size=&sort=
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<CategoryDto>>, AppError> {
    let request = PageRequest::from_params(params, SORT_FIELDS).map_err(AppError::validation)?;
    let page = state.categories.find_all_paged(request).await?;
    Ok(Json(page))
}

// GET /categories/{id}
#[instrument(skip(state))]
pub async fn get_category(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryDto>, AppError> {
    Ok(Json(state.categories.find_by_id(id).await?))
}

// POST /categories
#[instrument(skip(state, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = state.categories.insert(payload).await?;

    let location = category
        .id
        .map(|id| format!("/categories/{}", id))
        .unwrap_or_else(|| "/categories".to_string());

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(category)))
}

// PUT /categories/{id}
#[instrument(skip(state, payload))]
pub async fn update_category(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryDto>,
) -> Result<Json<CategoryDto>, AppError> {
    Ok(Json(state.categories.update(id, payload).await?))
}

// DELETE /categories/{id} - 400 while products still reference it
#[instrument(skip(state))]
pub async fn delete_category(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

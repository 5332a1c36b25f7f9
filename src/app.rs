use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppConfig, database, error::AppError, routes, state::AppState};

/// Every route, wired to the sqlx-backed services.
pub fn router(db_pool: SqlitePool) -> Router {
    routes::create_router()
        .with_state(AppState::new(db_pool.clone()))
        .merge(routes::health::routes(db_pool))
}

pub async fn build(config: &AppConfig) -> Result<Router, AppError> {
    let pool = database::create_pool(&config.database).await?;

    Ok(router(pool)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, AppError> {
    if config.cors.allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let allowed_origins = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(allowed_origins))
}

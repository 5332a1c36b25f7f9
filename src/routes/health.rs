use axum::{routing::get, Router};
use sqlx::SqlitePool;

use crate::handlers::health::health_check;

pub fn routes(db_pool: SqlitePool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(db_pool)
}

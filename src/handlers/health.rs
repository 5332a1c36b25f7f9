use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;
use tracing::error;

use crate::database;

// GET /health - 503 when the store cannot be reached
pub async fn health_check(State(db_pool): State<SqlitePool>) -> (StatusCode, &'static str) {
    match database::check_health(&db_pool).await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
    }
}

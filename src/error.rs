// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

use crate::services::ServiceError;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    NotFound(String),
    ValidationError(String),
    InvalidFields(ValidationErrors),
    IntegrityViolation(String),
    ConfigError(String),
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::ConfigError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::InvalidFields(_)
            | AppError::IntegrityViolation(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::ConfigError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::InvalidFields(errors) => write!(f, "Validation error: {}", errors),
            AppError::IntegrityViolation(msg) => write!(f, "Integrity violation: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!(error = ?e, "Database error");
                json!({ "error": "Database error occurred" })
            }
            AppError::ConfigError(ref msg) | AppError::Internal(ref msg) => {
                tracing::error!(%msg, "Internal error");
                json!({ "error": "Internal server error" })
            }
            AppError::InvalidFields(errors) => {
                let details = errors
                    .field_errors()
                    .iter()
                    .map(|(field, errors)| {
                        let messages: Vec<serde_json::Value> = errors
                            .iter()
                            .map(|err| {
                                json!({
                                    "code": err.code,
                                    "message": err.message,
                                })
                            })
                            .collect();
                        (field.to_string(), json!(messages))
                    })
                    .collect::<serde_json::Map<_, _>>();

                json!({
                    "error": "Request validation failed",
                    "details": details,
                })
            }
            AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::IntegrityViolation(msg) => json!({ "error": msg }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

// Domain error kinds become HTTP-facing errors here and nowhere else.
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            ServiceError::IntegrityViolation(msg) => AppError::IntegrityViolation(msg),
            ServiceError::Validation(msg) => AppError::ValidationError(msg),
            ServiceError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

use thiserror::Error;

/// Domain error kinds. The service layer is the only place store conditions
/// are turned into these.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    IntegrityViolation(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ServiceError::NotFound(format!("{} {} not found", entity, id))
    }
}

/// Classify a failed repository write on `entity` with the given id.
pub(crate) fn translate_write_error(err: sqlx::Error, entity: &str, id: Option<i64>) -> ServiceError {
    match err {
        sqlx::Error::RowNotFound => match id {
            Some(id) => ServiceError::not_found(entity, id),
            None => ServiceError::NotFound(format!("{} not found", entity)),
        },
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            tracing::warn!(entity, ?id, error = %db, "Integrity violation");
            ServiceError::IntegrityViolation(match id {
                Some(id) => format!("Integrity violation: {} {} is referenced by other records", entity, id),
                None => format!("Integrity violation: {} references a missing record", entity),
            })
        }
        other => ServiceError::Database(other),
    }
}

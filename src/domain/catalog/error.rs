use crate::error::AppError;

/// Storage-level failures of the catalog store
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return CatalogError::ConstraintViolation(db_err.message().to_string());
            }
        }
        CatalogError::Storage(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ConstraintViolation(msg) => AppError::Conflict(msg),
            CatalogError::Storage(msg) => AppError::Internal(msg),
        }
    }
}
